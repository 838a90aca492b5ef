/* src/cli/core/src/generate.rs */

// `isle manifest` and `isle check`, plus the formatter and summary helpers
// shared with `isle dev`.

use std::path::Path;

use anyhow::Result;
use isle_codegen::{
  Category, CommandFormatter, Formatter, GenerateSummary, IdentityFormatter, Manifest,
};

use crate::config::IsleConfig;
use crate::ui::{self, DIM, RESET};

/// The configured external formatter, or the identity formatter with `--no-fmt`.
pub fn select_formatter(
  config: &IsleConfig,
  project_dir: &Path,
  no_fmt: bool,
) -> Result<Box<dyn Formatter>> {
  if no_fmt {
    return Ok(Box::new(IdentityFormatter));
  }
  let formatter =
    CommandFormatter::from_command_line(&config.generate.formatter)?.current_dir(project_dir);
  Ok(Box::new(formatter))
}

pub fn print_summary(summary: &GenerateSummary) {
  ui::ok(&format!(
    "{}  {DIM}{} routes, {} islands{RESET}",
    summary.path.display(),
    summary.routes,
    summary.islands
  ));
}

fn category_heading(manifest: &Manifest, category: Category) -> String {
  format!("{category}s ({})", manifest.entries(category).len())
}

fn print_manifest(manifest: &Manifest) {
  for category in [Category::Route, Category::Island] {
    ui::arrow(&category_heading(manifest, category));
    for id in manifest.entries(category) {
      ui::detail(id);
    }
  }
}

/// Regenerate unconditionally; the dev snapshot is left alone.
pub fn run_manifest(config: &IsleConfig, project_dir: &Path, no_fmt: bool) -> Result<()> {
  ui::banner("manifest");
  let formatter = select_formatter(config, project_dir, no_fmt)?;
  let (_, summary) =
    isle_codegen::regenerate(project_dir, &config.project_options(), formatter.as_ref())?;
  print_summary(&summary);
  Ok(())
}

/// Print what discovery finds without writing anything.
pub fn run_check(config: &IsleConfig, project_dir: &Path) -> Result<()> {
  ui::banner("check");
  let manifest = isle_codegen::discover(project_dir, &config.generate.exclude)?;
  print_manifest(&manifest);
  Ok(())
}
