/* src/cli/core/src/dev/mod.rs */

mod process;

use std::path::Path;

use anyhow::Result;
use isle_codegen::{DevOutcome, EnvStore, RegenReason};

use crate::config::IsleConfig;
use crate::generate::{print_summary, select_formatter};
use crate::ui::{self, DIM, RESET};
use crate::version::ensure_runtime_version;

use process::{resolve_entry, run_entrypoint};

/// `isle dev`: regenerate the manifest when routes or islands changed, then
/// hand off to the entrypoint with the updated state channel in its environment.
pub async fn run_dev(
  config: &IsleConfig,
  project_dir: &Path,
  entry: Option<&str>,
  no_fmt: bool,
) -> Result<()> {
  ui::banner("dev");

  if let Some(ref minimum) = config.dev.min_runtime_version {
    ensure_runtime_version(&config.dev.runtime, minimum)?;
  }

  let options = config.project_options();
  let formatter = select_formatter(config, project_dir, no_fmt)?;
  let mut store = EnvStore::from_env();

  let report = isle_codegen::run_dev(project_dir, &options, &mut store, formatter.as_ref())?;
  match &report.outcome {
    DevOutcome::Regenerated { summary, reason } => {
      match reason {
        RegenReason::FirstRun => ui::arrow("no previous manifest, generating"),
        RegenReason::Changed => ui::arrow("routes or islands changed, regenerating"),
        RegenReason::CorruptSnapshot(err) => {
          ui::warn(&format!("previous manifest unreadable ({err}), regenerating"));
        }
      }
      print_summary(summary);
    }
    DevOutcome::Unchanged => {
      ui::ok(&format!("manifest up to date {DIM}({}){RESET}", options.out_file));
    }
  }

  let entry = resolve_entry(project_dir, entry.unwrap_or(&config.dev.entry))?;
  ui::arrow(&format!("starting {} {DIM}{}{RESET}", config.dev.runtime, entry.display()));
  ui::blank();
  run_entrypoint(&config.dev.runtime, &entry, project_dir, store.exports()).await
}
