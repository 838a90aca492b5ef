/* src/cli/codegen/src/typescript/generator.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::format::Formatter;
use crate::manifest::Manifest;
use crate::options::ProjectOptions;

use super::render::render_module;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
  pub routes: usize,
  pub islands: usize,
  pub path: PathBuf,
}

/// Render, format and write the manifest module to `<project>/<out_file>`.
///
/// Formatting happens before the write, so a formatter failure leaves any
/// existing output untouched.
pub fn generate(
  project_dir: &Path,
  manifest: &Manifest,
  options: &ProjectOptions,
  formatter: &dyn Formatter,
) -> Result<GenerateSummary> {
  let source = render_module(manifest, &options.config_file);
  let formatted = formatter.format(&source).context("failed to format generated manifest")?;

  let path = project_dir.join(&options.out_file);
  std::fs::write(&path, formatted).with_context(|| format!("failed to write {}", path.display()))?;

  Ok(GenerateSummary { routes: manifest.routes.len(), islands: manifest.islands.len(), path })
}
