/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::IsleConfig;

pub const CONFIG_FILE: &str = "isle.toml";

/// Resolve the project directory argument to an absolute path.
pub fn resolve_project_dir(dir: &Path) -> Result<PathBuf> {
  let resolved =
    dir.canonicalize().with_context(|| format!("failed to canonicalize {}", dir.display()))?;
  if !resolved.is_dir() {
    bail!("{} is not a directory", resolved.display());
  }
  Ok(resolved)
}

/// Load `<project>/isle.toml`, falling back to defaults when it is absent.
pub fn load_isle_config(project_dir: &Path) -> Result<IsleConfig> {
  let path = project_dir.join(CONFIG_FILE);
  if !path.is_file() {
    return Ok(IsleConfig::default());
  }
  let content =
    std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: IsleConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}
