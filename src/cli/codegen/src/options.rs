/* src/cli/codegen/src/options.rs */

use crate::discover::DEFAULT_EXCLUDE;

pub const DEFAULT_OUT_FILE: &str = "isle.gen.ts";
pub const DEFAULT_CONFIG_FILE: &str = "deno.json";

/// Project-level knobs shared by discovery and generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
  /// Generated module path, relative to the project directory.
  pub out_file: String,
  /// Base configuration embedded into the generated module.
  pub config_file: String,
  /// Directory names pruned from discovery walks.
  pub exclude: Vec<String>,
}

impl Default for ProjectOptions {
  fn default() -> Self {
    Self {
      out_file: DEFAULT_OUT_FILE.to_string(),
      config_file: DEFAULT_CONFIG_FILE.to_string(),
      exclude: DEFAULT_EXCLUDE.iter().map(|s| (*s).to_string()).collect(),
    }
  }
}
