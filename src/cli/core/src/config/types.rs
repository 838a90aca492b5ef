/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use isle_codegen::ProjectOptions;
use isle_codegen::discover::DEFAULT_EXCLUDE;
use isle_codegen::options::{DEFAULT_CONFIG_FILE, DEFAULT_OUT_FILE};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IsleConfig {
  #[serde(default)]
  pub generate: GenerateSection,
  #[serde(default)]
  pub dev: DevSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSection {
  #[serde(default = "default_out_file")]
  pub out_file: String,
  #[serde(default = "default_config_file")]
  pub config_file: String,
  #[serde(default = "default_exclude")]
  pub exclude: Vec<String>,
  #[serde(default = "default_formatter")]
  pub formatter: String,
}

impl Default for GenerateSection {
  fn default() -> Self {
    Self {
      out_file: default_out_file(),
      config_file: default_config_file(),
      exclude: default_exclude(),
      formatter: default_formatter(),
    }
  }
}

fn default_out_file() -> String {
  DEFAULT_OUT_FILE.to_string()
}

fn default_config_file() -> String {
  DEFAULT_CONFIG_FILE.to_string()
}

fn default_exclude() -> Vec<String> {
  DEFAULT_EXCLUDE.iter().map(|s| (*s).to_string()).collect()
}

fn default_formatter() -> String {
  "deno fmt -".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevSection {
  #[serde(default = "default_entry")]
  pub entry: String,
  #[serde(default = "default_runtime")]
  pub runtime: String,
  pub min_runtime_version: Option<String>,
}

impl Default for DevSection {
  fn default() -> Self {
    Self { entry: default_entry(), runtime: default_runtime(), min_runtime_version: None }
  }
}

fn default_entry() -> String {
  "main.ts".to_string()
}

fn default_runtime() -> String {
  "deno run -A".to_string()
}

impl IsleConfig {
  pub fn validate(&self) -> Result<()> {
    if self.generate.out_file.trim().is_empty() {
      bail!("generate.out_file must not be empty");
    }
    if self.generate.config_file.trim().is_empty() {
      bail!("generate.config_file must not be empty");
    }
    if self.generate.formatter.trim().is_empty() {
      bail!("generate.formatter must not be empty");
    }
    if self.dev.runtime.trim().is_empty() {
      bail!("dev.runtime must not be empty");
    }
    if self.dev.entry.trim().is_empty() {
      bail!("dev.entry must not be empty");
    }
    if let Some(ref v) = self.dev.min_runtime_version
      && crate::version::parse_version(v).is_err()
    {
      bail!("dev.min_runtime_version \"{v}\" is not a valid version");
    }
    Ok(())
  }

  pub fn project_options(&self) -> ProjectOptions {
    ProjectOptions {
      out_file: self.generate.out_file.clone(),
      config_file: self.generate.config_file.clone(),
      exclude: self.generate.exclude.clone(),
    }
  }
}
