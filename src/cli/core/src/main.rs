/* src/cli/core/src/main.rs */

mod config;
mod dev;
mod generate;
mod shell;
mod ui;
mod version;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use config::{load_isle_config, resolve_project_dir};

#[derive(Parser)]
#[command(name = "isle", about = "isle development manifest tool", version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Regenerate the manifest if routes or islands changed, then run the entrypoint
  Dev {
    /// Project directory
    #[arg(default_value = ".")]
    project: PathBuf,
    /// Entrypoint relative to the project (overrides dev.entry)
    #[arg(short, long)]
    entry: Option<String>,
    /// Write generated output without running the formatter
    #[arg(long)]
    no_fmt: bool,
  },
  /// Regenerate the manifest unconditionally
  Manifest {
    /// Project directory
    #[arg(default_value = ".")]
    project: PathBuf,
    /// Write generated output without running the formatter
    #[arg(long)]
    no_fmt: bool,
  },
  /// List discovered routes and islands without writing anything
  Check {
    /// Project directory
    #[arg(default_value = ".")]
    project: PathBuf,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Dev { project, entry, no_fmt } => {
      let project_dir = resolve_project_dir(&project)?;
      let config = load_isle_config(&project_dir)?;
      dev::run_dev(&config, &project_dir, entry.as_deref(), no_fmt).await?;
    }
    Command::Manifest { project, no_fmt } => {
      let project_dir = resolve_project_dir(&project)?;
      let config = load_isle_config(&project_dir)?;
      generate::run_manifest(&config, &project_dir, no_fmt)?;
    }
    Command::Check { project } => {
      let project_dir = resolve_project_dir(&project)?;
      let config = load_isle_config(&project_dir)?;
      generate::run_check(&config, &project_dir)?;
    }
  }

  Ok(())
}
