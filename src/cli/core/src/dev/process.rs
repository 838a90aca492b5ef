/* src/cli/core/src/dev/process.rs */

use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::process::Command;
use tokio::signal;

use isle_codegen::format::split_command_line;

use crate::ui::{DIM, RESET};

/// Resolve the entrypoint against the project directory to an absolute path.
pub(super) fn resolve_entry(project_dir: &Path, entry: &str) -> Result<PathBuf> {
  let path = project_dir.join(entry);
  path.canonicalize().with_context(|| format!("entrypoint not found: {}", path.display()))
}

/// Run `<runtime...> <entry>` in the project directory and wait for it,
/// or for Ctrl+C. The child is killed if it is still running on return.
pub(super) async fn run_entrypoint<'a>(
  runtime: &str,
  entry: &Path,
  project_dir: &Path,
  env_vars: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<()> {
  let (program, args) = split_command_line(runtime)?;
  let mut cmd = Command::new(&program);
  cmd.args(&args);
  cmd.arg(entry);
  cmd.current_dir(project_dir);
  cmd.stdin(Stdio::inherit());
  cmd.stdout(Stdio::inherit());
  cmd.stderr(Stdio::inherit());
  cmd.kill_on_drop(true);
  for (key, val) in env_vars {
    cmd.env(key, val);
  }

  let mut child =
    cmd.spawn().with_context(|| format!("failed to start {runtime} {}", entry.display()))?;

  tokio::select! {
    _ = signal::ctrl_c() => {
      println!();
      println!("  {DIM}shutting down...{RESET}");
      Ok(())
    }
    status = child.wait() => {
      let status = status.with_context(|| format!("failed to wait for {program}"))?;
      if !status.success() {
        bail!("{} exited with {status}", entry.display());
      }
      Ok(())
    }
  }
}
