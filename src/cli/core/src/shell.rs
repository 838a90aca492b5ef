/* src/cli/core/src/shell.rs */

// Subprocess helpers for querying the host runtime.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Run a program and return its stdout, bail on failure (includes stderr on error).
pub(crate) fn command_stdout(program: &str, args: &[&str]) -> Result<String> {
  let output = Command::new(program)
    .args(args)
    .stdin(Stdio::null())
    .output()
    .with_context(|| format!("failed to run {program}"))?;
  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut msg = format!("{program} exited with status {}", output.status);
    if !stderr.is_empty() {
      msg.push('\n');
      msg.push_str(&stderr);
    }
    bail!("{msg}");
  }
  Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Locate a command on PATH, following symlinks to the real executable.
pub(crate) fn which(cmd: &str) -> Option<PathBuf> {
  let output = Command::new("which")
    .arg(cmd)
    .stdin(Stdio::null())
    .stderr(Stdio::null())
    .output()
    .ok()?;
  if !output.status.success() {
    return None;
  }
  let path = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
  Some(path.canonicalize().unwrap_or(path))
}
