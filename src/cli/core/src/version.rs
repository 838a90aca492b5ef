/* src/cli/core/src/version.rs */

// Minimum host runtime version guard.

use std::path::Path;

use anyhow::{Context, Result, bail};
use semver::Version;

use isle_codegen::format::split_command_line;

use crate::shell::{command_stdout, which};
use crate::ui;

/// Parse `1.40`, `v1.40.2` or `1.40.2-rc.1`; a missing patch is treated as `.0`.
pub fn parse_version(raw: &str) -> Result<Version> {
  let trimmed = raw.trim().trim_start_matches('v');
  let core_len = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
  let dots = trimmed[..core_len].matches('.').count();
  let normalized = match dots {
    0 => format!("{}.0.0{}", &trimmed[..core_len], &trimmed[core_len..]),
    1 => format!("{}.0{}", &trimmed[..core_len], &trimmed[core_len..]),
    _ => trimmed.to_string(),
  };
  Version::parse(&normalized).with_context(|| format!("invalid version \"{raw}\""))
}

/// Pull the first version-looking token out of `<runtime> --version` output,
/// e.g. `deno 1.40.2 (release, x86_64-unknown-linux-gnu)` -> `1.40.2`.
pub fn extract_version(output: &str) -> Option<&str> {
  output
    .split_whitespace()
    .map(|tok| tok.trim_start_matches('v').trim_end_matches([',', ')', ';']))
    .find(|tok| tok.starts_with(|c: char| c.is_ascii_digit()) && tok.contains('.'))
}

fn is_package_manager_install(exec_path: &Path) -> bool {
  let path = exec_path.to_string_lossy();
  path.contains("/homebrew/") || path.contains("/Cellar/") || path.contains("/linuxbrew/")
}

/// Compare versions; on failure return the remediation message for the operator.
pub fn check_minimum_version(
  runtime: &str,
  current: &str,
  minimum: &str,
  exec_path: Option<&Path>,
) -> Result<()> {
  let current_v = parse_version(current)?;
  let minimum_v = parse_version(minimum)?;
  if current_v >= minimum_v {
    return Ok(());
  }
  let hint = if exec_path.is_some_and(is_package_manager_install) {
    format!("{runtime} appears to be installed with Homebrew; run `brew upgrade {runtime}`")
  } else {
    format!("run `{runtime} upgrade`")
  };
  bail!(
    "isle requires {runtime} {minimum} or newer, but {current} is installed\n{hint} to update"
  )
}

/// Exit the process with a remediation message when `current < minimum`.
pub fn ensure_minimum_version(
  runtime: &str,
  current: &str,
  minimum: &str,
  exec_path: Option<&Path>,
) {
  if let Err(e) = check_minimum_version(runtime, current, minimum, exec_path) {
    ui::fail(&e.to_string());
    std::process::exit(1);
  }
}

/// Query the configured runtime command and enforce the minimum version.
pub fn ensure_runtime_version(runtime_command: &str, minimum: &str) -> Result<()> {
  let (program, _) = split_command_line(runtime_command)?;
  let output = command_stdout(&program, &["--version"])?;
  let current = extract_version(&output)
    .with_context(|| format!("could not read a version from `{program} --version`"))?;
  let exec_path = which(&program);
  ensure_minimum_version(&program, current, minimum, exec_path.as_deref());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_partial_versions() {
    assert_eq!(parse_version("1.40").unwrap(), Version::new(1, 40, 0));
    assert_eq!(parse_version("v2").unwrap(), Version::new(2, 0, 0));
    assert_eq!(parse_version(" 1.40.2 ").unwrap(), Version::new(1, 40, 2));
    assert!(parse_version("1.40-rc.1").unwrap().pre.as_str() == "rc.1");
    assert!(parse_version("latest").is_err());
  }

  #[test]
  fn extracts_version_from_runtime_output() {
    let out = "deno 1.40.2 (release, x86_64-unknown-linux-gnu)\nv8 12.1.285.27\n";
    assert_eq!(extract_version(out), Some("1.40.2"));
    assert_eq!(extract_version("v20.11.0\n"), Some("20.11.0"));
    assert_eq!(extract_version("unknown"), None);
  }

  #[test]
  fn newer_or_equal_passes() {
    check_minimum_version("deno", "1.40.2", "1.40.2", None).unwrap();
    check_minimum_version("deno", "2.0.0", "1.40", None).unwrap();
  }

  #[test]
  fn older_suggests_self_upgrade() {
    let path = Path::new("/usr/local/bin/deno");
    let err =
      check_minimum_version("deno", "1.19.0", "1.20.0", Some(path)).unwrap_err().to_string();
    assert!(err.contains("requires deno 1.20.0 or newer, but 1.19.0 is installed"), "{err}");
    assert!(err.contains("`deno upgrade`"), "{err}");
  }

  #[test]
  fn homebrew_install_suggests_brew() {
    let path = Path::new("/opt/homebrew/Cellar/deno/1.19.0/bin/deno");
    let err =
      check_minimum_version("deno", "1.19.0", "1.20.0", Some(path)).unwrap_err().to_string();
    assert!(err.contains("`brew upgrade deno`"), "{err}");
  }
}
