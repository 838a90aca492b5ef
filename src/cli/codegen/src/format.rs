/* src/cli/codegen/src/format.rs */

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Split a command line on whitespace: `"deno fmt -"` -> `deno` + `["fmt", "-"]`.
pub fn split_command_line(command: &str) -> Result<(String, Vec<String>)> {
  let mut parts = command.split_whitespace().map(str::to_string);
  let Some(program) = parts.next() else {
    bail!("command is empty");
  };
  Ok((program, parts.collect()))
}

/// Pretty-printer applied to generated source before it is written.
pub trait Formatter {
  fn format(&self, source: &str) -> Result<String>;
}

/// Returns the source unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityFormatter;

impl Formatter for IdentityFormatter {
  fn format(&self, source: &str) -> Result<String> {
    Ok(source.to_string())
  }
}

/// Formats through an external process over stdin/stdout, e.g. `deno fmt -`.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
  program: String,
  args: Vec<String>,
  current_dir: Option<PathBuf>,
}

impl CommandFormatter {
  pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
    Self { program: program.into(), args, current_dir: None }
  }

  pub fn from_command_line(command: &str) -> Result<Self> {
    let (program, args) = split_command_line(command).context("invalid formatter command")?;
    Ok(Self::new(program, args))
  }

  pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.current_dir = Some(dir.into());
    self
  }

  pub fn command_line(&self) -> String {
    let mut line = self.program.clone();
    for arg in &self.args {
      line.push(' ');
      line.push_str(arg);
    }
    line
  }
}

impl Formatter for CommandFormatter {
  fn format(&self, source: &str) -> Result<String> {
    let label = self.command_line();
    let mut cmd = Command::new(&self.program);
    cmd.args(&self.args);
    cmd.stdin(Stdio::piped()).stdout(Stdio::piped()).stderr(Stdio::piped());
    if let Some(dir) = &self.current_dir {
      cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().with_context(|| format!("failed to run formatter `{label}`"))?;

    // stdin is fed from its own thread while stdout is drained below.
    let stdin = child.stdin.take();
    let input = source.to_string();
    let writer = std::thread::spawn(move || -> std::io::Result<()> {
      if let Some(mut stdin) = stdin {
        stdin.write_all(input.as_bytes())?;
      }
      Ok(())
    });

    // Join the writer before inspecting the wait result so no thread outlives this call.
    let waited = child.wait_with_output();
    let write_result = writer.join();
    let output = waited.with_context(|| format!("failed to wait for formatter `{label}`"))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      let mut msg = format!("formatter `{label}` exited with status {}", output.status);
      if !stderr.is_empty() {
        msg.push('\n');
        msg.push_str(stderr.trim_end());
      }
      bail!("{msg}");
    }
    match write_result {
      Ok(Ok(())) => {}
      Ok(Err(e)) => {
        return Err(e).with_context(|| format!("failed to write to formatter `{label}`"));
      }
      Err(_) => bail!("formatter input thread panicked"),
    }

    String::from_utf8(output.stdout)
      .with_context(|| format!("formatter `{label}` produced invalid UTF-8"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identity_returns_input() {
    let src = "const a = 1;\n";
    assert_eq!(IdentityFormatter.format(src).unwrap(), src);
  }

  #[test]
  fn command_line_is_split_on_whitespace() {
    let f = CommandFormatter::from_command_line("deno  fmt -").unwrap();
    assert_eq!(f.program, "deno");
    assert_eq!(f.args, vec!["fmt", "-"]);
    assert_eq!(f.command_line(), "deno fmt -");
  }

  #[test]
  fn empty_command_line_is_rejected() {
    assert!(CommandFormatter::from_command_line("   ").is_err());
    assert!(split_command_line("").is_err());
  }

  #[test]
  fn split_command_line_parts() {
    let (program, args) = split_command_line("deno run  -A").unwrap();
    assert_eq!(program, "deno");
    assert_eq!(args, vec!["run", "-A"]);
  }

  #[cfg(unix)]
  #[test]
  fn closed_stdin_is_reported_after_join() {
    // Exits successfully without reading, so the large write hits a closed pipe.
    let f = CommandFormatter::new("sh", vec!["-c".into(), "exec 0<&-; echo done".into()]);
    let src = "x".repeat(1 << 20);
    let err = f.format(&src).unwrap_err().to_string();
    assert!(err.contains("failed to write to formatter"), "{err}");
  }

  #[cfg(unix)]
  #[test]
  fn pipes_through_subprocess() {
    let f = CommandFormatter::new("cat", vec![]);
    let src = "import * as $0 from \"./routes/+page.tsx\";\n".repeat(5000);
    assert_eq!(f.format(&src).unwrap(), src);
  }

  #[cfg(unix)]
  #[test]
  fn uses_subprocess_stdout() {
    let f = CommandFormatter::new("tr", vec!["a-z".into(), "A-Z".into()]);
    assert_eq!(f.format("export default manifest;").unwrap(), "EXPORT DEFAULT MANIFEST;");
  }

  #[cfg(unix)]
  #[test]
  fn non_zero_exit_is_fatal() {
    let f = CommandFormatter::new("sh", vec!["-c".into(), "echo bad input >&2; exit 3".into()]);
    let err = f.format("x").unwrap_err().to_string();
    assert!(err.contains("exited with status"), "{err}");
    assert!(err.contains("bad input"), "{err}");
  }

  #[test]
  fn missing_program_is_fatal() {
    let f = CommandFormatter::new("isle-formatter-that-does-not-exist", vec![]);
    let err = f.format("x").unwrap_err().to_string();
    assert!(err.contains("failed to run formatter"), "{err}");
  }
}
