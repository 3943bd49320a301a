//! External process execution
//!
//! Every command runs with an explicit working directory set on the child.
//! The parent's current directory is never changed.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a command with its output captured.
///
/// A non-zero exit becomes an error carrying the trimmed stderr.
pub fn run_captured(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let cmdline = command_line(program, args);
    tracing::debug!(command = %cmdline, cwd = %cwd.display(), "running captured");

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to run command: {cmdline}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            bail!("Command failed ({}): {}", output.status, cmdline);
        }
        bail!("Command failed ({}): {}\n{}", output.status, cmdline, stderr);
    }

    Ok(())
}

/// Run a command attached to this terminal and wait for it to exit.
pub fn run_inherited(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let cmdline = command_line(program, args);
    tracing::debug!(command = %cmdline, cwd = %cwd.display(), "running attached");

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("Failed to run command: {cmdline}"))?;

    if !status.success() {
        bail!("Command failed ({status}): {cmdline}");
    }

    Ok(())
}

fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_captured_uses_given_directory() -> Result<()> {
        let temp = TempDir::new()?;
        let before = std::env::current_dir()?;

        run_captured("sh", &["-c", "touch marker"], temp.path())?;

        assert!(temp.path().join("marker").exists());
        assert_eq!(std::env::current_dir()?, before);
        Ok(())
    }

    #[test]
    fn test_run_captured_reports_stderr() {
        let temp = TempDir::new().unwrap();
        let err = run_captured("sh", &["-c", "echo boom >&2; exit 3"], temp.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sh -c"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_run_inherited_reports_exit_status() {
        let temp = TempDir::new().unwrap();
        let err = run_inherited("sh", &["-c", "exit 2"], temp.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Command failed"));
        assert!(message.contains("sh -c exit 2"));
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = run_captured("definitely-not-a-real-program-xyz", &[], temp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to run command"));
    }
}
