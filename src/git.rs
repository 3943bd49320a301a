//! Starter repository cloning

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Default starter repository.
pub const DEFAULT_REPO_URL: &str = "https://github.com/yourusername/your-nextjs-starter.git";

/// Expand `owner/repo` short form to a GitHub URL; anything else passes through.
pub fn normalize_repo_url(url: &str) -> String {
    let url = url.trim();
    let is_short_form = !url.contains("://")
        && !url.contains('@')
        && !url.starts_with('/')
        && !url.starts_with('.')
        && url.split('/').count() == 2;

    if is_short_form {
        format!("https://github.com/{url}")
    } else {
        url.to_string()
    }
}

/// Clone `url` into `target`, which must not exist yet.
pub fn clone_repository(url: &str, target: &Path) -> Result<()> {
    if target.exists() {
        bail!("Target directory already exists: {}", target.display());
    }

    which::which("git").context("git is not installed or not on PATH")?;

    let clone_url = normalize_repo_url(url);
    tracing::debug!(url = %clone_url, target = %target.display(), "cloning repository");

    // `--` keeps a directory name such as `--bare` from being read as an option
    let output = Command::new("git")
        .args(["clone", "--", &clone_url, &target.to_string_lossy()])
        .output()
        .context("Failed to execute git clone")?;

    if !output.status.success() {
        bail!(
            "Failed to clone repository: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(())
}
