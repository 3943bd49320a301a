//! Dependency installation and dev-server launch
//!
//! Both steps shell out to the project's JavaScript package manager with the
//! project directory as the child's working directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Pick a package manager from the lockfile the starter ships with.
    pub fn detect(project_dir: &Path) -> Option<Self> {
        const LOCKFILES: [(&str, PackageManager); 5] = [
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("yarn.lock", PackageManager::Yarn),
            ("bun.lockb", PackageManager::Bun),
            ("bun.lock", PackageManager::Bun),
            ("package-lock.json", PackageManager::Npm),
        ];

        LOCKFILES
            .iter()
            .find(|(file, _)| project_dir.join(file).is_file())
            .map(|(_, pm)| *pm)
    }

    /// Command a user can paste to install dependencies by hand.
    pub fn install_hint(self) -> String {
        format!("{} install", self.program())
    }

    /// Command a user can paste to start the dev server by hand.
    pub fn dev_hint(self) -> String {
        format!("{} run dev", self.program())
    }

    /// Install dependencies, output captured.
    pub fn install(self, project_dir: &Path) -> Result<()> {
        self.ensure_available()?;
        process::run_captured(self.program(), &["install"], project_dir)
    }

    /// Start the dev server attached to this terminal. Blocks until it exits.
    pub fn dev(self, project_dir: &Path) -> Result<()> {
        self.ensure_available()?;
        process::run_inherited(self.program(), &["run", "dev"], project_dir)
    }

    fn ensure_available(self) -> Result<()> {
        which::which(self.program())
            .with_context(|| format!("{} is not installed or not on PATH", self.program()))?;
        Ok(())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
