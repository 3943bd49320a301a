//! Internal implementation for create command
//!
//! Flow: name → clone → details → config.js → install → dev server

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use create_anta_app::details::ProjectDetails;
use create_anta_app::git;
use create_anta_app::package_manager::PackageManager;
use create_anta_app::prompt;
use create_anta_app::site_config::{self, PatchOutcome, CONFIG_FILE_NAME};

use super::CreateOptions;

const DEV_SERVER_URL: &str = "http://localhost:3000";

/// Main execution logic for create command
pub fn execute_create(options: CreateOptions) -> Result<()> {
    println!("{}", "\n🚀 Welcome to create-anta-app!\n".blue().bold());

    let interactive = !options.use_defaults && prompt::is_interactive();
    if !options.use_defaults && !interactive {
        println!(
            "{}",
            "⚠️  Not running in a terminal, using defaults for anything not given as a flag"
                .yellow()
        );
    }

    let project_name = prompt::project_name(options.project_name.as_deref(), interactive)?;
    let project_dir = PathBuf::from(&project_name);

    clone_starter(&options.repo_url, &project_dir)?;

    let details = prompt::project_details(options.preset, interactive)?;
    tracing::debug!(%details, "collected project details");

    write_site_config(&project_dir, &details)?;

    let package_manager = options
        .package_manager
        .or_else(|| PackageManager::detect(&project_dir))
        .unwrap_or_default();
    tracing::debug!(%package_manager, "selected package manager");

    if !options.skip_install {
        install_dependencies(package_manager, &project_dir);
    }

    print_summary(&project_dir);

    if !options.skip_dev {
        start_dev_server(package_manager, &project_dir);
    }

    Ok(())
}

fn clone_starter(repo_url: &str, project_dir: &Path) -> Result<()> {
    let pb = spinner("Cloning repository...");

    match git::clone_repository(repo_url, project_dir) {
        Ok(()) => {
            succeed(pb, "Repository cloned successfully");
            Ok(())
        }
        Err(e) => {
            fail(pb, "Failed to clone repository");
            Err(e)
        }
    }
}

fn write_site_config(project_dir: &Path, details: &ProjectDetails) -> Result<()> {
    let pb = spinner("Updating configuration...");
    let config_path = project_dir.join(CONFIG_FILE_NAME);

    match site_config::patch_config(&config_path, details) {
        Ok(PatchOutcome::Created) => {
            succeed(pb, "Configuration file created");
            Ok(())
        }
        Ok(PatchOutcome::Updated { missing, .. }) => {
            succeed(pb, "Configuration updated successfully");
            if !missing.is_empty() {
                let keys: Vec<&str> = missing.iter().map(|f| f.key()).collect();
                tracing::debug!(fields = ?keys, "fields not present in existing config");
            }
            Ok(())
        }
        Err(e) => {
            fail(pb, "Failed to update configuration");
            Err(e).context("Failed to update config file")
        }
    }
}

/// Non-fatal: prints the manual command on failure.
fn install_dependencies(package_manager: PackageManager, project_dir: &Path) {
    let pb = spinner(&format!(
        "Installing dependencies with {package_manager}..."
    ));

    match package_manager.install(project_dir) {
        Ok(()) => succeed(pb, "Dependencies installed successfully"),
        Err(e) => {
            fail(pb, "Failed to install dependencies");
            tracing::warn!("{e:#}");
            println!(
                "{}",
                format!(
                    "You can install dependencies manually by running: cd {} && {}",
                    project_dir.display(),
                    package_manager.install_hint()
                )
                .yellow()
            );
        }
    }
}

/// Non-fatal: blocks while the server runs, prints the manual command on failure.
fn start_dev_server(package_manager: PackageManager, project_dir: &Path) {
    println!("{}", "\n🌐 Starting development server...".blue());
    println!("{}", "Press Ctrl+C to stop the server\n".dimmed());

    if let Err(e) = package_manager.dev(project_dir) {
        tracing::warn!("{e:#}");
        println!(
            "{}",
            "\n⚠️  Could not start development server automatically.".yellow()
        );
        println!(
            "{}",
            format!(
                "You can start it manually by running: cd {} && {}",
                project_dir.display(),
                package_manager.dev_hint()
            )
            .dimmed()
        );
    }
}

fn print_summary(project_dir: &Path) {
    let absolute = fs::canonicalize(project_dir).unwrap_or_else(|_| project_dir.to_path_buf());

    println!("{}", "\n✅ Anta app created successfully!\n".green().bold());
    println!(
        "{}",
        format!("📁 Project directory: {}", absolute.display()).yellow()
    );
    println!(
        "{}",
        format!("🌐 Development server: {DEV_SERVER_URL}").yellow()
    );
    println!("{}", "\nHappy coding! 🎉\n".dimmed());
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn succeed(pb: ProgressBar, message: &str) {
    pb.finish_and_clear();
    println!("{} {}", "✓".green().bold(), message);
}

fn fail(pb: ProgressBar, message: &str) {
    pb.finish_and_clear();
    println!("{} {}", "✗".red().bold(), message);
}
