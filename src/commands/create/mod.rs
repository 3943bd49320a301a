//! Create a new Anta app
//!
//! Public interface in this file, the step-by-step flow in `internal`.

mod internal;

use anyhow::Result;

use create_anta_app::git::DEFAULT_REPO_URL;
use create_anta_app::package_manager::PackageManager;
use create_anta_app::prompt::PresetDetails;

/// Options for one scaffolding run
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Directory to create; prompted for when absent
    pub project_name: Option<String>,
    /// Starter repository to clone
    pub repo_url: String,
    pub skip_install: bool,
    pub skip_dev: bool,
    /// Package manager override; detected from the starter's lockfile when absent
    pub package_manager: Option<PackageManager>,
    /// Detail values that skip their prompt
    pub preset: PresetDetails,
    /// Never prompt; fall back to defaults
    pub use_defaults: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            project_name: None,
            repo_url: DEFAULT_REPO_URL.to_string(),
            skip_install: false,
            skip_dev: false,
            package_manager: None,
            preset: PresetDetails::default(),
            use_defaults: false,
        }
    }
}

/// Execute the create command
///
/// # Process
///
/// 1. Resolve the project name
/// 2. Clone the starter into `<project>/`
/// 3. Collect branding details
/// 4. Create or patch `<project>/config.js`
/// 5. Install dependencies (unless skipped)
/// 6. Start the dev server (unless skipped)
///
/// # Errors
///
/// Returns an error if the project name is invalid, the clone fails, or the
/// configuration cannot be written. Install and dev-server failures only
/// print a warning with the manual command.
pub fn execute(options: CreateOptions) -> Result<()> {
    internal::execute_create(options)
}
