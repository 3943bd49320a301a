pub mod details;
pub mod git;
pub mod logging;
pub mod package_manager;
pub mod process;
pub mod prompt;
pub mod settings;
pub mod site_config;

// Re-export commonly used types
pub use details::ProjectDetails;
pub use site_config::{patch_config, PatchOutcome};
