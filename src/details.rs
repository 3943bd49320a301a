//! Branding details collected for a new project
//!
//! Holds the four values written into the project's `config.js` and the
//! validation rules shared by the prompts and the command-line flags.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Default directory name offered by the project-name prompt.
pub const DEFAULT_PROJECT_NAME: &str = "my-anta-app";

pub const DEFAULT_TITLE: &str = "My Anta App";
pub const DEFAULT_TAGLINE: &str = "Built with Anta";
pub const DEFAULT_PRIMARY_COLOR: &str = "#3B82F6";
pub const DEFAULT_SECONDARY_COLOR: &str = "#1E40AF";

/// `#RGB` or `#RRGGBB`, either case.
fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#(?:[A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("Invalid hex color regex")
    })
}

fn project_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid project name regex"))
}

/// A rejected input value. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

/// Validate a project directory name, returning it trimmed.
pub fn validate_project_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError("Project name cannot be empty"));
    }
    if !project_name_regex().is_match(trimmed) {
        return Err(ValidationError(
            "Project name can only contain letters, numbers, hyphens, and underscores",
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_title(input: &str) -> Result<String, ValidationError> {
    non_empty(input, "Project title cannot be empty")
}

pub fn validate_tagline(input: &str) -> Result<String, ValidationError> {
    non_empty(input, "Tagline cannot be empty")
}

/// Validate a hex color code, returning it trimmed with its case preserved.
pub fn validate_hex_color(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if hex_color_regex().is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError(
            "Please enter a valid hex color code (e.g., #3B82F6)",
        ))
    }
}

fn non_empty(input: &str, message: &'static str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError(message))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Validated branding values for a project.
///
/// Fields are private so every instance has passed validation: non-empty
/// title and tagline, hex colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    project_title: String,
    tagline: String,
    primary_color: String,
    secondary_color: String,
}

impl ProjectDetails {
    pub fn new(
        project_title: &str,
        tagline: &str,
        primary_color: &str,
        secondary_color: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            project_title: validate_title(project_title)?,
            tagline: validate_tagline(tagline)?,
            primary_color: validate_hex_color(primary_color)?,
            secondary_color: validate_hex_color(secondary_color)?,
        })
    }

    pub fn project_title(&self) -> &str {
        &self.project_title
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    pub fn primary_color(&self) -> &str {
        &self.primary_color
    }

    pub fn secondary_color(&self) -> &str {
        &self.secondary_color
    }
}

impl Default for ProjectDetails {
    fn default() -> Self {
        Self {
            project_title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
        }
    }
}

impl fmt::Display for ProjectDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} / {})",
            self.project_title, self.tagline, self.primary_color, self.secondary_color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_accepts_allowed_characters() {
        assert_eq!(validate_project_name("my-app_2").unwrap(), "my-app_2");
        assert_eq!(validate_project_name("  padded  ").unwrap(), "padded");
    }

    #[test]
    fn test_project_name_rejects_empty_and_invalid() {
        assert_eq!(
            validate_project_name("   ").unwrap_err().0,
            "Project name cannot be empty"
        );
        assert!(validate_project_name("my app").is_err());
        assert!(validate_project_name("../escape").is_err());
        assert!(validate_project_name("name!").is_err());
    }

    #[test]
    fn test_hex_color_forms() {
        assert_eq!(validate_hex_color("#fff").unwrap(), "#fff");
        assert_eq!(validate_hex_color(" #3B82F6 ").unwrap(), "#3B82F6");
        assert!(validate_hex_color("3B82F6").is_err());
        assert!(validate_hex_color("#3B82F").is_err());
        assert!(validate_hex_color("#GGGGGG").is_err());
        assert!(validate_hex_color("#3B82F6FF").is_err());
    }

    #[test]
    fn test_details_are_trimmed() {
        let details = ProjectDetails::new("  Title ", " Tag ", "#abc", "#ABCDEF").unwrap();
        assert_eq!(details.project_title(), "Title");
        assert_eq!(details.tagline(), "Tag");
    }

    #[test]
    fn test_details_reject_blank_title_and_tagline() {
        assert_eq!(
            ProjectDetails::new(" ", "Tag", "#abc", "#abc").unwrap_err(),
            ValidationError("Project title cannot be empty")
        );
        assert_eq!(
            ProjectDetails::new("Title", "\t", "#abc", "#abc").unwrap_err(),
            ValidationError("Tagline cannot be empty")
        );
    }

    #[test]
    fn test_default_details_are_valid() {
        let defaults = ProjectDetails::default();
        let rebuilt = ProjectDetails::new(
            defaults.project_title(),
            defaults.tagline(),
            defaults.primary_color(),
            defaults.secondary_color(),
        )
        .unwrap();
        assert_eq!(defaults, rebuilt);
    }
}
