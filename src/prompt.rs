//! Interactive prompts
//!
//! Values given on the command line skip their prompt but are validated with
//! the same rules. When prompting is disabled (or stdin is not a terminal)
//! defaults fill whatever is left.

use anyhow::{anyhow, Result};
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::details::{
    self, ProjectDetails, ValidationError, DEFAULT_PRIMARY_COLOR, DEFAULT_PROJECT_NAME,
    DEFAULT_SECONDARY_COLOR, DEFAULT_TAGLINE, DEFAULT_TITLE,
};

/// Detail values supplied up front, e.g. from flags.
#[derive(Debug, Clone, Default)]
pub struct PresetDetails {
    pub project_title: Option<String>,
    pub tagline: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

/// Whether prompts may be shown.
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout)
}

/// Resolve the project directory name.
pub fn project_name(provided: Option<&str>, interactive: bool) -> Result<String> {
    if let Some(name) = provided {
        return details::validate_project_name(name)
            .map_err(|e| anyhow!("Invalid project name '{name}': {e}"));
    }

    if !interactive {
        return Ok(DEFAULT_PROJECT_NAME.to_string());
    }

    ask(
        "What is your project name?",
        DEFAULT_PROJECT_NAME,
        details::validate_project_name,
    )
}

/// Resolve the branding details.
pub fn project_details(preset: PresetDetails, interactive: bool) -> Result<ProjectDetails> {
    if interactive {
        println!("\n{}\n", "📝 Let's customize your project:".blue());
    }

    let project_title = resolve(
        preset.project_title,
        "--title",
        "What is your project title?",
        DEFAULT_TITLE,
        details::validate_title,
        interactive,
    )?;
    let tagline = resolve(
        preset.tagline,
        "--tagline",
        "What is your project tagline?",
        DEFAULT_TAGLINE,
        details::validate_tagline,
        interactive,
    )?;
    let primary_color = resolve(
        preset.primary_color,
        "--primary-color",
        "What is your primary brand color? (hex code)",
        DEFAULT_PRIMARY_COLOR,
        details::validate_hex_color,
        interactive,
    )?;
    let secondary_color = resolve(
        preset.secondary_color,
        "--secondary-color",
        "What is your secondary brand color? (hex code)",
        DEFAULT_SECONDARY_COLOR,
        details::validate_hex_color,
        interactive,
    )?;

    ProjectDetails::new(&project_title, &tagline, &primary_color, &secondary_color)
        .map_err(anyhow::Error::from)
}

fn resolve(
    preset: Option<String>,
    flag: &str,
    prompt: &str,
    default: &str,
    validate: fn(&str) -> Result<String, ValidationError>,
    interactive: bool,
) -> Result<String> {
    match preset {
        Some(value) => validate(&value).map_err(|e| anyhow!("Invalid {flag} '{value}': {e}")),
        None if interactive => ask(prompt, default, validate),
        None => Ok(default.to_string()),
    }
}

/// Prompt until the answer passes `validate`; returns the validated value.
fn ask(
    prompt: &str,
    default: &str,
    validate: fn(&str) -> Result<String, ValidationError>,
) -> Result<String> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(move |input: &String| validate(input).map(|_| ()))
        .interact_text()?;

    Ok(validate(&answer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_name_is_validated() {
        assert_eq!(project_name(Some(" site "), false).unwrap(), "site");
        let err = project_name(Some("bad name"), false).unwrap_err();
        assert!(err.to_string().contains("letters, numbers, hyphens, and underscores"));
    }

    #[test]
    fn test_non_interactive_name_uses_default() {
        assert_eq!(project_name(None, false).unwrap(), DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn test_non_interactive_details_mix_presets_and_defaults() {
        let preset = PresetDetails {
            project_title: Some("Acme".to_string()),
            secondary_color: Some("#000".to_string()),
            ..Default::default()
        };
        let details = project_details(preset, false).unwrap();
        assert_eq!(details.project_title(), "Acme");
        assert_eq!(details.tagline(), DEFAULT_TAGLINE);
        assert_eq!(details.primary_color(), DEFAULT_PRIMARY_COLOR);
        assert_eq!(details.secondary_color(), "#000");
    }

    #[test]
    fn test_invalid_preset_names_the_flag() {
        let preset = PresetDetails {
            primary_color: Some("blue".to_string()),
            ..Default::default()
        };
        let err = project_details(preset, false).unwrap_err();
        assert!(err.to_string().contains("--primary-color"));
    }
}
