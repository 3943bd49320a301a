//! Site configuration patcher
//!
//! Writes the branding values into a project's `config.js`. When the file is
//! missing a complete configuration is rendered from a fixed template. When it
//! exists, only the quoted values of four known assignments are replaced and
//! every other byte is kept.
//!
//! This is a best-effort text patch, not a JavaScript parser. The text is
//! scanned once, left to right; quoted literals are skipped whole, so a key
//! inside a string value is never taken for an assignment. The first
//! `key: '...'` (or `key: "..."`) match wins, even inside a comment. Fields
//! whose assignment cannot be found are reported in [`PatchOutcome`] and left
//! alone.
//!
//! # Example
//!
//! ```no_run
//! use create_anta_app::details::ProjectDetails;
//! use create_anta_app::site_config::patch_config;
//! use std::path::Path;
//!
//! let details = ProjectDetails::new("My Anta App", "Built with Anta", "#3B82F6", "#1E40AF")?;
//! patch_config(Path::new("my-anta-app/config.js"), &details)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use regex::Regex;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::details::ProjectDetails;

/// File name of the site configuration inside a project.
pub const CONFIG_FILE_NAME: &str = "config.js";

/// Keywords written into `seo.keywords` of a fresh configuration.
pub const DEFAULT_KEYWORDS: [&str; 3] = ["nextjs", "react", "tailwindcss"];

/// Quoted string literal, single or double, with backslash escapes.
const QUOTED_LITERAL: &str = r#"'(?:[^'\\\r\n]|\\.)*'|"(?:[^"\\\r\n]|\\.)*""#;

/// A configuration key the patcher knows how to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SiteName,
    SiteDescription,
    PrimaryColor,
    SecondaryColor,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::SiteName,
        Field::SiteDescription,
        Field::PrimaryColor,
        Field::SecondaryColor,
    ];

    /// Key as it appears in `config.js`.
    pub fn key(self) -> &'static str {
        match self {
            Field::SiteName => "siteName",
            Field::SiteDescription => "siteDescription",
            Field::PrimaryColor => "primaryColor",
            Field::SecondaryColor => "secondaryColor",
        }
    }

    /// The value from `details` this field receives.
    pub fn value(self, details: &ProjectDetails) -> &str {
        match self {
            Field::SiteName => details.project_title(),
            Field::SiteDescription => details.tagline(),
            Field::PrimaryColor => details.primary_color(),
            Field::SecondaryColor => details.secondary_color(),
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Either a known `key: <literal>` assignment or any other quoted literal.
///
/// Consuming stray literals keeps a key that appears inside a string value
/// from being read as an assignment.
fn assignment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let keys = Field::ALL.map(Field::key).join("|");
        Regex::new(&format!(
            r"\b(?P<key>{keys}):\s*(?P<value>{QUOTED_LITERAL})|{QUOTED_LITERAL}"
        ))
        .expect("Invalid field assignment regex")
    })
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What [`patch_config`] did to the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// No file existed; a fresh one was rendered from the template.
    Created,
    /// The existing file was rewritten in place.
    Updated {
        applied: Vec<Field>,
        missing: Vec<Field>,
    },
}

/// Result of patching configuration text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedText {
    pub content: String,
    pub applied: Vec<Field>,
    pub missing: Vec<Field>,
}

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Failed to check whether {} exists", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Create or update the site configuration at `path`.
///
/// # Errors
///
/// Returns an error if the existence check, the read of an existing file, or
/// the final write fails. A field that cannot be located is not an error.
pub fn patch_config(path: &Path, details: &ProjectDetails) -> Result<PatchOutcome, PatchError> {
    let exists = path.try_exists().map_err(|source| PatchError::Inspect {
        path: path.to_path_buf(),
        source,
    })?;

    if !exists {
        write(path, &render_template(details))?;
        tracing::debug!(path = %path.display(), "rendered fresh site configuration");
        return Ok(PatchOutcome::Created);
    }

    let original = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let patched = apply_patch(&original, details);

    for field in &patched.missing {
        tracing::debug!(path = %path.display(), field = field.key(), "no assignment found, left unchanged");
    }

    write(path, &patched.content)?;
    Ok(PatchOutcome::Updated {
        applied: patched.applied,
        missing: patched.missing,
    })
}

fn write(path: &Path, content: &str) -> Result<(), PatchError> {
    fs::write(path, content).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the quoted value of each known field's first assignment.
///
/// The replacement keeps the quote character of the literal it replaces.
pub fn apply_patch(text: &str, details: &ProjectDetails) -> PatchedText {
    let mut content = String::with_capacity(text.len());
    let mut applied = Vec::new();
    let mut last = 0;

    for caps in assignment_regex().captures_iter(text) {
        let (Some(key), Some(value)) = (caps.name("key"), caps.name("value")) else {
            continue;
        };
        let Some(field) = Field::from_key(key.as_str()) else {
            continue;
        };
        if applied.contains(&field) {
            continue;
        }

        let quote = if value.as_str().starts_with('"') { '"' } else { '\'' };
        content.push_str(&text[last..value.start()]);
        content.push_str(&quote_literal(field.value(details), quote));
        last = value.end();
        applied.push(field);
    }
    content.push_str(&text[last..]);

    applied.sort_by_key(|field| *field as usize);
    let missing = Field::ALL
        .into_iter()
        .filter(|field| !applied.contains(field))
        .collect();

    PatchedText {
        content,
        applied,
        missing,
    }
}

/// Render a complete configuration for a project that has none.
pub fn render_template(details: &ProjectDetails) -> String {
    let title = quote_literal(details.project_title(), '\'');
    let tagline = quote_literal(details.tagline(), '\'');
    let keywords = DEFAULT_KEYWORDS
        .iter()
        .map(|k| quote_literal(k, '\''))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"module.exports = {{
  // Site Information
  siteName: {title},
  siteDescription: {tagline},
  siteUrl: 'https://example.com',

  // Brand Colors
  primaryColor: {primary},
  secondaryColor: {secondary},

  // Social Media
  social: {{
    twitter: '@example',
    github: 'https://github.com/example',
    linkedin: 'https://linkedin.com/in/example'
  }},

  // SEO
  seo: {{
    title: {title},
    description: {tagline},
    keywords: [{keywords}]
  }}
}};
"#,
        primary = quote_literal(details.primary_color(), '\''),
        secondary = quote_literal(details.secondary_color(), '\''),
    )
}

/// Wrap `value` in `quote`, escaping what would end or break the literal.
fn quote_literal(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
