use std::collections::HashSet;
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::language::{
    Language,
    UnknownLanguageError,
};
use crate::store::DEFAULT_INDENT;

/// Widest indentation accepted for written files.
const MAX_INDENT_WIDTH: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languages[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to read {}", super::CONFIG_FILE_NAME)]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse {}", super::CONFIG_FILE_NAME)]
    ParseError(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguageError),
}

/// One numbered line per error, indented under the summary line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeSettings {
    /// Directory holding `<code>.json`, relative to the project root unless absolute.
    pub messages_dir: PathBuf,

    /// Spaces per indentation level in written files.
    pub indent_width: usize,

    /// Languages to update, in order.
    ///
    /// - `None`: every bundled language (default)
    /// - `Some([...])`: only the listed codes
    pub languages: Option<Vec<String>>,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            messages_dir: PathBuf::from("src/i18n/messages"),
            indent_width: DEFAULT_INDENT,
            languages: None,
        }
    }
}

impl MergeSettings {
    /// # Errors
    /// - Empty messages directory
    /// - Indentation out of range
    /// - Empty, unknown or repeated language codes
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.messages_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "messagesDir",
                "The directory cannot be empty. Example: \"src/i18n/messages\"",
            ));
        }

        if !(1..=MAX_INDENT_WIDTH).contains(&self.indent_width) {
            errors.push(ValidationError::new(
                "indentWidth",
                format!(
                    "Indentation must be between 1 and {MAX_INDENT_WIDTH} spaces, got {}",
                    self.indent_width
                ),
            ));
        }

        if let Some(languages) = &self.languages {
            if languages.is_empty() {
                errors.push(ValidationError::new(
                    "languages",
                    "At least one language is required, or remove this field to update all of them",
                ));
            }

            let mut seen = HashSet::new();
            for (index, code) in languages.iter().enumerate() {
                if let Err(e) = code.parse::<Language>() {
                    errors.push(ValidationError::new(
                        format!("languages[{index}]"),
                        format!("{e}. Supported: {}", supported_codes()),
                    ));
                } else if !seen.insert(code.as_str()) {
                    errors.push(ValidationError::new(
                        format!("languages[{index}]"),
                        format!("Language '{code}' is listed more than once"),
                    ));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Languages to process, in order.
    pub fn resolved_languages(&self) -> Result<Vec<Language>, ConfigError> {
        let Some(codes) = &self.languages else {
            return Ok(Language::ALL.to_vec());
        };
        Ok(codes.iter().map(|code| code.parse()).collect::<Result<Vec<_>, _>>()?)
    }

    /// Messages directory resolved against `root`.
    #[must_use]
    pub fn messages_path(&self, root: &Path) -> PathBuf {
        root.join(&self.messages_dir)
    }
}

/// Comma-separated list of every supported code.
fn supported_codes() -> String {
    Language::ALL.iter().map(|l| l.code()).collect::<Vec<_>>().join(", ")
}
