use std::path::Path;
use thiserror::Error;

/// Core validation trait that all validators implement.
///
/// # Examples
///
/// ```
/// use hueshift_core::validation::Validator;
///
/// struct NonEmpty;
/// impl Validator<str> for NonEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             Err("Input cannot be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Maximum length of a theme display name, in characters.
pub const MAX_THEME_NAME_LEN: usize = 64;

/// File extension every theme description must carry.
pub const THEME_FILE_EXTENSION: &str = "json";

/// Validation errors specific to theme files and names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeValidationError {
    #[error("Invalid theme name '{name}': {reason}")]
    InvalidThemeName { name: String, reason: String },

    #[error("Invalid file extension for '{path}': expected '.{expected}'")]
    InvalidFileExtension { path: String, expected: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidThemeName { name, reason } => {
                format!(
                    "Invalid theme name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Please give the theme a short, printable display name."
                )
            }
            ThemeValidationError::InvalidFileExtension { path, expected } => {
                format!(
                    "Invalid file extension for: '{path}'\n\n\
                    Expected: '{expected}' files\n\n\
                    Please ensure theme files have the correct extension."
                )
            }
        }
    }
}

/// Validator for theme display names
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeNameValidator;

impl Validator<str> for ThemeNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| ThemeValidationError::InvalidThemeName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("Name cannot be empty"));
        }

        if input.chars().count() > MAX_THEME_NAME_LEN {
            return Err(invalid("Name too long (max 64 characters)"));
        }

        if input.chars().any(char::is_control) {
            return Err(invalid("Name contains control characters"));
        }

        // Display names may contain spaces, just not around the edges
        if input.trim() != input {
            return Err(invalid("Name cannot start or end with whitespace"));
        }

        Ok(())
    }
}

/// Validator for theme file paths
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemePathValidator;

impl Validator<Path> for ThemePathValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        let extension = input.extension().and_then(|s| s.to_str());
        if !extension.is_some_and(|ext| ext.eq_ignore_ascii_case(THEME_FILE_EXTENSION)) {
            return Err(ThemeValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: THEME_FILE_EXTENSION.to_string(),
            });
        }

        Ok(())
    }
}
