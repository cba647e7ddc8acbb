use crate::validation::ThemeValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the catalog or loading and selecting themes.
///
/// None of these are fatal. The catalog skips entries that fail, and the
/// manager keeps the last good theme whenever a load or selection fails.
///
/// # Examples
///
/// ```no_run
/// use hueshift_core::{ThemeError, ThemeManager};
///
/// fn apply(manager: &mut ThemeManager, id: usize) {
///     match manager.select(id) {
///         Ok(()) => {}
///         Err(ThemeError::IndexOutOfRange { id, count }) => {
///             eprintln!("Theme {id} does not exist ({count} available)");
///         }
///         Err(e) => eprintln!("Keeping current theme: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A catalog candidate could not be used and was skipped.
    #[error("Invalid theme file '{path}': {reason}")]
    CatalogEntryInvalid { path: String, reason: String },

    /// The theme file could not be read.
    #[error("Failed to read theme file '{path}': {source}")]
    ThemeFileMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The theme file was read but is not a valid theme description.
    #[error("Failed to parse theme file '{path}': {reason}")]
    ThemeFileMalformed { path: String, reason: String },

    #[error("Theme id {id} is out of range ({count} themes available)")]
    IndexOutOfRange { id: usize, count: usize },

    #[error("No theme named '{name}'")]
    UnknownTheme { name: String },

    /// A theme source could not be enumerated.
    #[error("Failed to list theme source '{}': {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ThemeValidationError),
}

/// Errors raised by settings stores.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type ThemeResult<T> = Result<T, ThemeError>;
