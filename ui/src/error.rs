use crate::config::setup::SetupError;
use hueshift_core::{SettingsError, ThemeError};
use std::fmt::Display;

/// Application-wide error types for the Hueshift front end.
///
/// Engine errors are flattened into messages here so they can be reported
/// uniformly. None of them leave the process in a bad state: a failed theme
/// operation keeps the last good theme, and the command simply exits with a
/// non-zero status.
///
/// # Examples
///
/// ```no_run
/// use hueshift::error::{AppError, AppResult};
///
/// fn pick(name: &str) -> AppResult<()> {
///     if name.is_empty() {
///         return Err(AppError::Theme("No theme name given".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Theme catalog, loading or selection failures.
    Theme(String),

    /// The settings store could not be read or written.
    Settings(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// File system failures outside the engine.
    Io(String),
}

impl AppError {
    /// Short heading for the error category
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Theme(_) => "Theme Error",
            AppError::Settings(_) => "Settings Error",
            AppError::Config(_) => "Configuration Error",
            AppError::Io(_) => "I/O Error",
        }
    }

    /// What the user can do about it, when there is something to do
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            AppError::Theme(_) => Some("Run `hueshift list` to see the available themes."),
            AppError::Settings(_) => {
                Some("Check that the settings file is valid TOML and writable.")
            }
            AppError::Config(_) => Some("Please check your config.toml and HUESHIFT__* variables."),
            AppError::Io(_) => None,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Settings(msg) => write!(f, "Settings Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(msg) => write!(f, "I/O Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ThemeError> for AppError {
    fn from(err: ThemeError) -> Self {
        AppError::Theme(err.to_string())
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        AppError::Settings(err.to_string())
    }
}

impl From<SetupError> for AppError {
    fn from(err: SetupError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Log an error and build the message shown to the user.
pub fn report_error(error: &AppError, operation: &str) -> String {
    log::error!("[{operation}] {error}");

    let mut message = error.to_string();
    if let Some(suggestion) = error.suggestion() {
        message.push_str(&format!("\n{suggestion}"));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_convert() {
        let error: AppError = ThemeError::IndexOutOfRange { id: 9, count: 3 }.into();
        assert_eq!(error.title(), "Theme Error");
        assert!(error.to_string().contains("9"));

        let error: AppError = SetupError::ConfigDirError("nope".to_string()).into();
        assert!(matches!(error, AppError::Config(_)));
    }

    #[test]
    fn test_report_error_appends_suggestion() {
        let message = report_error(&AppError::Theme("gone".to_string()), "select");
        assert_eq!(
            message,
            "Theme Error: gone\nRun `hueshift list` to see the available themes."
        );

        let message = report_error(&AppError::Io("disk".to_string()), "write");
        assert_eq!(message, "I/O Error: disk");
    }
}
