use super::app::AppConfig;

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid logging.level: '{configured}'")]
    LogLevel { configured: String },
    #[error("themes_dir is not a directory: '{path}'")]
    ThemesDirNotDirectory { path: String },
    #[error("No theme source enabled (builtin_themes = false and no themes_dir)")]
    NoThemeSources,
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {configured}\n\
                    Valid values: {}\n\n\
                    Please update level in the [logging] section of config.toml.",
                    VALID_LOG_LEVELS.join(", ")
                )
            }
            ConfigValidationError::ThemesDirNotDirectory { path } => {
                format!(
                    "Themes directory is not a directory!\n\n\
                    Configured path: {path}\n\n\
                    Please point themes_dir in config.toml at a directory of *.json theme files."
                )
            }
            ConfigValidationError::NoThemeSources => "No themes can be loaded!\n\n\
                builtin_themes is disabled and no themes directory is available.\n\n\
                Please enable builtin_themes or set themes_dir in config.toml."
                .to_string(),
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl ConfigLoadResult {
    /// The loaded configuration, or a message describing why loading failed.
    pub fn into_config(self) -> Result<AppConfig, String> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => Err(msg),
        }
    }
}
