use super::{
    LoggingConfig, setup,
    validation::{ConfigValidationError, VALID_LOG_LEVELS},
};
use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    themes_dir: Option<String>,
    settings_file: Option<String>,
    builtin_themes: Option<bool>,

    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let level = self.logging.level().to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        match self.themes_dir() {
            Some(dir) if dir.exists() && !dir.is_dir() => {
                errors.push(ConfigValidationError::ThemesDirNotDirectory {
                    path: dir.display().to_string(),
                });
            }
            None if !self.builtin_themes() => {
                errors.push(ConfigValidationError::NoThemeSources);
            }
            _ => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// User themes directory; defaults to `<config dir>/themes`
    pub fn themes_dir(&self) -> Option<PathBuf> {
        match &self.themes_dir {
            Some(dir) => Some(PathBuf::from(dir)),
            None => setup::get_themes_dir().ok(),
        }
    }

    /// Settings file; defaults to `<config dir>/settings.toml`
    pub fn settings_file(&self) -> Result<PathBuf, setup::SetupError> {
        match &self.settings_file {
            Some(file) => Ok(PathBuf::from(file)),
            None => setup::get_settings_file_path(),
        }
    }

    pub fn builtin_themes(&self) -> bool {
        self.builtin_themes.unwrap_or(true)
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
