use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod setup;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "HUESHIFT";

/// Load configuration from a config file and environment variables.
///
/// `explicit` must exist when given. Otherwise the first of `./config.toml`
/// and `<config dir>/config.toml` is used, and having neither is fine:
/// every setting has a default. `HUESHIFT__*` environment variables
/// (after reading `.env`) override file values.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true);

    let mut builder = Config::builder();
    match explicit.map(Path::to_path_buf).or_else(setup::find_config_file) {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(explicit.is_some()));
        }
        None => log::debug!("No config file found, using defaults"),
    }

    let config = match builder
        .add_source(env_source) // environment entries still override file values when present
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "builtin_themes = false\nthemes_dir = \"/srv/themes\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = assert_ok!(load_config(Some(&path)).into_config());
        assert!(!config.builtin_themes());
        assert_eq!(config.logging().level(), "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, ConfigLoadResult::LoadError(_)));
    }

    #[test]
    fn test_validation_failures_are_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();

        let message = assert_err!(load_config(Some(&path)).into_config());
        assert!(message.contains("chatty"));
    }
}
