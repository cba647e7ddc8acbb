use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "hueshift";

/// Default contents of a freshly initialized `config.toml`.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Hueshift configuration
#
# Every key is optional. Environment variables override these values,
# e.g. HUESHIFT__LOGGING__LEVEL=debug.

# Directory with user theme files (*.json). Themes here override bundled
# themes with the same display name.
# themes_dir = "/path/to/themes"

# File the selected theme id is persisted to.
# settings_file = "/path/to/settings.toml"

# Include the themes bundled with the application.
builtin_themes = true

[logging]
level = "info"
# file = "hueshift.log"
"#;

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/hueshift on Unix-like systems, fall back to platform defaults
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR_NAME);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push(APP_DIR_NAME);
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Get the user themes directory path
pub fn get_themes_dir() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join("themes"))
}

/// Get the path of the file holding persisted settings
pub fn get_settings_file_path() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join("settings.toml"))
}

/// Create `config_dir`, its `themes/` directory and a commented `config.toml`.
///
/// Existing files are left alone.
pub fn initialize_config_dir(config_dir: &Path) -> Result<PathBuf, SetupError> {
    create_dir_if_not_exists(config_dir)?;
    create_dir_if_not_exists(&config_dir.join("themes"))?;

    let config_file = config_dir.join("config.toml");
    if !config_file.exists() {
        fs::write(&config_file, DEFAULT_CONFIG_TEMPLATE).map_err(|source| {
            SetupError::WriteFileError {
                path: config_file.clone(),
                source,
            }
        })?;
        log::info!("Created config file: {}", config_file.display());
    }

    log::info!("Config directory initialized: {}", config_dir.display());
    Ok(config_dir.to_path_buf())
}

/// Create directory if it doesn't exist
fn create_dir_if_not_exists(path: &Path) -> Result<(), SetupError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| SetupError::CreateDirError {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Find config file using discovery priority
pub fn find_config_file() -> Option<PathBuf> {
    // Priority order:
    // 1. ./config.toml (current directory)
    // 2. Standard OS config directory

    let current_dir_config = PathBuf::from("config.toml");
    if current_dir_config.exists() {
        return Some(current_dir_config);
    }

    match get_config_file_path() {
        Ok(standard_config) if standard_config.exists() => Some(standard_config),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir_determination() {
        let config_dir = assert_ok!(get_config_dir());
        assert!(config_dir.to_string_lossy().contains(APP_DIR_NAME));
        assert!(assert_ok!(get_themes_dir()).starts_with(&config_dir));
        assert!(assert_ok!(get_settings_file_path()).starts_with(&config_dir));
    }

    #[test]
    fn test_initialize_config_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(APP_DIR_NAME);

        assert_ok!(initialize_config_dir(&config_dir));
        assert!(config_dir.join("themes").is_dir());

        let config_file = config_dir.join("config.toml");
        fs::write(&config_file, "builtin_themes = false\n").unwrap();
        assert_ok!(initialize_config_dir(&config_dir));
        assert_eq!(
            fs::read_to_string(&config_file).unwrap(),
            "builtin_themes = false\n"
        );
    }

    #[test]
    fn test_default_template_is_valid_toml() {
        assert_ok!(toml::from_str::<toml::Table>(DEFAULT_CONFIG_TEMPLATE));
    }
}
