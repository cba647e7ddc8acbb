//! Places theme descriptions are enumerated and read from.
//!
//! A [`ThemeSource`] only knows how to list candidate paths and read them
//! back as text; parsing belongs to the catalog and the loader. Two sources
//! ship with the crate:
//!
//! - [`EmbeddedSource`]: theme files compiled into the binary
//! - [`DirectorySource`]: `*.json` files in a filesystem directory

use crate::error::{ThemeError, ThemeResult};
use crate::validation::{ThemePathValidator, Validator};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A listable, readable collection of theme files.
pub trait ThemeSource {
    /// Short description used in log messages.
    fn label(&self) -> String;

    /// Paths of candidate theme files, sorted.
    fn entries(&self) -> ThemeResult<Vec<String>>;

    /// Raw contents of a path previously returned by [`entries`](Self::entries).
    fn read(&self, path: &str) -> ThemeResult<String>;
}

const BUNDLED_THEMES: &[(&str, &str)] = &[
    (
        "builtin/default.json",
        include_str!("../themes/default.json"),
    ),
    ("builtin/light.json", include_str!("../themes/light.json")),
    (
        "builtin/midnight.json",
        include_str!("../themes/midnight.json"),
    ),
];

/// Theme files held in memory, by default the ones bundled with the crate.
#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    files: Vec<(String, String)>,
}

impl EmbeddedSource {
    /// The themes shipped inside the binary.
    pub fn bundled() -> Self {
        Self::new(
            BUNDLED_THEMES
                .iter()
                .map(|(path, contents)| (path.to_string(), contents.to_string())),
        )
    }

    /// An in-memory source over `(path, contents)` pairs.
    pub fn new(files: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut files: Vec<(String, String)> = files.into_iter().collect();
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Self { files }
    }
}

impl ThemeSource for EmbeddedSource {
    fn label(&self) -> String {
        "embedded".to_string()
    }

    fn entries(&self) -> ThemeResult<Vec<String>> {
        Ok(self.files.iter().map(|(path, _)| path.clone()).collect())
    }

    fn read(&self, path: &str) -> ThemeResult<String> {
        self.files
            .iter()
            .find(|(candidate, _)| candidate == path)
            .map(|(_, contents)| contents.clone())
            .ok_or_else(|| ThemeError::ThemeFileMissing {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such embedded theme"),
            })
    }
}

/// Theme files stored as `*.json` in a directory (not recursive).
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    path_validator: ThemePathValidator,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            path_validator: ThemePathValidator,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ThemeSource for DirectorySource {
    fn label(&self) -> String {
        self.dir.display().to_string()
    }

    fn entries(&self) -> ThemeResult<Vec<String>> {
        if !self.dir.is_dir() {
            log::debug!(
                "Themes directory '{}' does not exist, nothing to list",
                self.dir.display()
            );
            return Ok(vec![]);
        }

        let source_error = |source| ThemeError::Source {
            path: self.dir.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(source_error)? {
            let path = entry.map_err(source_error)?.path();
            if !path.is_file() {
                continue;
            }

            if let Err(e) = self.path_validator.validate(&path) {
                log::debug!("Skipping non-theme file: {e}");
                continue;
            }

            paths.push(path.to_string_lossy().into_owned());
        }

        paths.sort();
        Ok(paths)
    }

    fn read(&self, path: &str) -> ThemeResult<String> {
        fs::read_to_string(path).map_err(|source| ThemeError::ThemeFileMissing {
            path: path.to_string(),
            source,
        })
    }
}
