use crate::error::{ThemeError, ThemeResult};
use crate::palette::Palette;
use crate::source::ThemeSource;
use crate::types::{CatalogEntry, Theme, ThemeFile};
use crate::validation::{ThemeNameValidator, Validator};

/// Turns catalog entries into resolved themes.
#[derive(Debug, Clone, Default)]
pub struct ThemeLoader {
    name_validator: ThemeNameValidator,
}

impl ThemeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and resolve the theme behind `entry`.
    ///
    /// Roles missing from the file take their default color. A file that
    /// cannot be read or parsed is an error and nothing is returned.
    pub fn load(
        &self,
        id: usize,
        entry: &CatalogEntry,
        source: &dyn ThemeSource,
    ) -> ThemeResult<Theme> {
        let contents = source.read(&entry.path)?;
        let file = self.parse(&entry.path, &contents)?;

        if file.name != entry.name {
            log::warn!(
                "Theme file '{}' was renamed from '{}' to '{}' since the catalog was built",
                entry.path,
                entry.name,
                file.name
            );
        }

        let palette = Palette::from_theme_colors(&file.colors, &file.name);
        log::debug!("Loaded theme '{}' from '{}'", file.name, entry.path);

        Ok(Theme {
            id,
            name: file.name,
            path: entry.path.clone(),
            source: entry.source,
            palette,
        })
    }

    /// Parse and validate a theme description.
    pub fn parse(&self, path: &str, contents: &str) -> ThemeResult<ThemeFile> {
        let file: ThemeFile =
            serde_json::from_str(contents).map_err(|e| ThemeError::ThemeFileMalformed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        self.name_validator.validate(&file.name)?;
        Ok(file)
    }
}
