use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// On-disk layout of a theme description.
///
/// ```json
/// {
///   "name": "Default",
///   "colors": { "base": "#1c2f36", "widgetColors": ["#f94144"] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeFile {
    pub name: String,
    #[serde(default)]
    pub colors: Map<String, Value>,
}

/// Just enough of a theme file to list it in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ThemeHeader {
    pub name: String,
}

/// One theme known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Display name from the theme file
    pub name: String,
    /// Path within its source
    pub path: String,
    /// Index of the source the path belongs to
    pub source: usize,
}

/// A fully resolved theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: usize,
    pub name: String,
    /// Path within its source
    pub path: String,
    /// Index of the source the theme was read from
    pub source: usize,
    pub palette: Palette,
}

/// Notifications published by the theme manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    /// A new theme is active. Every color has already been updated.
    ThemeChanged { id: usize },
    /// The catalog was rebuilt with a different set of themes.
    AvailableThemesChanged { count: usize },
}
