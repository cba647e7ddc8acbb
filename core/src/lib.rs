//! # Hueshift Core Library
//!
//! Theme engine for a desktop GUI: it enumerates JSON theme descriptions,
//! resolves each one into a complete color palette, keeps track of the
//! active theme and persists the user's choice.
//!
//! ## Modules
//!
//! - [`color`] - RGBA colors and the notations accepted in theme files
//! - [`role`] - Color roles, their theme-file keys and default colors
//! - [`palette`] - Complete role → color assignments
//! - [`source`] - Where theme files are listed and read from
//! - [`catalog`] - Ordered list of available themes
//! - [`loader`] - Parsing theme files into palettes
//! - [`settings`] - Key/value persistence of the selected theme
//! - [`events`] - Change notifications for observers
//! - [`manager`] - The service tying everything together
//! - [`style`] - Style-sheet templating with theme colors
//! - [`validation`] - Theme name and path validators
//!
//! ## Theme Files
//!
//! ```json
//! {
//!   "name": "Midnight",
//!   "colors": {
//!     "base": "#0d1117",
//!     "text": "#c9d1d9",
//!     "widgetColors": ["#58a6ff", "#3fb950"]
//!   }
//! }
//! ```
//!
//! Roles a file leaves out take their default color, so every role always
//! has a value.

pub mod catalog;
pub mod color;
pub mod error;
pub mod events;
pub mod loader;
pub mod manager;
pub mod palette;
pub mod role;
pub mod settings;
pub mod source;
pub mod style;
pub mod types;
pub mod validation;

pub use catalog::ThemeCatalog;
pub use color::{Color, ColorParseError};
pub use error::{SettingsError, ThemeError, ThemeResult};
pub use events::EventBus;
pub use loader::ThemeLoader;
pub use manager::{DEFAULT_THEME_ID, ThemeManager};
pub use palette::Palette;
pub use role::ColorRole;
pub use settings::{FileSettings, MemorySettings, SettingsStore, THEME_ID_KEY};
pub use source::{DirectorySource, EmbeddedSource, ThemeSource};
pub use style::format_style;
pub use types::{CatalogEntry, Theme, ThemeEvent, ThemeFile};
