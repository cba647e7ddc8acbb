use crate::catalog::ThemeCatalog;
use crate::color::Color;
use crate::error::{ThemeError, ThemeResult};
use crate::events::EventBus;
use crate::loader::ThemeLoader;
use crate::palette::Palette;
use crate::role::ColorRole;
use crate::settings::{SettingsStore, THEME_ID_KEY};
use crate::source::ThemeSource;
use crate::types::{CatalogEntry, Theme, ThemeEvent};
use std::sync::mpsc::Receiver;

/// Theme selected when nothing valid is persisted.
pub const DEFAULT_THEME_ID: usize = 0;

/// Name reported when no catalog theme could be loaded at all.
pub const FALLBACK_THEME_NAME: &str = "Default";

#[derive(Debug, Clone)]
struct ActiveTheme {
    id: Option<usize>,
    name: String,
    /// Source index and path the palette was read from
    origin: Option<(usize, String)>,
    palette: Palette,
}

impl ActiveTheme {
    fn fallback() -> Self {
        Self {
            id: None,
            name: FALLBACK_THEME_NAME.to_string(),
            origin: None,
            palette: Palette::default(),
        }
    }

    fn loaded_from(&self, entry: &CatalogEntry) -> bool {
        self.origin
            .as_ref()
            .is_some_and(|(source, path)| *source == entry.source && *path == entry.path)
    }
}

impl From<Theme> for ActiveTheme {
    fn from(theme: Theme) -> Self {
        Self {
            id: Some(theme.id),
            name: theme.name,
            origin: Some((theme.source, theme.path)),
            palette: theme.palette,
        }
    }
}

/// Owns the theme catalog and the active palette.
///
/// Construction scans the sources, restores the persisted theme id (falling
/// back to [`DEFAULT_THEME_ID`] when it is missing, unparseable or out of
/// range) and loads it. From then on the active theme changes through
/// [`select`](Self::select) and [`select_by_name`](Self::select_by_name),
/// or through [`refresh_catalog`](Self::refresh_catalog) when another file
/// takes over the active theme's name. A failed selection never touches the
/// active colors.
///
/// # Examples
///
/// ```no_run
/// use hueshift_core::{ColorRole, EmbeddedSource, MemorySettings, ThemeManager, ThemeSource};
///
/// let sources: Vec<Box<dyn ThemeSource>> = vec![Box::new(EmbeddedSource::bundled())];
/// let mut manager = ThemeManager::new(sources, Box::new(MemorySettings::new()));
///
/// let events = manager.subscribe();
/// manager.select_by_name("Light")?;
/// assert!(events.try_recv().is_ok());
///
/// println!("window: {}", manager.color(ColorRole::Window));
/// # Ok::<(), hueshift_core::ThemeError>(())
/// ```
pub struct ThemeManager {
    sources: Vec<Box<dyn ThemeSource>>,
    settings: Box<dyn SettingsStore>,
    loader: ThemeLoader,
    catalog: ThemeCatalog,
    active: ActiveTheme,
    events: EventBus,
}

impl ThemeManager {
    pub fn new(sources: Vec<Box<dyn ThemeSource>>, settings: Box<dyn SettingsStore>) -> Self {
        let catalog = ThemeCatalog::build(&sources);

        let mut manager = Self {
            sources,
            settings,
            loader: ThemeLoader::new(),
            catalog,
            active: ActiveTheme::fallback(),
            events: EventBus::new(),
        };
        manager.restore();
        manager
    }

    /// Load the persisted theme, or the default one.
    fn restore(&mut self) {
        if self.catalog.is_empty() {
            log::warn!("No themes available, using built-in default colors");
            return;
        }

        let persisted = self.settings.get(THEME_ID_KEY);
        let id = match persisted.as_deref().map(str::parse::<usize>) {
            Some(Ok(id)) if id < self.catalog.len() => id,
            Some(Ok(id)) => {
                log::warn!(
                    "Persisted theme id {id} is out of range ({} themes), using default",
                    self.catalog.len()
                );
                DEFAULT_THEME_ID
            }
            Some(Err(_)) => {
                log::warn!(
                    "Persisted theme id '{}' is not a number, using default",
                    persisted.as_deref().unwrap_or_default()
                );
                DEFAULT_THEME_ID
            }
            None => DEFAULT_THEME_ID,
        };

        let mut candidates = vec![id];
        if id != DEFAULT_THEME_ID {
            candidates.push(DEFAULT_THEME_ID);
        }

        for candidate in candidates {
            match self.load(candidate) {
                Ok(theme) => {
                    log::info!("Theme manager initialized with '{}'", theme.name);
                    self.active = theme.into();
                    return;
                }
                Err(e) => log::error!("Failed to load theme {candidate} at startup: {e}"),
            }
        }

        log::warn!("No theme could be loaded, using built-in default colors");
    }

    fn load(&self, id: usize) -> ThemeResult<Theme> {
        let entry = self
            .catalog
            .get(id)
            .ok_or(ThemeError::IndexOutOfRange {
                id,
                count: self.catalog.len(),
            })?;

        let source = self.sources.get(entry.source).ok_or_else(|| {
            ThemeError::CatalogEntryInvalid {
                path: entry.path.clone(),
                reason: format!("source {} no longer exists", entry.source),
            }
        })?;

        self.loader.load(id, entry, source.as_ref())
    }

    /// Make theme `id` the active theme.
    ///
    /// On success every color is updated, the id is persisted and a single
    /// [`ThemeEvent::ThemeChanged`] is published, in that order. On failure
    /// the previous theme stays active and nothing is published. Failing to
    /// persist the id is logged but does not undo the selection.
    pub fn select(&mut self, id: usize) -> ThemeResult<()> {
        let theme = self.load(id).inspect_err(|e| {
            log::error!("Failed to select theme {id}: {e}");
        })?;

        let name = theme.name.clone();
        self.active = theme.into();
        self.persist(id);

        log::info!("Switched to theme: {name} ({id})");
        self.events.publish(ThemeEvent::ThemeChanged { id });
        Ok(())
    }

    fn persist(&mut self, id: usize) {
        if let Err(e) = self.settings.set(THEME_ID_KEY, &id.to_string()) {
            log::error!("Failed to persist theme id {id}: {e}");
        }
    }

    /// Select a theme by its display name.
    pub fn select_by_name(&mut self, name: &str) -> ThemeResult<()> {
        let id = self
            .catalog
            .position(name)
            .ok_or_else(|| ThemeError::UnknownTheme {
                name: name.to_string(),
            })
            .inspect_err(|e| log::error!("{e}"))?;
        self.select(id)
    }

    /// Rescan the sources.
    ///
    /// Returns `true` and publishes [`ThemeEvent::AvailableThemesChanged`]
    /// when the catalog differs from the previous scan. The active theme is
    /// matched again by name:
    ///
    /// - if its id moved, the new id is persisted;
    /// - if another file now provides it, that file is loaded and
    ///   [`ThemeEvent::ThemeChanged`] follows (a failed load keeps the
    ///   current colors);
    /// - if it disappeared, its colors stay active and
    ///   [`theme_id`](Self::theme_id) becomes `None`.
    pub fn refresh_catalog(&mut self) -> bool {
        let catalog = ThemeCatalog::build(&self.sources);
        if catalog == self.catalog {
            return false;
        }

        self.catalog = catalog;
        let mut reloaded = None;
        if let Some(previous) = self.active.id {
            match self.catalog.position(&self.active.name) {
                Some(id) => {
                    self.active.id = Some(id);
                    if id != previous {
                        log::info!(
                            "Active theme '{}' moved from {previous} to {id}",
                            self.active.name
                        );
                        self.persist(id);
                    }
                    let replaced = self
                        .catalog
                        .get(id)
                        .is_some_and(|entry| !self.active.loaded_from(entry));
                    if replaced {
                        match self.load(id) {
                            Ok(theme) => {
                                log::info!(
                                    "Active theme '{}' is now read from '{}'",
                                    theme.name,
                                    theme.path
                                );
                                self.active = theme.into();
                                reloaded = Some(id);
                            }
                            Err(e) => log::warn!(
                                "Failed to reload active theme '{}', keeping its colors: {e}",
                                self.active.name
                            ),
                        }
                    }
                }
                None => {
                    self.active.id = None;
                    log::warn!(
                        "Active theme '{}' is no longer available, keeping its colors",
                        self.active.name
                    );
                }
            }
        }

        let count = self.catalog.len();
        log::info!("Theme catalog changed, {count} themes available");
        self.events.publish(ThemeEvent::AvailableThemesChanged { count });
        if let Some(id) = reloaded {
            self.events.publish(ThemeEvent::ThemeChanged { id });
        }
        true
    }

    /// Receive [`ThemeEvent`]s from now on.
    pub fn subscribe(&mut self) -> Receiver<ThemeEvent> {
        self.events.subscribe()
    }

    /// Id of the active theme. `None` only when no catalog theme is active.
    pub fn theme_id(&self) -> Option<usize> {
        self.active.id
    }

    pub fn theme_name(&self) -> &str {
        &self.active.name
    }

    /// Path, within its source, of the file the active colors came from.
    pub fn theme_path(&self) -> Option<&str> {
        self.active.origin.as_ref().map(|(_, path)| path.as_str())
    }

    pub fn color(&self, role: ColorRole) -> Color {
        self.active.palette.get(role)
    }

    pub fn palette(&self) -> &Palette {
        &self.active.palette
    }

    /// Widget colors of the active theme as `#rrggbb` strings.
    pub fn widget_colors(&self) -> Vec<String> {
        self.active.palette.widget_color_names()
    }

    /// Display names of every catalog theme, in id order.
    pub fn available_themes(&self) -> Vec<String> {
        self.catalog.names()
    }

    pub fn theme_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }
}
