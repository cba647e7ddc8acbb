use crate::cli::{Command, ThemeSelector};
use crate::config::{AppConfig, setup};
use crate::error::{AppError, AppResult};
use hueshift_core::{
    ColorRole, DirectorySource, EmbeddedSource, FileSettings, ThemeManager, ThemeSource,
    format_style,
};
use serde_json::{Map, Value, json};
use std::io::Write;
use std::path::Path;

/// Command runner around a [`ThemeManager`].
///
/// Output goes to the writer handed to [`App::run`]; diagnostics go through
/// the logger.
pub struct App {
    manager: ThemeManager,
}

impl App {
    pub fn new(manager: ThemeManager) -> Self {
        Self { manager }
    }

    /// Build the theme sources and settings store described by `config`.
    ///
    /// Bundled themes come first so that user themes with the same display
    /// name override them. An unreadable settings file is replaced by an
    /// empty one, which falls back to the default theme.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let mut sources: Vec<Box<dyn ThemeSource>> = Vec::new();
        if config.builtin_themes() {
            sources.push(Box::new(EmbeddedSource::bundled()));
        }
        if let Some(dir) = config.themes_dir() {
            log::debug!("User themes directory: {}", dir.display());
            sources.push(Box::new(DirectorySource::new(dir)));
        }

        let settings_path = config.settings_file()?;
        let settings = match FileSettings::open(&settings_path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {e}");
                FileSettings::empty(settings_path)
            }
        };

        Ok(Self::new(ThemeManager::new(sources, Box::new(settings))))
    }

    pub fn manager(&self) -> &ThemeManager {
        &self.manager
    }

    pub fn run(&mut self, command: &Command, out: &mut impl Write) -> AppResult<()> {
        match command {
            Command::List => self.list(out),
            Command::Show { role, json } => match (role, json) {
                (Some(role), _) => {
                    writeln!(out, "{}", self.manager.color(*role))?;
                    Ok(())
                }
                (None, true) => self.show_json(out),
                (None, false) => self.show(out),
            },
            Command::Select { theme } => self.select(theme, out),
            Command::WidgetColors => {
                for color in self.manager.widget_colors() {
                    writeln!(out, "{color}")?;
                }
                Ok(())
            }
            Command::Roles => {
                for role in ColorRole::ALL {
                    writeln!(out, "{:<28} {}", role.key(), role.default_color())?;
                }
                Ok(())
            }
            Command::Style { template, roles } => {
                let colors: Vec<_> = roles.iter().map(|role| self.manager.color(*role)).collect();
                writeln!(out, "{}", format_style(template, &colors))?;
                Ok(())
            }
            Command::Init { dir } => init_config(dir.as_deref(), out),
        }
    }

    fn list(&self, out: &mut impl Write) -> AppResult<()> {
        let active = self.manager.theme_id();
        for (id, name) in self.manager.available_themes().iter().enumerate() {
            let marker = if active == Some(id) { '*' } else { ' ' };
            writeln!(out, "{marker} {id:>2}  {name}")?;
        }
        Ok(())
    }

    fn show(&self, out: &mut impl Write) -> AppResult<()> {
        match self.manager.theme_id() {
            Some(id) => writeln!(out, "Theme: {} ({id})", self.manager.theme_name())?,
            None => writeln!(out, "Theme: {} (not in catalog)", self.manager.theme_name())?,
        }
        for (role, color) in self.manager.palette().iter() {
            writeln!(out, "{:<28} {color}", role.key())?;
        }
        Ok(())
    }

    fn show_json(&self, out: &mut impl Write) -> AppResult<()> {
        let colors: Map<String, Value> = self
            .manager
            .palette()
            .iter()
            .map(|(role, color)| (role.key().to_string(), Value::String(color.to_string())))
            .collect();

        let document = json!({
            "id": self.manager.theme_id(),
            "name": self.manager.theme_name(),
            "path": self.manager.theme_path(),
            "colors": colors,
            "widgetColors": self.manager.widget_colors(),
        });

        let text = serde_json::to_string_pretty(&document)
            .map_err(|e| AppError::Io(format!("Failed to encode theme: {e}")))?;
        writeln!(out, "{text}")?;
        Ok(())
    }

    fn select(&mut self, theme: &ThemeSelector, out: &mut impl Write) -> AppResult<()> {
        let events = self.manager.subscribe();
        match theme {
            ThemeSelector::Id(id) => self.manager.select(*id)?,
            ThemeSelector::Name(name) => self.manager.select_by_name(name)?,
        }
        for event in events.try_iter() {
            log::debug!("Theme event: {event:?}");
        }

        let id = self
            .manager
            .theme_id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "Switched to theme '{}' ({id})", self.manager.theme_name())?;
        Ok(())
    }
}

/// Create the config directory, defaulting to the platform location.
pub fn init_config(dir: Option<&Path>, out: &mut impl Write) -> AppResult<()> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => setup::get_config_dir()?,
    };
    let created = setup::initialize_config_dir(&dir)?;
    writeln!(out, "Initialized {}", created.display())?;
    writeln!(
        out,
        "Put theme files in {}",
        created.join("themes").display()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueshift_core::{MemorySettings, THEME_ID_KEY};

    fn app() -> App {
        let sources: Vec<Box<dyn ThemeSource>> = vec![Box::new(EmbeddedSource::bundled())];
        App::new(ThemeManager::new(sources, Box::new(MemorySettings::new())))
    }

    fn run(app: &mut App, command: Command) -> AppResult<String> {
        let mut out = Vec::new();
        app.run(&command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_marks_active_theme() {
        let mut app = app();
        let output = run(&mut app, Command::List).unwrap();
        let first = output.lines().next().unwrap();
        assert_eq!(first, "*  0  Default");
        assert_eq!(output.lines().count(), app.manager().theme_count());
    }

    #[test]
    fn test_select_by_name_and_show_role() {
        let mut app = app();
        let output = run(
            &mut app,
            Command::Select {
                theme: ThemeSelector::Name("Light".to_string()),
            },
        )
        .unwrap();
        assert!(output.starts_with("Switched to theme 'Light'"));
        assert_eq!(app.manager().theme_name(), "Light");
        assert!(app.manager().settings().get(THEME_ID_KEY).is_some());

        let output = run(
            &mut app,
            Command::Show {
                role: Some(ColorRole::Base),
                json: false,
            },
        )
        .unwrap();
        assert_eq!(output.trim(), "#ffffff");
    }

    #[test]
    fn test_select_unknown_theme_fails() {
        let mut app = app();
        let error = run(
            &mut app,
            Command::Select {
                theme: ThemeSelector::Id(99),
            },
        )
        .unwrap_err();
        assert!(matches!(error, AppError::Theme(_)));
        assert_eq!(app.manager().theme_name(), "Default");
    }

    #[test]
    fn test_show_json_contains_every_role() {
        let mut app = app();
        let output = run(
            &mut app,
            Command::Show {
                role: None,
                json: true,
            },
        )
        .unwrap();
        let document: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(document["name"], "Default");
        assert_eq!(document["id"], 0);
        assert_eq!(document["path"], "builtin/default.json");
        assert_eq!(
            document["colors"].as_object().unwrap().len(),
            ColorRole::COUNT
        );
        assert_eq!(document["widgetColors"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_style_fills_template() {
        let mut app = app();
        let expected = format!(
            "color: {}; background: {}",
            app.manager().color(ColorRole::Text),
            app.manager().color(ColorRole::Base)
        );
        let output = run(
            &mut app,
            Command::Style {
                template: "color: %1; background: %2".to_string(),
                roles: vec![ColorRole::Text, ColorRole::Base],
            },
        )
        .unwrap();
        assert_eq!(output.trim_end(), expected);
    }

    #[test]
    fn test_roles_lists_defaults() {
        let mut app = app();
        let output = run(&mut app, Command::Roles).unwrap();
        assert_eq!(output.lines().count(), ColorRole::COUNT);
    }
}
