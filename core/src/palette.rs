use crate::color::Color;
use crate::role::{ColorRole, DEFAULT_WIDGET_COLORS, WIDGET_COLORS_KEY};
use serde_json::{Map, Value};

/// A complete role → color assignment plus the widget color list.
///
/// There is one slot per [`ColorRole`], so a palette can never have an
/// unset role. `Palette::default()` holds the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; ColorRole::COUNT],
    widget_colors: Vec<Color>,
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> Color {
        self.colors[role.index()]
    }

    pub fn set(&mut self, role: ColorRole, color: Color) {
        self.colors[role.index()] = color;
    }

    /// Roles and their colors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.iter().map(move |role| (*role, self.get(*role)))
    }

    pub fn widget_colors(&self) -> &[Color] {
        &self.widget_colors
    }

    /// Widget colors as `#rrggbb` strings.
    pub fn widget_color_names(&self) -> Vec<String> {
        self.widget_colors.iter().map(Color::name).collect()
    }

    /// Replace the widget colors. An empty list restores the defaults.
    pub fn set_widget_colors(&mut self, colors: Vec<Color>) {
        self.widget_colors = if colors.is_empty() {
            DEFAULT_WIDGET_COLORS.to_vec()
        } else {
            colors
        };
    }

    /// Build a palette from the `colors` object of a theme file.
    ///
    /// Missing roles keep their default. Values that are not valid color
    /// strings are logged and also keep their default. `label` names the
    /// theme in log messages.
    pub fn from_theme_colors(colors: &Map<String, Value>, label: &str) -> Self {
        let mut palette = Self::default();

        for (key, value) in colors {
            if key == WIDGET_COLORS_KEY {
                palette.set_widget_colors(parse_widget_colors(value, label));
                continue;
            }

            let Some(role) = ColorRole::from_key(key) else {
                log::debug!("Theme '{label}': ignoring unknown color role '{key}'");
                continue;
            };

            match value.as_str().map(str::parse::<Color>) {
                Some(Ok(color)) => palette.set(role, color),
                Some(Err(e)) => {
                    log::warn!("Theme '{label}': {e} for role '{key}', using default");
                }
                None => {
                    log::warn!("Theme '{label}': role '{key}' is not a string, using default");
                }
            }
        }

        palette
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: std::array::from_fn(|i| ColorRole::ALL[i].default_color()),
            widget_colors: DEFAULT_WIDGET_COLORS.to_vec(),
        }
    }
}

fn parse_widget_colors(value: &Value, label: &str) -> Vec<Color> {
    let Some(entries) = value.as_array() else {
        log::warn!("Theme '{label}': '{WIDGET_COLORS_KEY}' is not an array, using defaults");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry.as_str().map(str::parse::<Color>) {
            Some(Ok(color)) => Some(color),
            Some(Err(e)) => {
                log::warn!("Theme '{label}': skipping widget color: {e}");
                None
            }
            None => {
                log::warn!("Theme '{label}': skipping non-string widget color");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn colors(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_default_palette_uses_role_defaults() {
        let palette = Palette::default();
        for (role, color) in palette.iter() {
            assert_eq!(color, role.default_color());
        }
        assert_eq!(palette.widget_colors(), &DEFAULT_WIDGET_COLORS);
    }

    #[test]
    fn test_missing_roles_fall_back_to_defaults() {
        let palette = Palette::from_theme_colors(&colors(json!({ "base": "#010203" })), "t");
        assert_eq!(palette.get(ColorRole::Base), Color::rgb(1, 2, 3));
        assert_eq!(palette.get(ColorRole::Link), ColorRole::Link.default_color());
        assert_eq!(
            palette.get(ColorRole::ConnectButtonUnchecked),
            ColorRole::ConnectButtonUnchecked.default_color()
        );
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let palette = Palette::from_theme_colors(
            &colors(json!({
                "text": "#zzzzzz",
                "window": 42,
                "link": "red",
                "unknownRole": "#ffffff"
            })),
            "t",
        );
        assert_eq!(palette.get(ColorRole::Text), ColorRole::Text.default_color());
        assert_eq!(palette.get(ColorRole::Window), ColorRole::Window.default_color());
        assert_eq!(palette.get(ColorRole::Link), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_widget_colors_parsing() {
        let palette = Palette::from_theme_colors(
            &colors(json!({ "widgetColors": ["#ff0000", "bogus", 7, "blue"] })),
            "t",
        );
        assert_eq!(palette.widget_color_names(), vec!["#ff0000", "#0000ff"]);

        let palette = Palette::from_theme_colors(&colors(json!({ "widgetColors": [] })), "t");
        assert_eq!(palette.widget_colors(), &DEFAULT_WIDGET_COLORS);

        let palette = Palette::from_theme_colors(&colors(json!({ "widgetColors": "#fff" })), "t");
        assert_eq!(palette.widget_colors(), &DEFAULT_WIDGET_COLORS);
    }
}
