use crate::color::Color;
use std::fmt;
use std::str::FromStr;

// Generates the role enum together with its JSON key and default color.
macro_rules! color_roles {
    ($($variant:ident => $key:literal, $default:literal;)*) => {
        /// A semantic color slot exposed to the UI layer.
        ///
        /// Every role has a camelCase key used in theme files and a default
        /// color taken from the bundled "Default" theme.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ColorRole {
            $($variant,)*
        }

        impl ColorRole {
            /// All roles in declaration order.
            pub const ALL: &'static [ColorRole] = &[$(ColorRole::$variant,)*];

            pub const COUNT: usize = Self::ALL.len();

            /// Key used for this role in theme files.
            pub const fn key(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $key,)*
                }
            }

            /// Color used when a theme file does not define this role.
            pub const fn default_color(self) -> Color {
                match self {
                    $(ColorRole::$variant => Color::from_hex($default),)*
                }
            }
        }
    };
}

color_roles! {
    // Native widget palette
    Base => "base", 0x1c2f36;
    Link => "link", 0x3ea6ff;
    Button => "button", 0x2c4650;
    Window => "window", 0x223840;
    Text => "text", 0xe6edf0;
    Midlight => "midlight", 0x35535e;
    Highlight => "highlight", 0x2a82da;
    BrightText => "brightText", 0xffffff;
    ButtonText => "buttonText", 0xe6edf0;
    WindowText => "windowText", 0xe6edf0;
    TooltipText => "tooltipText", 0xe6edf0;
    TooltipBase => "tooltipBase", 0x16262c;
    HighlightedText => "highlightedText", 0xffffff;
    HighlightedTextAlternative => "highlightedTextAlternative", 0x1c2f36;
    PlaceholderText => "placeholderText", 0x8fa4ab;

    // Toolbar and menubar
    ToolbarGradient1 => "toolbarGradient1", 0x2c4650;
    ToolbarGradient2 => "toolbarGradient2", 0x223840;
    MenubarGradient1 => "menubarGradient1", 0x2c4650;
    MenubarGradient2 => "menubarGradient2", 0x1c2f36;
    MenubarText => "menubarText", 0xe6edf0;
    DialogBackground => "dialogBackground", 0x223840;

    // Console
    ConsoleText => "consoleText", 0x72d572;
    ConsoleBase => "consoleBase", 0x0f191d;
    ConsoleButton => "consoleButton", 0x223840;
    ConsoleWindow => "consoleWindow", 0x0f191d;
    ConsoleHighlight => "consoleHighlight", 0x2a82da;
    ConsoleHighlightedText => "consoleHighlightedText", 0xffffff;
    ConsolePlaceholderText => "consolePlaceholderText", 0x5d7279;

    // Window chrome
    WindowBackground => "windowBackground", 0x1c2f36;
    WindowGradient1 => "windowGradient1", 0x223840;
    WindowGradient2 => "windowGradient2", 0x16262c;
    AlternativeHighlight => "alternativeHighlight", 0xf2a33a;
    SetupPanelBackground => "setupPanelBackground", 0x1a2b31;

    // Custom-painted widgets
    WidgetTextPrimary => "widgetTextPrimary", 0xe6edf0;
    WidgetTextSecondary => "widgetTextSecondary", 0x8fa4ab;
    WidgetWindowBackground => "widgetWindowBackground", 0x16262c;
    WidgetWindowBorder => "widgetWindowBorder", 0x35535e;
    PaneWindowBackground => "paneWindowBackground", 0x1a2b31;
    LedEnabled => "ledEnabled", 0x2ecc71;
    LedDisabled => "ledDisabled", 0x4a5d63;
    CsvCheckbox => "csvCheckbox", 0xf2a33a;
    WidgetForegroundPrimary => "widgetForegroundPrimary", 0x2a82da;
    WidgetForegroundSecondary => "widgetForegroundSecondary", 0xf2a33a;
    WidgetIndicator => "widgetIndicator", 0xe74c3c;
    WidgetControlBackground => "widgetControlBackground", 0x223840;
    ConnectButtonChecked => "connectButtonChecked", 0xc0392b;
    ConnectButtonUnchecked => "connectButtonUnchecked", 0x27ae60;
}

/// Key holding the widget color list in theme files.
pub const WIDGET_COLORS_KEY: &str = "widgetColors";

/// Widget colors used when a theme file provides none.
pub const DEFAULT_WIDGET_COLORS: [Color; 9] = [
    Color::from_hex(0xf94144),
    Color::from_hex(0xf3722c),
    Color::from_hex(0xf8961e),
    Color::from_hex(0xf9c74f),
    Color::from_hex(0x90be6d),
    Color::from_hex(0x43aa8b),
    Color::from_hex(0x4d908e),
    Color::from_hex(0x577590),
    Color::from_hex(0x277da1),
];

impl ColorRole {
    /// Position of the role inside a palette.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a role up by its theme-file key. Matching is exact.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.key() == key)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Unknown color role '{s}'"))
    }
}
