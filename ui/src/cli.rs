//! Command line interface for Hueshift
//!
//! Examples:
//!   hueshift list                          # Available themes, active one marked
//!   hueshift select Midnight               # Select by display name
//!   hueshift select 1                      # Select by id
//!   hueshift show --role window            # A single color
//!   hueshift style "color: %1" text        # Fill a style template

use clap::{Parser, Subcommand};
use hueshift_core::ColorRole;
use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;

/// Browse, select and inspect color themes.
#[derive(Debug, Parser)]
#[command(name = "hueshift", version)]
pub struct Cli {
    /// Path to config file (default: ./config.toml or ~/.config/hueshift/config.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List available themes.
    List,

    /// Show the active theme's colors.
    Show {
        /// Only print this role (theme-file key, e.g. `window`).
        #[arg(long)]
        role: Option<ColorRole>,

        /// Print the whole theme as JSON.
        #[arg(long, conflicts_with = "role")]
        json: bool,
    },

    /// Select a theme by id or display name and remember it.
    Select {
        /// Theme id (as printed by `list`) or display name.
        theme: ThemeSelector,
    },

    /// Print the active theme's widget colors.
    WidgetColors,

    /// List every color role with its default color.
    Roles,

    /// Fill a style template: `%1`, `%2`, ... become the colors of the given roles.
    Style {
        template: String,

        #[arg(required = true)]
        roles: Vec<ColorRole>,
    },

    /// Create the config directory with a themes folder and a commented config.toml.
    Init {
        /// Directory to initialize (default: ~/.config/hueshift).
        dir: Option<PathBuf>,
    },
}

/// A theme given on the command line, by id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSelector {
    Id(usize),
    Name(String),
}

impl FromStr for ThemeSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(id) => ThemeSelector::Id(id),
            Err(_) => ThemeSelector::Name(s.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_accepts_ids_and_names() {
        let cli = Cli::parse_from(["hueshift", "select", "2"]);
        assert!(matches!(
            cli.command,
            Command::Select {
                theme: ThemeSelector::Id(2)
            }
        ));

        let cli = Cli::parse_from(["hueshift", "select", "Solarized Dark"]);
        match cli.command {
            Command::Select { theme } => {
                assert_eq!(theme, ThemeSelector::Name("Solarized Dark".to_string()))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_roles_are_parsed_by_key() {
        let cli = Cli::parse_from(["hueshift", "show", "--role", "ledEnabled"]);
        assert!(matches!(
            cli.command,
            Command::Show {
                role: Some(ColorRole::LedEnabled),
                json: false
            }
        ));

        assert!(Cli::try_parse_from(["hueshift", "show", "--role", "nope"]).is_err());
        assert!(Cli::try_parse_from(["hueshift", "show", "--role", "text", "--json"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["hueshift", "list", "--config", "/tmp/c.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_style_requires_roles() {
        assert!(Cli::try_parse_from(["hueshift", "style", "color: %1"]).is_err());
        let cli = Cli::parse_from(["hueshift", "style", "%1 %2", "text", "base"]);
        match cli.command {
            Command::Style { template, roles } => {
                assert_eq!(template, "%1 %2");
                assert_eq!(roles, vec![ColorRole::Text, ColorRole::Base]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
