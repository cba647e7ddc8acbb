use claims::{assert_err, assert_ok};
use hueshift::app::{App, init_config};
use hueshift::cli::{Command, ThemeSelector};
use hueshift::config::{AppConfig, load_config};
use hueshift::error::AppError;
use hueshift_core::ColorRole;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, extra: &str) -> std::path::PathBuf {
    let themes = dir.join("themes");
    fs::create_dir_all(&themes).unwrap();
    let path = dir.join("config.toml");
    fs::write(
        &path,
        format!(
            "themes_dir = {:?}\nsettings_file = {:?}\n{extra}",
            themes.display().to_string(),
            dir.join("settings.toml").display().to_string()
        ),
    )
    .unwrap();
    path
}

fn config_from(path: &Path) -> AppConfig {
    assert_ok!(load_config(Some(path)).into_config())
}

fn run(app: &mut App, command: Command) -> Result<String, AppError> {
    let mut out = Vec::new();
    app.run(&command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn selection_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = config_from(&write_config(dir.path(), ""));

    let mut app = assert_ok!(App::from_config(&config));
    assert_eq!(app.manager().theme_name(), "Default");
    assert_ok!(run(
        &mut app,
        Command::Select {
            theme: ThemeSelector::Name("Midnight".to_string()),
        }
    ));
    let selected = app.manager().theme_id();
    drop(app);

    let settings = fs::read_to_string(dir.path().join("settings.toml")).unwrap();
    assert!(settings.contains("themeId"));

    let app = assert_ok!(App::from_config(&config));
    assert_eq!(app.manager().theme_name(), "Midnight");
    assert_eq!(app.manager().theme_id(), selected);
}

#[test]
fn user_theme_overrides_bundled_theme() {
    let dir = TempDir::new().unwrap();
    let config = config_from(&write_config(dir.path(), ""));
    fs::write(
        dir.path().join("themes/mine.json"),
        r##"{"name": "Light", "colors": {"base": "#123456"}}"##,
    )
    .unwrap();

    let mut app = assert_ok!(App::from_config(&config));
    assert_eq!(app.manager().theme_count(), 3);
    assert_ok!(run(
        &mut app,
        Command::Select {
            theme: ThemeSelector::Name("Light".to_string()),
        }
    ));

    let output = assert_ok!(run(
        &mut app,
        Command::Show {
            role: Some(ColorRole::Base),
            json: false,
        }
    ));
    assert_eq!(output.trim(), "#123456");

    // Roles the user theme leaves out take their defaults
    assert_eq!(
        app.manager().color(ColorRole::Window),
        ColorRole::Window.default_color()
    );
}

#[test]
fn user_themes_only() {
    let dir = TempDir::new().unwrap();
    let config = config_from(&write_config(dir.path(), "builtin_themes = false\n"));
    fs::write(
        dir.path().join("themes/solo.json"),
        r#"{"name": "Solo", "colors": {}}"#,
    )
    .unwrap();

    let mut app = assert_ok!(App::from_config(&config));
    let output = assert_ok!(run(&mut app, Command::List));
    assert_eq!(output, "*  0  Solo\n");
}

#[test]
fn empty_catalog_uses_fallback_colors() {
    let dir = TempDir::new().unwrap();
    let config = config_from(&write_config(dir.path(), "builtin_themes = false\n"));

    let mut app = assert_ok!(App::from_config(&config));
    assert_eq!(app.manager().theme_id(), None);
    assert_eq!(assert_ok!(run(&mut app, Command::List)), "");

    let output = assert_ok!(run(&mut app, Command::WidgetColors));
    assert_eq!(output.lines().count(), 9);

    let error = assert_err!(run(
        &mut app,
        Command::Select {
            theme: ThemeSelector::Id(0),
        }
    ));
    assert!(matches!(error, AppError::Theme(_)));
}

#[test]
fn corrupt_settings_fall_back_to_default_theme() {
    let dir = TempDir::new().unwrap();
    let config = config_from(&write_config(dir.path(), ""));
    fs::write(dir.path().join("settings.toml"), "themeId = = 3").unwrap();

    let app = assert_ok!(App::from_config(&config));
    assert_eq!(app.manager().theme_id(), Some(0));
}

#[test]
fn init_creates_config_dir() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("hueshift");

    let mut out = Vec::new();
    assert_ok!(init_config(Some(&target), &mut out));
    assert!(target.join("themes").is_dir());
    assert!(target.join("config.toml").is_file());
    assert!(String::from_utf8(out).unwrap().contains("Initialized"));

    // The generated config loads cleanly
    let config = config_from(&target.join("config.toml"));
    assert!(config.builtin_themes());
}
