use std::path::{Path, PathBuf};

use streak_card::card::{NumberFormat, StrokeType};
use streak_card::config::loader::{SearchPaths, discover, load_config, load_config_from};
use streak_card::config::types::{AppConfig, DEFAULT_OUTPUT_PATH};

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

fn write(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn parse_full_config() {
    let config = load_config(Some(&fixture("full_config.toml"))).unwrap();
    assert_eq!(config.user.as_deref(), Some("octocat"));
    assert_eq!(config.output_path(), PathBuf::from("cards/streak.svg"));
    assert_eq!(
        config.github.api_url.as_deref(),
        Some("https://ghe.example.com/api")
    );

    let card = &config.card;
    assert_eq!(card.theme, "dracula");
    assert!(card.hide_border);
    assert!(!card.animate);
    assert_eq!(card.width, Some(600.0));
    assert_eq!(card.height, Some(220.0));
    assert_eq!(card.border_radius, Some(10.0));
    assert_eq!(card.date_format.as_deref(), Some("j M[, Y]"));
    assert_eq!(card.locale, "de");
    assert_eq!(card.number_format, NumberFormat::Short);
    assert_eq!(card.stroke_type, StrokeType::Butt);
    assert_eq!(card.card_id.as_deref(), Some("profile"));
    assert_eq!(card.colors.ring.as_deref(), Some("#123456"));
    assert_eq!(card.colors.background.as_deref(), Some("45,FF7E5F,FEB47B"));
    assert!(card.colors.fire.is_none());
}

#[test]
fn empty_config_uses_defaults() {
    let config: AppConfig = toml::from_str("").unwrap();
    assert!(config.user.is_none());
    assert_eq!(config.output_path(), PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert_eq!(config.card.theme, "default");
    assert!(config.card.animate);
    assert_eq!(config.card.locale, "en");
    assert_eq!(config.card.number_format, NumberFormat::Full);
    assert_eq!(config.card.stroke_type, StrokeType::Round);
}

#[test]
fn unknown_keys_ignored() {
    let config = load_config(Some(&fixture("unknown_keys_config.toml"))).unwrap();
    assert_eq!(config.user.as_deref(), Some("octocat"));
    assert_eq!(config.card.theme, "nord");
}

#[test]
fn invalid_toml_is_an_error() {
    let err = load_config(Some(&fixture("invalid_toml.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("parsing TOML"));
}

#[test]
fn bad_enum_value_is_an_error() {
    let result: Result<AppConfig, _> = toml::from_str("[card]\nstroke_type = \"square\"\n");
    assert!(result.is_err());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = load_config(Some(Path::new("tests/fixtures/does_not_exist.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("reading"));
}

#[test]
fn discovery_follows_priority() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let cwd = root.join("work");
    let xdg = root.join("xdg");
    let home = root.join("home");

    let home_file = write(&home, ".config/streak-card/config.toml", "user = \"home\"\n");
    let search = SearchPaths {
        env_path: None,
        cwd: Some(cwd.clone()),
        xdg_config_home: Some(xdg.clone()),
        home: Some(home.clone()),
    };
    assert_eq!(discover(&search), Some(home_file));

    let xdg_file = write(&xdg, "streak-card/config.toml", "user = \"xdg\"\n");
    assert_eq!(discover(&search), Some(xdg_file));

    write(&cwd, "streak-card.toml", "user = \"local\"\n");
    let config = load_config_from(None, &search).unwrap();
    assert_eq!(config.user.as_deref(), Some("local"));

    let env_file = write(root, "custom.toml", "user = \"env\"\n");
    let search = SearchPaths {
        env_path: Some(env_file),
        ..search
    };
    let config = load_config_from(None, &search).unwrap();
    assert_eq!(config.user.as_deref(), Some("env"));

    let explicit = write(root, "explicit.toml", "user = \"explicit\"\n");
    let config = load_config_from(Some(&explicit), &search).unwrap();
    assert_eq!(config.user.as_deref(), Some("explicit"));
}

#[test]
fn nothing_found_gives_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let search = SearchPaths {
        env_path: Some(tmp.path().join("missing.toml")),
        cwd: Some(tmp.path().to_path_buf()),
        xdg_config_home: None,
        home: None,
    };
    assert!(discover(&search).is_none());
    let config = load_config_from(None, &search).unwrap();
    assert!(config.user.is_none());
    assert_eq!(config.card.theme, "default");
}
