use super::*;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = Settings::load_from(&tmp.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.directory.page_size, 30);
    assert_eq!(settings.directory.scroll_threshold, 200.0);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[directory]\npage_size = 12\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.directory.page_size, 12);
    assert_eq!(settings.directory.scroll_threshold, DEFAULT_SCROLL_THRESHOLD);
    assert!(settings.site.base_url.is_none());
}

#[test]
fn wrongly_typed_value_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[directory]\npage_size = \"many\"\n").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[test]
fn database_path_priority() {
    let mut settings = Settings::default();
    assert_eq!(settings.database_path(None), default_database_path());

    settings.directory.database = Some(PathBuf::from("/from/settings.db"));
    assert_eq!(settings.database_path(None), PathBuf::from("/from/settings.db"));
    assert_eq!(
        settings.database_path(Some(PathBuf::from("/from/cli.db"))),
        PathBuf::from("/from/cli.db")
    );
}

#[test]
fn save_creates_file_and_round_trips() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("settings.toml");

    save_setting_at(&path, "directory", "page_size", toml::Value::Integer(50)).unwrap();
    save_setting_at(
        &path,
        "site",
        "base_url",
        toml::Value::String("https://docs.example".to_string()),
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.directory.page_size, 50);
    assert_eq!(settings.site.base_url.as_deref(), Some("https://docs.example"));
}

#[test]
fn save_preserves_unknown_keys() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[ui]\ntheme = \"dark\"\n").unwrap();

    save_setting_at(&path, "directory", "page_size", toml::Value::Integer(10)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("theme = \"dark\""));
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn save_rejects_non_table_section() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "directory = 3\n").unwrap();

    let err = save_setting_at(&path, "directory", "page_size", toml::Value::Integer(10))
        .unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
}
