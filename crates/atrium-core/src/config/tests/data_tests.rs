use std::io::Write;
use std::path::Path;

use crate::config::data::{AppConfig, ConfigFormat};
use crate::config::error::ConfigError;
use crate::kernel::constants;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.title, constants::DEFAULT_DOCUMENT_TITLE);
    assert_eq!(config.locale, constants::DEFAULT_LOCALE);
    assert_eq!(config.initial_path, constants::DEFAULT_ROUTE_PATH);
}

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("app.json")), Some(ConfigFormat::Json));
    #[cfg(feature = "toml-config")]
    assert_eq!(ConfigFormat::from_path(Path::new("app.toml")), Some(ConfigFormat::Toml));
    #[cfg(feature = "yaml-config")]
    {
        assert_eq!(ConfigFormat::from_path(Path::new("app.yaml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("app.YML")), Some(ConfigFormat::Yaml));
    }
    assert_eq!(ConfigFormat::from_path(Path::new("app.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("app")), None);
}

#[test]
fn test_parse_json_with_partial_fields() {
    let config = AppConfig::from_str(r#"{"title": "My App"}"#, ConfigFormat::Json)
        .expect("partial JSON config should parse");
    assert_eq!(config.title, "My App");
    // Unspecified fields fall back to defaults
    assert_eq!(config.locale, constants::DEFAULT_LOCALE);
}

#[cfg(feature = "toml-config")]
#[test]
fn test_parse_toml() {
    let data = "title = \"Atrium Demo\"\nlocale = \"fr\"\ninitial_path = \"/\"\n";
    let config = AppConfig::from_str(data, ConfigFormat::Toml).expect("TOML config should parse");
    assert_eq!(config.title, "Atrium Demo");
    assert_eq!(config.locale, "fr");
}

#[test]
fn test_parse_error_reports_format() {
    let err = AppConfig::from_str("{not json", ConfigFormat::Json).unwrap_err();
    match err {
        ConfigError::Parse { format, .. } => assert_eq!(format, "JSON"),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[cfg(feature = "toml-config")]
#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("atrium.toml");
    let mut file = std::fs::File::create(&path).expect("create config file");
    writeln!(file, "title = \"From Disk\"").expect("write config file");

    let config = AppConfig::load(&path).expect("config file should load");
    assert_eq!(config.title, "From Disk");
    assert_eq!(config.locale, constants::DEFAULT_LOCALE);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("absent.json");
    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "got {:?}", err);
}

#[test]
fn test_load_unsupported_extension() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("app.conf");
    std::fs::write(&path, "whatever").expect("write file");
    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }), "got {:?}", err);
}
