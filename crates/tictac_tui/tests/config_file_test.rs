//! Tests for loading widget configuration from disk.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tictac_tui::{Theme, WidgetConfig};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config("class = \"contrast\"\nlog_file = \"board.log\"\n");
    let config = WidgetConfig::from_file(file.path()).expect("load");

    assert_eq!(config.class().as_deref(), Some("contrast"));
    assert_eq!(config.log_file(), &PathBuf::from("board.log"));
    assert_eq!(Theme::from_class(config.class().as_deref()), Theme::Contrast);
}

#[test]
fn test_missing_fields_take_defaults() {
    let file = write_config("");
    let config = WidgetConfig::load(Some(file.path())).expect("load");
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn test_no_path_means_defaults() {
    let config = WidgetConfig::load(None).expect("load");
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = WidgetConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("class = [unclosed");
    let err = WidgetConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("class = \"mono\"\n");
    let config = WidgetConfig::load(Some(file.path()))
        .expect("load")
        .with_overrides(Some("classic".to_string()), Some(PathBuf::from("x.log")));
    assert_eq!(config.class().as_deref(), Some("classic"));
    assert_eq!(config.log_file(), &PathBuf::from("x.log"));
}
