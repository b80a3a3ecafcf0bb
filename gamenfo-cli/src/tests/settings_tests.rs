use super::*;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = load_settings(&tmp.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.render.format, "nfo");
}

#[test]
fn test_reads_render_format() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[render]\nformat = \"json\"\n").unwrap();

    let settings = load_settings(&path).unwrap();
    assert_eq!(settings.render.format, "json");
}

#[test]
fn test_empty_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "").unwrap();

    assert_eq!(load_settings(&path).unwrap(), Settings::default());
}

#[test]
fn test_malformed_file_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[render\nformat = ").unwrap();

    assert!(matches!(load_settings(&path), Err(CliError::Config(_))));
}

#[test]
fn test_settings_path_ends_with_app_dir() {
    let path = settings_path();
    assert!(path.ends_with("gamenfo/settings.toml"));
}
