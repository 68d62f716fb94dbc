use neurogames_log::{LogLevel, LoggerConfig, LoggerError};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = LoggerConfig::default();
    assert_eq!(config.identity, "NeuroGames");
    assert_eq!(config.sink_path, PathBuf::from("neurogames.log"));
    assert_eq!(config.minimum_level, LogLevel::Info);
}

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    let config = LoggerConfig::from_toml_str(r#"minimum_level = "debug""#).unwrap();
    assert_eq!(config.minimum_level, LogLevel::Debug);
    assert_eq!(config.identity, "NeuroGames");
}

#[test]
fn test_invalid_level_is_rejected() {
    let res = LoggerConfig::from_toml_str(r#"minimum_level = "LOUD""#);
    assert!(matches!(res, Err(LoggerError::Config(_))));
}

#[tokio::test]
async fn test_config_from_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("neurogames.toml");
    tokio::fs::write(
        &file,
        r#"
identity = "Arena"
sink_path = "/tmp/arena.log"
minimum_level = "WARNING"
"#,
    )
    .await
    .unwrap();

    let config = LoggerConfig::from_file(&file).await.unwrap();
    assert_eq!(config.identity, "Arena");
    assert_eq!(config.sink_path, PathBuf::from("/tmp/arena.log"));
    assert_eq!(config.minimum_level, LogLevel::Warning);
}

#[tokio::test]
async fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let config = LoggerConfig::load_or_default(dir.path().join("absent.toml"))
        .await
        .unwrap();
    assert_eq!(config, LoggerConfig::default());
}

#[tokio::test]
async fn test_from_file_missing_is_error() {
    let dir = tempdir().unwrap();
    let res = LoggerConfig::from_file(dir.path().join("absent.toml")).await;
    assert!(matches!(res, Err(LoggerError::Config(_))));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = LoggerConfig::default().with_minimum_level(LogLevel::Error);
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains(r#"minimum_level = "ERROR""#));
    assert_eq!(LoggerConfig::from_toml_str(&text).unwrap(), config);
}
