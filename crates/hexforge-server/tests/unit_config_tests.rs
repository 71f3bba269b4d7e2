//! Unit tests for server configuration loading

use std::fs;

use hexforge_server::config::ServerConfig;
use tempfile::TempDir;

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let config = ServerConfig::load_from("/nonexistent/path/server").unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_load_from_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
host = "0.0.0.0"
port = 9000
allowed_origins = ["http://localhost:5173", "https://dm.example.com"]
log_level = "debug"
"#,
    )
    .unwrap();

    let basename = temp_dir.path().join("server");
    let config = ServerConfig::load_from(&basename.to_string_lossy()).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 9000);
    assert_eq!(
        config.allowed_origins,
        vec!["http://localhost:5173", "https://dm.example.com"]
    );
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_load_from_partial_file_keeps_field_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("server.toml");
    fs::write(&path, "port = 4000\n").unwrap();

    let basename = temp_dir.path().join("server");
    let config = ServerConfig::load_from(&basename.to_string_lossy()).unwrap();

    assert_eq!(config.port, 4000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
}
