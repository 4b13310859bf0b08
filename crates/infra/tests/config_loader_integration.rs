//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use ignitecall_domain::{IgniteCallError, RequiredScope};
use ignitecall_infra::config;
use tempfile::Builder;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "server": {
            "bind_address": "0.0.0.0:3000",
            "public_url": "https://call.example.com/"
        },
        "auth": {
            "google_client_id": "json-client",
            "google_client_secret": "json-secret",
            "required_scope": "https://www.googleapis.com/auth/calendar",
            "session_ttl_seconds": 3600
        },
        "database": {
            "path": "/tmp/ignitecall-integration.db",
            "pool_size": 4
        }
    }"#;

    let mut temp_file = Builder::new().suffix(".json").tempfile().expect("temp file");
    temp_file.write_all(json_content.as_bytes()).expect("write config");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("config loads from JSON");

    assert_eq!(config.server.bind_address, "0.0.0.0:3000");
    assert_eq!(config.auth.google_client_id, "json-client");
    assert_eq!(config.auth.required_scope, RequiredScope::google_calendar());
    assert_eq!(config.auth.session_ttl_seconds, 3600);
    assert_eq!(config.database.pool_size, 4);
    assert_eq!(config.google_redirect_uri(), "https://call.example.com/api/auth/callback/google");
}

#[test]
fn test_file_missing_credentials_fails_validation() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().expect("temp file");
    write!(
        temp_file,
        r#"
[auth]
google_client_id = ""
google_client_secret = "secret"
"#
    )
    .expect("write config");

    let err = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, IgniteCallError::Config(_)));
}

#[test]
fn test_invalid_public_url_fails() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().expect("temp file");
    write!(
        temp_file,
        r#"
[server]
public_url = "not a url"

[auth]
google_client_id = "id"
google_client_secret = "secret"
"#
    )
    .expect("write config");

    let err = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, IgniteCallError::Config(msg) if msg.contains("public URL")));
}

#[test]
fn test_invalid_json_reports_format() {
    let mut temp_file = Builder::new().suffix(".json").tempfile().expect("temp file");
    temp_file.write_all(b"{ not json").expect("write config");

    let err = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, IgniteCallError::Config(msg) if msg.contains("Invalid JSON")));
}

#[test]
fn test_missing_explicit_file_fails() {
    let err =
        config::load_from_file(Some("/definitely/not/here/config.toml".into())).unwrap_err();
    assert!(matches!(err, IgniteCallError::Config(msg) if msg.contains("not found")));
}
