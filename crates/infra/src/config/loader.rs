//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the Google credentials are missing there, falls back to a file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. Environment variables that are set still override the file
//!
//! The result is validated before it is returned, so a process that obtains
//! a `Config` from here can start serving.
//!
//! ## Environment Variables
//! - `GOOGLE_CLIENT_ID`: OAuth client id (required)
//! - `GOOGLE_CLIENT_SECRET`: OAuth client secret (required)
//! - `IGNITECALL_REQUIRED_SCOPE`: Scope the sign-in guard insists on
//! - `IGNITECALL_BIND_ADDR`: Listen address
//! - `IGNITECALL_PUBLIC_URL`: Externally visible base URL
//! - `IGNITECALL_DB_PATH`: Database file path
//! - `IGNITECALL_DB_POOL_SIZE`: Connection pool size
//! - `IGNITECALL_SESSION_TTL`: Session lifetime in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./ignitecall.json` or `./ignitecall.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ignitecall_domain::{AuthConfig, Config, IgniteCallError, RequiredScope, Result};
use url::Url;

const GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
const GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `IgniteCallError::Config` if:
/// - the Google credentials are in neither the environment nor a file
/// - a file exists but cannot be parsed
/// - the loaded configuration fails validation
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(env_err) => {
            tracing::debug!(error = %env_err, "Environment incomplete, trying config file");
            match probe_config_paths() {
                Some(path) => load_file_with_env_overrides(&path),
                None => Err(env_err),
            }
        }
    }
}

/// Load configuration from environment variables
///
/// Only the Google credentials are mandatory; everything else falls back to
/// the defaults documented in the module docs.
///
/// # Errors
/// Returns `IgniteCallError::Config` if a credential is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let client_id = std::env::var(GOOGLE_CLIENT_ID)
        .map_err(|_| IgniteCallError::Config("Google Client ID is not defined.".into()))?;
    let client_secret = std::env::var(GOOGLE_CLIENT_SECRET)
        .map_err(|_| IgniteCallError::Config("Google Client Secret is not defined.".into()))?;

    let mut config = Config::new(AuthConfig::google(client_id, client_secret));
    apply_env_overrides(&mut config)?;
    finish(config)
}

/// File configuration with any set environment variables applied on top.
fn load_file_with_env_overrides(path: &Path) -> Result<Config> {
    let mut config = read_config_file(path)?;
    if let Some(client_id) = env_opt(GOOGLE_CLIENT_ID) {
        config.auth.google_client_id = client_id;
    }
    if let Some(client_secret) = env_opt(GOOGLE_CLIENT_SECRET) {
        config.auth.google_client_secret = client_secret;
    }
    apply_env_overrides(&mut config)?;
    finish(config)
}

/// Apply the optional `IGNITECALL_*` variables to `config`.
fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(scope) = env_opt("IGNITECALL_REQUIRED_SCOPE") {
        config.auth.required_scope = RequiredScope::new(scope)
            .map_err(|e| IgniteCallError::Config(format!("Invalid required scope: {e}")))?;
    }
    if let Some(ttl) = env_parse::<i64>("IGNITECALL_SESSION_TTL")? {
        config.auth.session_ttl_seconds = ttl;
    }
    if let Some(addr) = env_opt("IGNITECALL_BIND_ADDR") {
        config.server.bind_address = addr;
    }
    if let Some(url) = env_opt("IGNITECALL_PUBLIC_URL") {
        config.server.public_url = url;
    }
    if let Some(path) = env_opt("IGNITECALL_DB_PATH") {
        config.database.path = path;
    }
    if let Some(pool_size) = env_parse::<u32>("IGNITECALL_DB_POOL_SIZE")? {
        config.database.pool_size = pool_size;
    }
    Ok(())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `IgniteCallError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(IgniteCallError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            IgniteCallError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    finish(read_config_file(&config_path)?)
}

fn read_config_file(path: &Path) -> Result<Config> {
    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| IgniteCallError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| IgniteCallError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| IgniteCallError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(IgniteCallError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let candidates = [
        cwd.join("config.json"),
        cwd.join("config.toml"),
        cwd.join("ignitecall.json"),
        cwd.join("ignitecall.toml"),
        cwd.join("../config.json"),
        cwd.join("../config.toml"),
        cwd.join("../../config.json"),
        cwd.join("../../config.toml"),
    ];

    candidates.into_iter().find(|path| path.exists())
}

fn finish(config: Config) -> Result<Config> {
    Url::parse(&config.server.public_url).map_err(|e| {
        IgniteCallError::Config(format!("Invalid public URL '{}': {e}", config.server.public_url))
    })?;
    config.validate()?;
    Ok(config)
}

/// Non-empty environment variable
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `IgniteCallError::Config` if the variable is set but invalid.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| IgniteCallError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}
