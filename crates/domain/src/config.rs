//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SESSION_TTL_SECS, GOOGLE_USERINFO_EMAIL_SCOPE, GOOGLE_USERINFO_PROFILE_SCOPE,
    OPENID_SCOPE,
};
use crate::errors::{IgniteCallError, Result};
use crate::types::RequiredScope;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Externally visible base URL, used to build the OAuth redirect URI
    pub public_url: String,
}

/// Google sign-in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub google_client_id: String,
    #[serde(skip_serializing)]
    pub google_client_secret: String,
    /// Scope the sign-in guard insists on
    #[serde(default)]
    pub required_scope: RequiredScope,
    /// Scopes requested on the consent screen; the required scope is added
    /// by [`AuthConfig::requested_scopes`] when missing
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: i64,
    /// Overrides for tests and self-hosted identity providers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

fn default_scopes() -> Vec<String> {
    vec![
        OPENID_SCOPE.to_string(),
        GOOGLE_USERINFO_EMAIL_SCOPE.to_string(),
        GOOGLE_USERINFO_PROFILE_SCOPE.to_string(),
    ]
}

fn default_session_ttl() -> i64 {
    DEFAULT_SESSION_TTL_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3333".to_string(),
            public_url: "http://localhost:3333".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "ignitecall.db".to_string(), pool_size: 8 }
    }
}

impl AuthConfig {
    /// Google credentials with default scopes and the calendar requirement.
    pub fn google(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            google_client_id: client_id.into(),
            google_client_secret: client_secret.into(),
            required_scope: RequiredScope::default(),
            scopes: default_scopes(),
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECS,
            authorization_endpoint: None,
            token_endpoint: None,
        }
    }

    /// Scopes sent on the authorization request, always including the
    /// required scope.
    pub fn requested_scopes(&self) -> Vec<String> {
        let mut scopes = self.scopes.clone();
        if !scopes.iter().any(|scope| scope == self.required_scope.as_str()) {
            scopes.push(self.required_scope.to_string());
        }
        scopes
    }
}

impl Config {
    pub fn new(auth: AuthConfig) -> Self {
        Self { server: ServerConfig::default(), auth, database: DatabaseConfig::default() }
    }

    /// Reject configurations the server must not start with.
    ///
    /// # Errors
    /// Returns `IgniteCallError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.auth.google_client_id.trim().is_empty() {
            return Err(IgniteCallError::Config("Google Client ID is not defined.".to_string()));
        }
        if self.auth.google_client_secret.trim().is_empty() {
            return Err(IgniteCallError::Config(
                "Google Client Secret is not defined.".to_string(),
            ));
        }
        if self.auth.session_ttl_seconds <= 0 {
            return Err(IgniteCallError::Config("session TTL must be positive".to_string()));
        }
        if self.database.pool_size == 0 {
            return Err(IgniteCallError::Config("database pool size must be positive".to_string()));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(IgniteCallError::Config("bind address must not be empty".to_string()));
        }
        Ok(())
    }

    /// OAuth redirect URI registered with Google.
    pub fn google_redirect_uri(&self) -> String {
        format!("{}/api/auth/callback/google", self.server.public_url.trim_end_matches('/'))
    }
}
