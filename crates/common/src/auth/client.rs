//! OAuth 2.0 client implementation with PKCE support
//!
//! Handles the server-side authorization-code flow:
//! - PKCE challenge generation
//! - Authorization URL building
//! - Authorization code exchange
//!
//! Several handshakes may be in flight at once (one per browser), so pending
//! challenges are keyed by their state token and expire after a TTL.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::Client;
use tracing::{debug, warn};

use super::pkce::PKCEChallenge;
use super::traits::OAuthClientTrait;
use super::types::{OAuthConfig, OAuthError, TokenResponse, TokenSet};

/// Default lifetime of a pending handshake
pub const DEFAULT_PENDING_TTL: Duration = Duration::from_secs(600);

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for OAuth client operations
#[derive(Debug, thiserror::Error)]
pub enum OAuthClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// OAuth server returned an error
    #[error("OAuth error: {0}")]
    OAuthError(OAuthError),

    /// State does not belong to any pending handshake (CSRF or replay)
    #[error("State mismatch (CSRF): no pending authorization for state {received}")]
    StateMismatch { received: String },

    /// The handshake was started too long ago
    #[error("Authorization request expired")]
    Expired,

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[derive(Debug, Clone)]
struct PendingAuthorization {
    challenge: PKCEChallenge,
    created_at: Instant,
}

/// OAuth 2.0 client with PKCE support
///
/// Implements RFC 6749 (OAuth 2.0) and RFC 7636 (PKCE). Cloning shares the
/// pending-handshake table.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    config: OAuthConfig,
    client: Client,
    pending: Arc<DashMap<String, PendingAuthorization>>,
    pending_ttl: Duration,
}

impl OAuthClient {
    /// Create a new OAuth client with the given configuration
    ///
    /// # Errors
    /// Returns `ConfigError` when the configuration lacks a client id or
    /// endpoints, or when the HTTP client cannot be built.
    ///
    /// # Examples
    /// ```
    /// use ignitecall_common::auth::{OAuthClient, OAuthConfig};
    ///
    /// let config = OAuthConfig::new(
    ///     "https://accounts.example.com/auth".to_string(),
    ///     "https://accounts.example.com/token".to_string(),
    ///     "client_id".to_string(),
    ///     "http://localhost:3333/callback".to_string(),
    ///     vec!["openid".to_string()],
    /// );
    /// let client = OAuthClient::new(config).unwrap();
    /// assert_eq!(client.redirect_uri(), "http://localhost:3333/callback");
    /// ```
    pub fn new(config: OAuthConfig) -> Result<Self, OAuthClientError> {
        if config.client_id.trim().is_empty() {
            return Err(OAuthClientError::ConfigError("client_id is empty".to_string()));
        }
        if config.authorization_endpoint.is_empty() || config.token_endpoint.is_empty() {
            return Err(OAuthClientError::ConfigError("OAuth endpoints are not set".to_string()));
        }

        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| OAuthClientError::ConfigError(e.to_string()))?;

        Ok(Self {
            config,
            client,
            pending: Arc::new(DashMap::new()),
            pending_ttl: DEFAULT_PENDING_TTL,
        })
    }

    /// Override how long a started handshake stays valid
    #[must_use]
    pub fn with_pending_ttl(mut self, ttl: Duration) -> Self {
        self.pending_ttl = ttl;
        self
    }

    /// Generate authorization URL for browser-based login
    ///
    /// # Returns
    /// Tuple of (authorization_url, state); the state comes back on the
    /// redirect and selects the stored PKCE verifier.
    pub fn generate_authorization_url(&self) -> (String, String) {
        self.prune_expired();

        let challenge = PKCEChallenge::generate();
        let state = challenge.state.clone();

        let mut params = vec![
            ("response_type".to_string(), "code".to_string()),
            ("client_id".to_string(), self.config.client_id.clone()),
            ("redirect_uri".to_string(), self.config.redirect_uri.clone()),
            ("scope".to_string(), self.config.scope_string()),
            ("state".to_string(), state.clone()),
            ("code_challenge".to_string(), challenge.code_challenge.clone()),
            ("code_challenge_method".to_string(), challenge.challenge_method().to_string()),
        ];
        params.extend(self.config.extra_authorize_params.iter().cloned());

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if self.config.authorization_endpoint.contains('?') { '&' } else { '?' };
        let url = format!("{}{separator}{query_string}", self.config.authorization_endpoint);

        self.pending
            .insert(state.clone(), PendingAuthorization { challenge, created_at: Instant::now() });
        debug!(pending = self.pending.len(), "authorization request created");

        (url, state)
    }

    /// Exchange authorization code for tokens
    ///
    /// The pending handshake is consumed whether or not the exchange
    /// succeeds, so a state can be used at most once.
    ///
    /// # Errors
    /// Returns error if:
    /// - the state matches no pending handshake (`StateMismatch`)
    /// - the handshake is older than the TTL (`Expired`)
    /// - the token endpoint rejects the code or answers with garbage
    pub async fn exchange_code_for_tokens(
        &self,
        code: &str,
        state: &str,
    ) -> Result<TokenSet, OAuthClientError> {
        let (_, pending) = self
            .pending
            .remove(state)
            .ok_or_else(|| OAuthClientError::StateMismatch { received: state.to_string() })?;

        if pending.created_at.elapsed() > self.pending_ttl {
            warn!("authorization callback arrived after the pending request expired");
            return Err(OAuthClientError::Expired);
        }

        let mut request_body = vec![
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("client_id".to_string(), self.config.client_id.clone()),
            ("code".to_string(), code.to_string()),
            ("redirect_uri".to_string(), self.config.redirect_uri.clone()),
            ("code_verifier".to_string(), pending.challenge.code_verifier),
        ];

        if let Some(secret) = self.config.client_secret() {
            request_body.push(("client_secret".to_string(), secret.to_string()));
        }

        let response =
            self.client.post(&self.config.token_endpoint).form(&request_body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error: OAuthError = response.json().await.map_err(|e| {
                OAuthClientError::ParseError(format!("token endpoint returned {status}: {e}"))
            })?;
            return Err(OAuthClientError::OAuthError(error));
        }

        let token_response: TokenResponse =
            response.json().await.map_err(|e| OAuthClientError::ParseError(e.to_string()))?;

        Ok(token_response.into())
    }

    /// Number of handshakes waiting for their callback
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Get the configured redirect URI
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.config.redirect_uri
    }

    /// Get a reference to the OAuth configuration
    #[must_use]
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    fn prune_expired(&self) {
        let ttl = self.pending_ttl;
        self.pending.retain(|_, pending| pending.created_at.elapsed() <= ttl);
    }
}

#[async_trait]
impl OAuthClientTrait for OAuthClient {
    fn generate_authorization_url(&self) -> (String, String) {
        self.generate_authorization_url()
    }

    async fn exchange_code_for_tokens(
        &self,
        code: &str,
        state: &str,
    ) -> Result<TokenSet, OAuthClientError> {
        self.exchange_code_for_tokens(code, state).await
    }

    fn redirect_uri(&self) -> &str {
        self.redirect_uri()
    }
}
