//! Port interfaces for sign-in
//!
//! The identity provider and session storage live in infrastructure; the
//! sign-in service only sees these traits.

use async_trait::async_trait;
use ignitecall_domain::{AuthorizationGrant, GoogleIdentity, Result, Session};
use serde::{Deserialize, Serialize};

/// Where to send the browser to start a handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationRequest {
    pub url: String,
    /// CSRF token that must come back on the callback
    pub state: String,
}

/// Query parameters of the provider's redirect back to us.
///
/// On consent the provider sends `code` and `state`; when the user cancels
/// it sends `error` (and usually `state`) instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorizationCallback {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Tokens returned by a successful code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub id_token: Option<String>,
    /// Unix seconds
    pub expires_at: Option<i64>,
    /// Space-separated scopes as reported by the provider
    pub scope: Option<String>,
}

impl ProviderTokens {
    /// Scopes the user actually approved for this attempt.
    pub fn grant(&self) -> AuthorizationGrant {
        AuthorizationGrant::from_scope_string(self.scope.as_deref())
    }
}

/// External OAuth identity provider (Google).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider id stored on linked accounts, e.g. `"google"`
    fn provider_id(&self) -> &str;

    /// Start a handshake.
    fn authorization_request(&self) -> Result<AuthorizationRequest>;

    /// Redeem an authorization code.
    ///
    /// Fails with `Security` when `state` does not match a pending
    /// handshake.
    async fn exchange_code(&self, code: &str, state: &str) -> Result<ProviderTokens>;

    /// Extract identity claims from the tokens.
    fn identity(&self, tokens: &ProviderTokens) -> Result<GoogleIdentity>;
}

/// Storage for signed-in sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: Session) -> Result<()>;

    /// Live session by id; expired sessions are reported as missing.
    async fn get(&self, id: &str) -> Result<Option<Session>>;

    async fn delete(&self, id: &str) -> Result<()>;
}
