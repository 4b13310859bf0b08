//! Traits for OAuth operations
//!
//! Lets identity providers depend on an abstract client so they can be
//! tested without an authorization server.

use async_trait::async_trait;

use super::client::OAuthClientError;
use super::types::TokenSet;

/// Trait for OAuth client operations
#[async_trait]
pub trait OAuthClientTrait: Send + Sync {
    /// Build an authorization URL and remember its PKCE verifier
    ///
    /// # Returns
    /// Tuple of (authorization_url, state)
    fn generate_authorization_url(&self) -> (String, String);

    /// Exchange authorization code for tokens
    ///
    /// # Errors
    /// Returns error if the state is unknown or expired, the token exchange
    /// fails, or the response cannot be parsed
    async fn exchange_code_for_tokens(
        &self,
        code: &str,
        state: &str,
    ) -> Result<TokenSet, OAuthClientError>;

    /// Get the configured redirect URI
    fn redirect_uri(&self) -> &str;
}
