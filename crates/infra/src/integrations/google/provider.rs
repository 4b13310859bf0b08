//! Google implementation of the identity provider port

use std::sync::Arc;

use async_trait::async_trait;
use ignitecall_common::auth::{OAuthClient, OAuthClientTrait, OAuthConfig, TokenSet};
use ignitecall_core::auth::ports::{AuthorizationRequest, IdentityProvider, ProviderTokens};
use ignitecall_domain::constants::GOOGLE_PROVIDER_ID;
use ignitecall_domain::{Config, GoogleIdentity, IgniteCallError, Result};
use tracing::debug;

use super::id_token::decode_id_token_claims;
use crate::errors::InfraError;

pub const GOOGLE_AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Google OAuth provider
///
/// Requests offline access with forced consent so every sign-in reports the
/// scopes the user approved on that attempt.
pub struct GoogleIdentityProvider {
    client: Arc<dyn OAuthClientTrait>,
}

impl GoogleIdentityProvider {
    /// Build the provider from application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let auth = &config.auth;
        let oauth = OAuthConfig::new(
            auth.authorization_endpoint
                .clone()
                .unwrap_or_else(|| GOOGLE_AUTHORIZATION_ENDPOINT.to_string()),
            auth.token_endpoint.clone().unwrap_or_else(|| GOOGLE_TOKEN_ENDPOINT.to_string()),
            auth.google_client_id.clone(),
            config.google_redirect_uri(),
            auth.requested_scopes(),
        )
        .with_client_secret(auth.google_client_secret.clone())
        .with_authorize_param("access_type", "offline")
        .with_authorize_param("prompt", "consent");

        let client = OAuthClient::new(oauth).map_err(|e| IgniteCallError::from(InfraError::from(e)))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Use an existing OAuth client.
    pub fn with_client(client: Arc<dyn OAuthClientTrait>) -> Self {
        Self { client }
    }
}

fn provider_tokens(tokens: TokenSet) -> ProviderTokens {
    ProviderTokens {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        id_token: tokens.id_token,
        expires_at: tokens.expires_at.map(|at| at.timestamp()),
        scope: tokens.scope,
    }
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    fn provider_id(&self) -> &str {
        GOOGLE_PROVIDER_ID
    }

    fn authorization_request(&self) -> Result<AuthorizationRequest> {
        let (url, state) = self.client.generate_authorization_url();
        Ok(AuthorizationRequest { url, state })
    }

    async fn exchange_code(&self, code: &str, state: &str) -> Result<ProviderTokens> {
        let tokens = self
            .client
            .exchange_code_for_tokens(code, state)
            .await
            .map_err(|e| IgniteCallError::from(InfraError::from(e)))?;
        debug!(has_refresh_token = tokens.refresh_token.is_some(), "google code exchanged");
        Ok(provider_tokens(tokens))
    }

    fn identity(&self, tokens: &ProviderTokens) -> Result<GoogleIdentity> {
        let id_token = tokens
            .id_token
            .as_deref()
            .ok_or_else(|| IgniteCallError::Auth("token response has no id_token".into()))?;
        Ok(decode_id_token_claims(id_token)?.into())
    }
}

#[cfg(test)]
mod tests {
    use ignitecall_domain::AuthConfig;
    use serde_json::json;
    use url::Url;

    use super::super::id_token::encode_test_id_token;
    use super::*;

    fn config() -> Config {
        Config::new(AuthConfig::google("client-id", "client-secret"))
    }

    #[test]
    fn authorization_url_targets_google_with_offline_consent() {
        let provider = GoogleIdentityProvider::from_config(&config()).unwrap();
        let request = provider.authorization_request().unwrap();

        let url = Url::parse(&request.url).unwrap();
        assert_eq!(url.host_str(), Some("accounts.google.com"));
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let get = |key: &str| query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

        assert_eq!(get("client_id"), Some("client-id"));
        assert_eq!(get("access_type"), Some("offline"));
        assert_eq!(get("prompt"), Some("consent"));
        assert_eq!(get("state"), Some(request.state.as_str()));
        assert!(get("scope").unwrap().contains("https://www.googleapis.com/auth/calendar"));
        assert_eq!(get("redirect_uri"), Some(config().google_redirect_uri().as_str()));
    }

    #[test]
    fn identity_requires_id_token() {
        let provider = GoogleIdentityProvider::from_config(&config()).unwrap();
        let mut tokens = ProviderTokens {
            access_token: "a".into(),
            refresh_token: None,
            id_token: None,
            expires_at: None,
            scope: None,
        };
        assert!(matches!(provider.identity(&tokens), Err(IgniteCallError::Auth(_))));

        tokens.id_token = Some(encode_test_id_token(&json!({ "sub": "g-1" })));
        assert_eq!(provider.identity(&tokens).unwrap().subject, "g-1");
    }

    #[tokio::test]
    async fn unknown_state_is_a_security_error() {
        let provider = GoogleIdentityProvider::from_config(&config()).unwrap();
        let err = provider.exchange_code("code", "never-issued").await.unwrap_err();
        assert!(matches!(err, IgniteCallError::Security(_)));
    }
}
