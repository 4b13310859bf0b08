//! OAuth 2.0 + PKCE client infrastructure
//!
//! Server-side authorization-code flow used for Google sign-in.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   OAuthClient   │  authorization URL + code exchange
//! └────────┬────────┘
//!          │
//!          ├──► pending handshakes (DashMap keyed by state, TTL)
//!          │
//!          └──► PKCE utilities     (challenge generation)
//! ```
//!
//! # Usage Example
//!
//! ```no_run
//! use ignitecall_common::auth::{OAuthClient, OAuthConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OAuthConfig::new(
//!     "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
//!     "https://oauth2.googleapis.com/token".to_string(),
//!     "client_id".to_string(),
//!     "http://localhost:3333/api/auth/callback/google".to_string(),
//!     vec!["openid".to_string(), "email".to_string()],
//! )
//! .with_client_secret("client_secret");
//!
//! let client = OAuthClient::new(config)?;
//! let (url, state) = client.generate_authorization_url();
//! // redirect the browser to `url`; the callback carries `code` and `state`
//! let tokens = client.exchange_code_for_tokens("code", &state).await?;
//! println!("granted: {:?}", tokens.scope);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod pkce;
pub mod traits;
pub mod types;

pub use client::{OAuthClient, OAuthClientError, DEFAULT_PENDING_TTL};
pub use pkce::{
    generate_code_challenge, generate_code_verifier, generate_state, validate_state,
    PKCEChallenge,
};
pub use traits::OAuthClientTrait;
pub use types::{OAuthConfig, OAuthError, TokenResponse, TokenSet};
