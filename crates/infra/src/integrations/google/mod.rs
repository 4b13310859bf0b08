//! Google sign-in integration

mod id_token;
mod provider;

pub use id_token::{decode_id_token_claims, IdTokenClaims};
pub use provider::{GoogleIdentityProvider, GOOGLE_AUTHORIZATION_ENDPOINT, GOOGLE_TOKEN_ENDPOINT};
