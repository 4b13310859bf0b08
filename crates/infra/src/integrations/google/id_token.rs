//! ID token claim decoding
//!
//! The token arrives straight from Google's token endpoint over TLS, so only
//! the payload is decoded; the signature is not checked.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use ignitecall_domain::{GoogleIdentity, IgniteCallError, Result};
use serde::Deserialize;

/// Subset of the OpenID Connect claims Google puts in the ID token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl From<IdTokenClaims> for GoogleIdentity {
    fn from(claims: IdTokenClaims) -> Self {
        GoogleIdentity {
            subject: claims.sub,
            email: claims.email,
            name: claims.name,
            picture: claims.picture,
        }
    }
}

/// Decode the payload segment of a compact JWT.
pub fn decode_id_token_claims(id_token: &str) -> Result<IdTokenClaims> {
    let parts: Vec<&str> = id_token.split('.').collect();
    if parts.len() != 3 {
        return Err(IgniteCallError::Auth("malformed id_token".into()));
    }

    // tolerate padded payloads
    let payload = parts[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| IgniteCallError::Auth(format!("id_token payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| IgniteCallError::Auth(format!("id_token claims are invalid: {e}")))
}

#[cfg(test)]
pub(crate) fn encode_test_id_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}
