//! PKCE (Proof Key for Code Exchange) for OAuth 2.0
//!
//! RFC 7636 verifier/challenge pairs plus the random CSRF state sent with
//! every authorization request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

const RANDOM_BYTES: usize = 32;

fn random_token() -> String {
    let mut bytes = [0u8; RANDOM_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Generate a code verifier
///
/// 32 random bytes, base64url without padding (43 characters, inside the
/// 43-128 range RFC 7636 allows).
#[must_use]
pub fn generate_code_verifier() -> String {
    random_token()
}

/// BASE64URL(SHA256(verifier))
#[must_use]
pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Generate a random state token for CSRF protection
#[must_use]
pub fn generate_state() -> String {
    random_token()
}

/// Compare state tokens without short-circuiting on the first differing byte
#[must_use]
pub fn validate_state(expected: &str, actual: &str) -> bool {
    let (a, b) = (expected.as_bytes(), actual.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// PKCE challenge pair plus CSRF state for one authorization attempt
#[derive(Debug, Clone)]
pub struct PKCEChallenge {
    /// Kept server-side until token exchange
    pub code_verifier: String,

    /// Sent in the authorization request
    pub code_challenge: String,

    /// Must round-trip through the provider unchanged
    pub state: String,
}

impl PKCEChallenge {
    /// Generate a fresh challenge
    ///
    /// # Examples
    /// ```
    /// use ignitecall_common::auth::pkce::PKCEChallenge;
    ///
    /// let challenge = PKCEChallenge::generate();
    /// assert_eq!(challenge.code_verifier.len(), 43);
    /// ```
    #[must_use]
    pub fn generate() -> Self {
        let code_verifier = generate_code_verifier();
        let code_challenge = generate_code_challenge(&code_verifier);
        Self { code_verifier, code_challenge, state: generate_state() }
    }

    /// Get the challenge method (always "S256")
    #[must_use]
    pub fn challenge_method(&self) -> &'static str {
        "S256"
    }
}
