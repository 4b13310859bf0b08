//! User and linked-account types

use serde::{Deserialize, Serialize};

/// A registered Ignite Call user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Public handle (`ignite.com/<username>`), always lowercase
    pub username: String,
    pub name: String,
    /// Filled in once the Google account is linked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Unix seconds
    pub created_at: i64,
}

/// Raw registration form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserInput {
    pub username: String,
    pub name: String,
}

/// Identity claims taken from the provider's ID token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleIdentity {
    /// Stable provider account id (`sub` claim)
    pub subject: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// OAuth account linked to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAccount {
    pub user_id: String,
    pub provider: String,
    pub provider_account_id: String,
    #[serde(skip_serializing)]
    pub access_token: String,
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    /// Unix seconds
    pub expires_at: Option<i64>,
    /// Space-separated granted scopes
    pub scope: Option<String>,
}
