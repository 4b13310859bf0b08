//! Sign-in session

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session established after a successful, scope-complete sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: String, user_id: String, email: Option<String>, ttl_seconds: i64) -> Self {
        let created_at = Utc::now();
        Self { id, user_id, email, created_at, expires_at: created_at + Duration::seconds(ttl_seconds) }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
