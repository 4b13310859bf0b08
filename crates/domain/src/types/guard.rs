//! Sign-in guard decision types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Stable error code attached to a denial redirect.
///
/// The presentation layer keys its messaging off this value, so the string
/// form must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    MissingPermissions,
}

impl_domain_status_conversions!(DenialReason {
    MissingPermissions => "permissions",
});

/// Destination path plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectTarget {
    path: String,
    query: Vec<(String, String)>,
}

impl RedirectTarget {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), query: Vec::new() }
    }

    /// Append a query parameter. Parameters render in insertion order.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// First value recorded for `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Render as a relative URI (`/path?k=v&k2=v2`), percent-encoding keys
    /// and values.
    pub fn to_uri(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.path, query)
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

/// Outcome of the sign-in guard.
///
/// Recomputed for every handshake and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "redirect", rename_all = "snake_case")]
pub enum GuardDecision {
    /// The sign-in may complete.
    Allow,
    /// The user must be sent to `RedirectTarget` instead.
    Deny(RedirectTarget),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn redirect_target(&self) -> Option<&RedirectTarget> {
        match self {
            Self::Allow => None,
            Self::Deny(target) => Some(target),
        }
    }
}
