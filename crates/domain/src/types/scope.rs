//! OAuth scope types
//!
//! Scopes are opaque identifiers (for Google they are URIs such as
//! `https://www.googleapis.com/auth/calendar`). They are compared by exact
//! string equality; no prefix or case-insensitive matching is ever applied.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::GOOGLE_CALENDAR_SCOPE;
use crate::errors::{IgniteCallError, Result};

/// A scope the application requires before a sign-in may complete.
///
/// Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RequiredScope(String);

impl RequiredScope {
    /// Create a required scope, rejecting empty or whitespace-only input.
    pub fn new(scope: impl Into<String>) -> Result<Self> {
        let scope = scope.into();
        if scope.trim().is_empty() {
            return Err(IgniteCallError::InvalidInput(
                "required scope must not be empty".to_string(),
            ));
        }
        Ok(Self(scope))
    }

    /// The Google Calendar read/write scope.
    pub fn google_calendar() -> Self {
        Self(GOOGLE_CALENDAR_SCOPE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequiredScope {
    fn default() -> Self {
        Self::google_calendar()
    }
}

impl TryFrom<String> for RequiredScope {
    type Error = IgniteCallError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RequiredScope> for String {
    fn from(value: RequiredScope) -> Self {
        value.0
    }
}

impl fmt::Display for RequiredScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scopes an identity provider reported as approved for one sign-in attempt.
///
/// Order and duplicates carry no meaning, so the scopes are kept in a set.
/// An absent grant is represented by the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationGrant {
    scopes: BTreeSet<String>,
}

impl AuthorizationGrant {
    pub fn new<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { scopes: scopes.into_iter().map(Into::into).collect() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the `scope` field of an OAuth token response.
    ///
    /// The field is a whitespace-separated list (RFC 6749 §3.3). A missing
    /// field yields an empty grant.
    pub fn from_scope_string(raw: Option<&str>) -> Self {
        raw.map(|value| Self::new(value.split_whitespace())).unwrap_or_default()
    }

    /// Exact membership test.
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Space-separated form, suitable for persisting alongside tokens.
    pub fn to_scope_string(&self) -> String {
        self.scopes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for AuthorizationGrant {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Option<&str>> for AuthorizationGrant {
    fn from(raw: Option<&str>) -> Self {
        Self::from_scope_string(raw)
    }
}
