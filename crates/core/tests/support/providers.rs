//! Scripted identity provider
//!
//! Issues states like a real provider and answers code exchanges with a
//! preconfigured scope string and identity.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ignitecall_core::{AuthorizationRequest, IdentityProvider, ProviderTokens};
use ignitecall_domain::{GoogleIdentity, IgniteCallError, Result as DomainResult};

pub const CALENDAR: &str = "https://www.googleapis.com/auth/calendar";
pub const EMAIL: &str = "https://www.googleapis.com/auth/userinfo.email";
pub const PROFILE: &str = "https://www.googleapis.com/auth/userinfo.profile";

#[derive(Clone)]
pub struct MockIdentityProvider {
    scope: Option<String>,
    identity: GoogleIdentity,
    pending: Arc<Mutex<HashSet<String>>>,
    counter: Arc<AtomicUsize>,
    identity_calls: Arc<AtomicUsize>,
}

impl MockIdentityProvider {
    /// Provider that grants `scopes` and identifies as `subject`.
    pub fn granting(scopes: &[&str], subject: &str) -> Self {
        let scope = if scopes.is_empty() { None } else { Some(scopes.join(" ")) };
        Self {
            scope,
            identity: GoogleIdentity {
                subject: subject.to_string(),
                email: Some(format!("{subject}@example.com")),
                name: Some("Test User".to_string()),
                picture: Some("https://example.com/avatar.png".to_string()),
            },
            pending: Arc::new(Mutex::new(HashSet::new())),
            counter: Arc::new(AtomicUsize::new(0)),
            identity_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times identity claims were decoded.
    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    fn provider_id(&self) -> &str {
        "google"
    }

    fn authorization_request(&self) -> DomainResult<AuthorizationRequest> {
        let state = format!("state-{}", self.counter.fetch_add(1, Ordering::SeqCst));
        self.pending.lock().unwrap().insert(state.clone());
        Ok(AuthorizationRequest {
            url: format!("https://accounts.example.com/auth?state={state}"),
            state,
        })
    }

    async fn exchange_code(&self, _code: &str, state: &str) -> DomainResult<ProviderTokens> {
        if !self.pending.lock().unwrap().remove(state) {
            return Err(IgniteCallError::Security("unknown OAuth state".into()));
        }
        Ok(ProviderTokens {
            access_token: "access".to_string(),
            refresh_token: Some("refresh".to_string()),
            id_token: Some("id".to_string()),
            expires_at: Some(4_102_444_800),
            scope: self.scope.clone(),
        })
    }

    fn identity(&self, _tokens: &ProviderTokens) -> DomainResult<GoogleIdentity> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.identity.clone())
    }
}
