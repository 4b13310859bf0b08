//! Sign-in service - core business logic
//!
//! Orchestrates the provider handshake around the scope guard:
//! exchange code → build grant → guard → link account → open session.

use std::sync::Arc;

use ignitecall_domain::{
    GuardDecision, IgniteCallError, LinkedAccount, RedirectTarget, RegistrationStep, Result,
    Session, User,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::guard::{denial_target, ScopeGuard};
use super::ports::{AuthorizationCallback, AuthorizationRequest, IdentityProvider, SessionStore};
use crate::user::ports::UserRepository;

/// Result of a completed handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The guard rejected the grant (or the user cancelled at the provider).
    Denied(RedirectTarget),
    /// Scopes are fine but no registered user matches this Google account.
    Unregistered,
    /// Account linked and session opened.
    SignedIn { session: Session, user: User },
}

impl SignInOutcome {
    /// Where the browser goes next.
    pub fn redirect_target(&self) -> RedirectTarget {
        match self {
            Self::Denied(target) => target.clone(),
            Self::Unregistered => RedirectTarget::new(RegistrationStep::Register.path()),
            Self::SignedIn { .. } => RedirectTarget::new(RegistrationStep::ConnectCalendar.path()),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn { session, .. } => Some(session),
            _ => None,
        }
    }
}

/// Sign-in service
pub struct SignInService {
    provider: Arc<dyn IdentityProvider>,
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
    guard: ScopeGuard,
    session_ttl_seconds: i64,
}

impl SignInService {
    /// Create a new sign-in service
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionStore>,
        guard: ScopeGuard,
        session_ttl_seconds: i64,
    ) -> Self {
        Self { provider, users, sessions, guard, session_ttl_seconds }
    }

    pub fn guard(&self) -> &ScopeGuard {
        &self.guard
    }

    /// Begin a handshake with the provider.
    pub fn start(&self) -> Result<AuthorizationRequest> {
        let request = self.provider.authorization_request()?;
        debug!(provider = self.provider.provider_id(), "sign-in started");
        Ok(request)
    }

    /// Finish a handshake.
    ///
    /// `registered_user_id` is the user-id cookie set at registration, used
    /// to attach a first-time Google account to the right user.
    ///
    /// # Errors
    /// - `InvalidInput` when the callback carries neither `error` nor both
    ///   `code` and `state`
    /// - `Security` when the state does not match a pending handshake
    /// - provider, repository or session-store failures
    pub async fn complete(
        &self,
        callback: &AuthorizationCallback,
        registered_user_id: Option<&str>,
    ) -> Result<SignInOutcome> {
        if let Some(error) = callback.error.as_deref() {
            info!(provider_error = error, "provider reported an authorization error");
            return Ok(SignInOutcome::Denied(denial_target()));
        }

        let (Some(code), Some(state)) = (callback.code.as_deref(), callback.state.as_deref())
        else {
            return Err(IgniteCallError::InvalidInput(
                "authorization callback is missing code or state".to_string(),
            ));
        };

        let tokens = self.provider.exchange_code(code, state).await?;
        let grant = tokens.grant();

        if let GuardDecision::Deny(target) = self.guard.evaluate(&grant) {
            info!(
                required = %self.guard.required(),
                granted = grant.len(),
                "sign-in denied: required scope not granted"
            );
            return Ok(SignInOutcome::Denied(target));
        }

        let identity = self.provider.identity(&tokens)?;
        let provider = self.provider.provider_id();

        let user = match self.find_user(registered_user_id, provider, &identity.subject).await? {
            Some(user) => user,
            None => {
                warn!(provider, "sign-in for an account with no registered user");
                return Ok(SignInOutcome::Unregistered);
            }
        };

        let account = LinkedAccount {
            user_id: user.id.clone(),
            provider: provider.to_string(),
            provider_account_id: identity.subject.clone(),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_at: tokens.expires_at,
            scope: tokens.scope,
        };
        let user = self.users.link_account(account, identity.email, identity.picture).await?;

        let session = Session::new(
            Uuid::new_v4().to_string(),
            user.id.clone(),
            user.email.clone(),
            self.session_ttl_seconds,
        );
        self.sessions.create(session.clone()).await?;

        info!(user_id = %user.id, "sign-in completed");
        Ok(SignInOutcome::SignedIn { session, user })
    }

    /// Look up a live session.
    pub async fn session(&self, session_id: &str) -> Result<Option<Session>> {
        self.sessions.get(session_id).await
    }

    /// End a session. Unknown ids are ignored.
    pub async fn sign_out(&self, session_id: &str) -> Result<()> {
        self.sessions.delete(session_id).await?;
        debug!("session closed");
        Ok(())
    }

    async fn find_user(
        &self,
        registered_user_id: Option<&str>,
        provider: &str,
        subject: &str,
    ) -> Result<Option<User>> {
        if let Some(id) = registered_user_id {
            if let Some(user) = self.users.find_by_id(id).await? {
                return Ok(Some(user));
            }
            debug!(user_id = id, "user-id cookie refers to an unknown user");
        }
        self.users.find_by_provider_account(provider, subject).await
    }
}
