//! Scope-gated sign-in guard
//!
//! Runs once per completed OAuth handshake. The user is allowed through only
//! when the provider reports the required scope among the granted ones;
//! otherwise they are sent back to the connect-calendar step with an error
//! code so the page can explain which permission is missing.
//!
//! The decision is a pure function of its inputs: no I/O, no caching, no
//! memory of earlier denials. A denied user restarts the handshake.

use ignitecall_domain::constants::{AUTH_ERROR_QUERY_PARAM, CONNECT_CALENDAR_PATH};
use ignitecall_domain::{
    AuthorizationGrant, DenialReason, GuardDecision, RedirectTarget, RequiredScope,
};

/// Where a denied sign-in is sent: `/register/connect-calendar/?error=permissions`.
pub fn denial_target() -> RedirectTarget {
    RedirectTarget::new(CONNECT_CALENDAR_PATH)
        .with_query(AUTH_ERROR_QUERY_PARAM, DenialReason::MissingPermissions.to_string())
}

/// Decide whether a sign-in may complete.
///
/// Returns [`GuardDecision::Allow`] iff `required` is an exact member of
/// `grant`. Matching is case-sensitive with no prefix or pattern logic.
pub fn evaluate(grant: &AuthorizationGrant, required: &RequiredScope) -> GuardDecision {
    if grant.contains(required.as_str()) {
        GuardDecision::Allow
    } else {
        GuardDecision::Deny(denial_target())
    }
}

/// [`evaluate`] for providers that may omit the grant entirely.
///
/// An absent grant is the empty grant.
pub fn evaluate_optional(
    grant: Option<&AuthorizationGrant>,
    required: &RequiredScope,
) -> GuardDecision {
    match grant {
        Some(grant) => evaluate(grant, required),
        None => evaluate(&AuthorizationGrant::empty(), required),
    }
}

/// Guard bound to the configured required scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeGuard {
    required: RequiredScope,
}

impl ScopeGuard {
    pub fn new(required: RequiredScope) -> Self {
        Self { required }
    }

    pub fn required(&self) -> &RequiredScope {
        &self.required
    }

    pub fn evaluate(&self, grant: &AuthorizationGrant) -> GuardDecision {
        evaluate(grant, &self.required)
    }
}
