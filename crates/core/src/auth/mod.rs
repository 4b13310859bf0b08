//! Sign-in: scope guard, ports and orchestration

pub mod guard;
pub mod ports;
pub mod service;

pub use guard::{denial_target, evaluate, evaluate_optional, ScopeGuard};
pub use ports::{
    AuthorizationCallback, AuthorizationRequest, IdentityProvider, ProviderTokens, SessionStore,
};
pub use service::{SignInOutcome, SignInService};
