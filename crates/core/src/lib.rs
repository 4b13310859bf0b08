//! # Ignite Call Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The scope-gated sign-in guard
//! - Port/adapter interfaces (traits)
//! - Use cases and services (sign-in, registration)
//!
//! ## Architecture Principles
//! - Only depends on `ignitecall-common` and `ignitecall-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod auth;
pub mod registration;
pub mod user;

pub use auth::{
    AuthorizationCallback, AuthorizationRequest, IdentityProvider, ProviderTokens, ScopeGuard,
    SessionStore, SignInOutcome, SignInService,
};
pub use registration::connect_calendar_status;
pub use user::{RegistrationError, RegistrationService, UserRepository};
