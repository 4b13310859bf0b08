//! Domain types and models

pub mod guard;
pub mod registration;
pub mod scope;
pub mod session;
pub mod user;

pub use guard::{DenialReason, GuardDecision, RedirectTarget};
pub use registration::{ConnectCalendarStatus, RegistrationStep};
pub use scope::{AuthorizationGrant, RequiredScope};
pub use session::Session;
pub use user::{GoogleIdentity, LinkedAccount, RegisterUserInput, User};
