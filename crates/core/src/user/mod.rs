//! Username claim and user registration

pub mod ports;
pub mod service;
pub mod validation;

use ignitecall_common::ValidationError;
use ignitecall_domain::IgniteCallError;

pub use ports::UserRepository;
pub use service::RegistrationService;
pub use validation::{claim_username, validate_registration, ClaimedUsername};

/// Failure of a registration-flow operation.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// Form input broke one or more field rules
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] IgniteCallError),
}
