//! # Ignite Call
//!
//! HTTP surface of the registration and Google sign-in flow.

pub mod context;
pub mod error;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use error::ApiError;
pub use routes::router;
