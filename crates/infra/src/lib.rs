//! # Ignite Call Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment and files)
//! - SQLite persistence for users and linked accounts
//! - In-memory session storage
//! - The Google identity provider
//!
//! ## Architecture
//! - Implements traits defined in `ignitecall-core`
//! - Contains all "impure" code (I/O, network, storage)

pub mod config;
pub mod database;
pub mod errors;
pub mod integrations;
pub mod session;

// Re-export commonly used items
pub use database::{DbManager, SqliteUserRepository};
pub use errors::InfraError;
pub use integrations::GoogleIdentityProvider;
pub use session::InMemorySessionStore;
