//! Port interfaces for user management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for user persistence.

use async_trait::async_trait;
use ignitecall_domain::{LinkedAccount, Result, User};

/// Trait for user persistence and retrieval
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user.
    ///
    /// Fails with `Conflict` when the username is already taken.
    async fn create(&self, user: User) -> Result<()>;

    /// Get user by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Get user by (lowercase) username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Get the user a provider account is linked to
    async fn find_by_provider_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> Result<Option<User>>;

    /// Link (or re-link) a provider account to `account.user_id` and copy the
    /// provider's email and avatar onto the user when present.
    ///
    /// Returns the updated user; `NotFound` if the user does not exist.
    async fn link_account(
        &self,
        account: LinkedAccount,
        email: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<User>;
}
