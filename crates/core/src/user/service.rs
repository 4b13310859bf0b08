//! Registration service - creates users from the registration form

use std::sync::Arc;

use chrono::Utc;
use ignitecall_domain::constants::USERNAME_TAKEN_MESSAGE;
use ignitecall_domain::{IgniteCallError, RegisterUserInput, User};
use tracing::{info, warn};
use uuid::Uuid;

use super::ports::UserRepository;
use super::validation::validate_registration;
use super::RegistrationError;

/// Registration service
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
}

impl RegistrationService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Validate and persist a new user.
    ///
    /// # Errors
    /// - `Invalid` when the form breaks a field rule
    /// - `Domain(Conflict)` with "Username already taken." for duplicates
    pub async fn register(&self, input: RegisterUserInput) -> Result<User, RegistrationError> {
        let input = validate_registration(&input)?;

        if self.users.find_by_username(&input.username).await?.is_some() {
            warn!(username = %input.username, "registration rejected: username taken");
            return Err(IgniteCallError::Conflict(USERNAME_TAKEN_MESSAGE.to_string()).into());
        }

        let user = User {
            id: Uuid::now_v7().to_string(),
            username: input.username,
            name: input.name,
            email: None,
            avatar_url: None,
            created_at: Utc::now().timestamp(),
        };

        // the repository enforces uniqueness too; a concurrent insert surfaces as Conflict
        self.users.create(user.clone()).await?;
        info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn find(&self, user_id: &str) -> Result<Option<User>, RegistrationError> {
        Ok(self.users.find_by_id(user_id).await?)
    }
}
