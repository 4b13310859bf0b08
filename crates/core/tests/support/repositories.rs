//! Mock repository implementations for testing
//!
//! In-memory mocks for the user and session ports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ignitecall_core::{SessionStore, UserRepository};
use ignitecall_domain::{IgniteCallError, LinkedAccount, Result as DomainResult, Session, User};

/// In-memory mock for `UserRepository`.
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<HashMap<String, User>>>,
    accounts: Arc<Mutex<Vec<LinkedAccount>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user directly.
    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().insert(user.id.clone(), user);
        self
    }

    pub fn accounts(&self) -> Vec<LinkedAccount> {
        self.accounts.lock().unwrap().clone()
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

/// Build a user with the given id and username.
pub fn user(id: &str, username: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        name: "Test User".to_string(),
        email: None,
        avatar_url: None,
        created_at: 0,
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.username == user.username) {
            return Err(IgniteCallError::Conflict("Username already taken.".into()));
        }
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().values().find(|u| u.username == username).cloned())
    }

    async fn find_by_provider_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> DomainResult<Option<User>> {
        let user_id = self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.provider == provider && a.provider_account_id == provider_account_id)
            .map(|a| a.user_id.clone());
        Ok(user_id.and_then(|id| self.users.lock().unwrap().get(&id).cloned()))
    }

    async fn link_account(
        &self,
        account: LinkedAccount,
        email: Option<String>,
        avatar_url: Option<String>,
    ) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&account.user_id)
            .ok_or_else(|| IgniteCallError::NotFound(account.user_id.clone()))?;
        if email.is_some() {
            user.email = email;
        }
        if avatar_url.is_some() {
            user.avatar_url = avatar_url;
        }
        let updated = user.clone();

        let mut accounts = self.accounts.lock().unwrap();
        accounts.retain(|a| {
            !(a.provider == account.provider && a.provider_account_id == account.provider_account_id)
        });
        accounts.push(account);
        Ok(updated)
    }
}

/// In-memory mock for `SessionStore`.
#[derive(Default, Clone)]
pub struct MockSessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn create(&self, session: Session) -> DomainResult<()> {
        self.sessions.lock().unwrap().insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, id: &str) -> DomainResult<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(id).filter(|s| !s.is_expired()).cloned())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.sessions.lock().unwrap().remove(id);
        Ok(())
    }
}
