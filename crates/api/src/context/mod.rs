//! Application context - dependency injection container

use std::sync::Arc;

use ignitecall_core::{RegistrationService, ScopeGuard, SignInService};
use ignitecall_domain::{Config, Result};
use ignitecall_infra::{DbManager, GoogleIdentityProvider, InMemorySessionStore, SqliteUserRepository};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub sessions: Arc<InMemorySessionStore>,
    pub sign_in: Arc<SignInService>,
    pub registration: Arc<RegistrationService>,
}

impl AppContext {
    /// Open the database, apply the schema and wire the services.
    ///
    /// # Errors
    /// Fails when the database cannot be opened or migrated, or the Google
    /// client cannot be built from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let users = Arc::new(SqliteUserRepository::new(Arc::clone(&db)));
        let provider = Arc::new(GoogleIdentityProvider::from_config(&config)?);
        let sessions = Arc::new(InMemorySessionStore::new());
        let guard = ScopeGuard::new(config.auth.required_scope.clone());

        let sign_in = Arc::new(SignInService::new(
            provider,
            users.clone(),
            sessions.clone(),
            guard,
            config.auth.session_ttl_seconds,
        ));
        let registration = Arc::new(RegistrationService::new(users));

        info!(
            db_path = %db.path().display(),
            required_scope = %config.auth.required_scope,
            "application context initialised"
        );

        Ok(Self { config, db, sessions, sign_in, registration })
    }
}
