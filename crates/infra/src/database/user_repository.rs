//! User and linked-account repository backed by SQLite

use std::sync::Arc;

use async_trait::async_trait;
use ignitecall_core::user::ports::UserRepository as UserRepositoryPort;
use ignitecall_domain::constants::USERNAME_TAKEN_MESSAGE;
use ignitecall_domain::{IgniteCallError, LinkedAccount, Result as DomainResult, User};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::task;

use super::manager::{map_join_error, map_sql_error, DbManager};

const USER_COLUMNS: &str = "u.id, u.username, u.name, u.email, u.avatar_url, u.created_at";

/// SQLite-backed implementation of `UserRepository`
pub struct SqliteUserRepository {
    db: Arc<DbManager>,
}

impl SqliteUserRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn create(&self, user: User) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO users (id, username, name, email, avatar_url, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    &user.id,
                    &user.username,
                    &user.name,
                    &user.email,
                    &user.avatar_url,
                    user.created_at
                ],
            )
            .map_err(|err| match map_sql_error(err) {
                IgniteCallError::Conflict(_) => {
                    IgniteCallError::Conflict(USERNAME_TAKEN_MESSAGE.to_string())
                }
                other => other,
            })?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<User>> {
            let conn = db.get_connection()?;
            select_user(&conn, "u.id = ?1", &[&id])
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let username = username.to_lowercase();

        task::spawn_blocking(move || -> DomainResult<Option<User>> {
            let conn = db.get_connection()?;
            select_user(&conn, "u.username = ?1", &[&username])
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_provider_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> DomainResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let provider = provider.to_string();
        let provider_account_id = provider_account_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<User>> {
            let conn = db.get_connection()?;
            let sql = format!(
                "SELECT {USER_COLUMNS} FROM users u
                 JOIN accounts a ON a.user_id = u.id
                 WHERE a.provider = ?1 AND a.provider_account_id = ?2"
            );
            conn.query_row(&sql, params![&provider, &provider_account_id], map_user_row)
                .optional()
                .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn link_account(
        &self,
        account: LinkedAccount,
        email: Option<String>,
        avatar_url: Option<String>,
    ) -> DomainResult<User> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<User> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;

            let updated = tx
                .execute(
                    "UPDATE users
                     SET email = COALESCE(?2, email), avatar_url = COALESCE(?3, avatar_url)
                     WHERE id = ?1",
                    params![&account.user_id, &email, &avatar_url],
                )
                .map_err(map_sql_error)?;
            if updated == 0 {
                return Err(IgniteCallError::NotFound(format!(
                    "user {} not found",
                    account.user_id
                )));
            }

            tx.execute(
                "INSERT INTO accounts
                    (user_id, provider, provider_account_id, access_token, refresh_token, expires_at, scope)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT (provider, provider_account_id) DO UPDATE SET
                    user_id = excluded.user_id,
                    access_token = excluded.access_token,
                    refresh_token = COALESCE(excluded.refresh_token, accounts.refresh_token),
                    expires_at = excluded.expires_at,
                    scope = excluded.scope",
                params![
                    &account.user_id,
                    &account.provider,
                    &account.provider_account_id,
                    &account.access_token,
                    &account.refresh_token,
                    account.expires_at,
                    &account.scope
                ],
            )
            .map_err(map_sql_error)?;

            let user = select_user(&tx, "u.id = ?1", &[&account.user_id])?.ok_or_else(|| {
                IgniteCallError::NotFound(format!("user {} not found", account.user_id))
            })?;
            tx.commit().map_err(map_sql_error)?;
            Ok(user)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn select_user(
    conn: &Connection,
    predicate: &str,
    args: &[&dyn rusqlite::ToSql],
) -> DomainResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users u WHERE {predicate}");
    conn.query_row(&sql, args, map_user_row).optional().map_err(map_sql_error)
}

fn map_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        avatar_url: row.get(4)?,
        created_at: row.get(5)?,
    })
}
