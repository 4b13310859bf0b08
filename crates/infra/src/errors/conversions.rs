//! Conversions from external infrastructure errors into domain errors.

use ignitecall_common::auth::OAuthClientError;
use ignitecall_domain::IgniteCallError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub IgniteCallError);

impl From<InfraError> for IgniteCallError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<IgniteCallError> for InfraError {
    fn from(value: IgniteCallError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoIgniteCallError {
    fn into_domain(self) -> IgniteCallError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → IgniteCallError */
/* -------------------------------------------------------------------------- */

// SQLITE_CONSTRAINT_UNIQUE / SQLITE_CONSTRAINT_PRIMARYKEY
const CONSTRAINT_UNIQUE: i32 = 2067;
const CONSTRAINT_PRIMARYKEY: i32 = 1555;
const CONSTRAINT_FOREIGNKEY: i32 = 787;

impl IntoIgniteCallError for SqlError {
    fn into_domain(self) -> IgniteCallError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        IgniteCallError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        IgniteCallError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, CONSTRAINT_UNIQUE | CONSTRAINT_PRIMARYKEY) => {
                        IgniteCallError::Conflict(format!("unique constraint violation: {message}"))
                    }
                    (ErrorCode::ConstraintViolation, CONSTRAINT_FOREIGNKEY) => {
                        IgniteCallError::Database("foreign key constraint violation".into())
                    }
                    _ => IgniteCallError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => IgniteCallError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                IgniteCallError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                IgniteCallError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => IgniteCallError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => IgniteCallError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → IgniteCallError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(IgniteCallError::Database(format!("connection pool: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → IgniteCallError */
/* -------------------------------------------------------------------------- */

impl From<tokio::task::JoinError> for InfraError {
    fn from(value: tokio::task::JoinError) -> Self {
        InfraError(IgniteCallError::Internal(format!("blocking task failed: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → IgniteCallError */
/* -------------------------------------------------------------------------- */

impl IntoIgniteCallError for HttpError {
    fn into_domain(self) -> IgniteCallError {
        if self.is_timeout() {
            return IgniteCallError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return IgniteCallError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => IgniteCallError::Auth(message),
                404 => IgniteCallError::NotFound(message),
                400..=499 => IgniteCallError::InvalidInput(message),
                _ => IgniteCallError::Network(message),
            };
        }

        IgniteCallError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* OAuthClientError → IgniteCallError */
/* -------------------------------------------------------------------------- */

impl IntoIgniteCallError for OAuthClientError {
    fn into_domain(self) -> IgniteCallError {
        match self {
            OAuthClientError::RequestFailed(err) => err.into_domain(),
            OAuthClientError::OAuthError(err) => {
                IgniteCallError::Auth(format!("token exchange rejected: {err}"))
            }
            OAuthClientError::StateMismatch { .. } => {
                IgniteCallError::Security("OAuth state does not match a pending sign-in".into())
            }
            OAuthClientError::Expired => {
                IgniteCallError::Security("OAuth sign-in request expired".into())
            }
            OAuthClientError::ParseError(msg) => {
                IgniteCallError::Network(format!("invalid token response: {msg}"))
            }
            OAuthClientError::ConfigError(msg) => IgniteCallError::Config(msg),
        }
    }
}

impl From<OAuthClientError> for InfraError {
    fn from(value: OAuthClientError) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
