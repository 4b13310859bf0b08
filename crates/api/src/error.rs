//! HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ignitecall_common::{FieldError, ValidationError};
use ignitecall_core::RegistrationError;
use ignitecall_domain::IgniteCallError;
use serde::Serialize;
use tracing::{error, warn};

use crate::utils::logging::error_label;

/// Error returned by route handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] IgniteCallError),
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Invalid(errors) => Self::Validation(errors),
            RegistrationError::Domain(err) => Self::Domain(err),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

fn status_for(err: &IgniteCallError) -> StatusCode {
    match err {
        IgniteCallError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        IgniteCallError::Auth(_) => StatusCode::UNAUTHORIZED,
        IgniteCallError::Security(_) => StatusCode::FORBIDDEN,
        IgniteCallError::NotFound(_) => StatusCode::NOT_FOUND,
        IgniteCallError::Conflict(_) => StatusCode::CONFLICT,
        IgniteCallError::Network(_) => StatusCode::BAD_GATEWAY,
        IgniteCallError::Database(_) | IgniteCallError::Config(_) | IgniteCallError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn detail(err: &IgniteCallError) -> &str {
    match err {
        IgniteCallError::Database(msg)
        | IgniteCallError::Config(msg)
        | IgniteCallError::Network(msg)
        | IgniteCallError::Auth(msg)
        | IgniteCallError::Security(msg)
        | IgniteCallError::NotFound(msg)
        | IgniteCallError::Conflict(msg)
        | IgniteCallError::InvalidInput(msg)
        | IgniteCallError::Internal(msg) => msg,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(errors) => {
                let message = errors.errors.first().map_or("Validation failed", |e| e.message.as_str());
                let body = ErrorBody { message, errors: Some(&errors.errors) };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::Domain(err) => {
                let status = status_for(err);
                let label = error_label(err);
                // server-side details stay in the log
                let message = if status.is_server_error() {
                    error!(error = %err, error_type = label, "request failed");
                    "Internal server error"
                } else {
                    warn!(error = %err, error_type = label, "request rejected");
                    detail(err)
                };
                (status, Json(ErrorBody { message, errors: None })).into_response()
            }
        }
    }
}
