//! Username claim and registration

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ignitecall_core::user::claim_username;
use ignitecall_domain::constants::{USER_ID_COOKIE, USER_ID_COOKIE_MAX_AGE_SECS};
use ignitecall_domain::RegisterUserInput;
use serde::{Deserialize, Serialize};

use super::with_cookie;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::cookies::set_cookie;

#[derive(Debug, Deserialize)]
pub struct ClaimUsernameRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct ClaimUsernameResponse {
    pub username: String,
    pub redirect: String,
}

pub async fn claim(Json(request): Json<ClaimUsernameRequest>) -> Result<Response, ApiError> {
    let claimed = claim_username(&request.username)?;
    let body = ClaimUsernameResponse {
        redirect: claimed.register_target().to_uri(),
        username: claimed.as_str().to_string(),
    };
    Ok(Json(body).into_response())
}

pub async fn register(
    State(ctx): State<Arc<AppContext>>,
    Json(input): Json<RegisterUserInput>,
) -> Result<Response, ApiError> {
    let user = ctx.registration.register(input).await?;
    let cookie = set_cookie(USER_ID_COOKIE, &user.id, USER_ID_COOKIE_MAX_AGE_SECS);
    Ok(with_cookie((StatusCode::CREATED, Json(user)).into_response(), cookie))
}
