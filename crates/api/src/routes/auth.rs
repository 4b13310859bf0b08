//! Google sign-in handshake

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use ignitecall_common::auth::validate_state;
use ignitecall_core::{AuthorizationCallback, SignInOutcome};
use ignitecall_domain::constants::{
    OAUTH_STATE_COOKIE, PENDING_LOGIN_TTL_SECS, SESSION_COOKIE, USER_ID_COOKIE,
};
use ignitecall_domain::IgniteCallError;
use tracing::{debug, warn};

use super::with_cookie;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::cookies::{clear_cookie, read_cookie, set_cookie};

pub async fn sign_in(State(ctx): State<Arc<AppContext>>) -> Result<Response, ApiError> {
    let request = ctx.sign_in.start()?;
    let redirect = Redirect::to(&request.url).into_response();
    let state_cookie = set_cookie(OAUTH_STATE_COOKIE, &request.state, PENDING_LOGIN_TTL_SECS);
    Ok(with_cookie(redirect, state_cookie))
}

/// The callback must come from the browser that started the handshake.
fn check_state_cookie(headers: &HeaderMap, callback: &AuthorizationCallback) -> Result<(), ApiError> {
    let issued = read_cookie(headers, OAUTH_STATE_COOKIE);
    match (issued.as_deref(), callback.state.as_deref()) {
        (Some(issued), Some(returned)) if validate_state(issued, returned) => Ok(()),
        (issued, _) => {
            warn!(has_state_cookie = issued.is_some(), "callback state does not match this browser");
            Err(IgniteCallError::Security("OAuth state does not match this browser".into()).into())
        }
    }
}

/// The state cookie is single use: it is cleared on every callback response.
pub async fn callback(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    Query(callback): Query<AuthorizationCallback>,
) -> Response {
    let response = complete_sign_in(&ctx, &headers, &callback)
        .await
        .unwrap_or_else(IntoResponse::into_response);
    with_cookie(response, clear_cookie(OAUTH_STATE_COOKIE))
}

async fn complete_sign_in(
    ctx: &AppContext,
    headers: &HeaderMap,
    callback: &AuthorizationCallback,
) -> Result<Response, ApiError> {
    // checked before any code reaches the token endpoint
    if callback.code.is_some() {
        check_state_cookie(headers, callback)?;
    }

    let registered_user_id = read_cookie(headers, USER_ID_COOKIE);
    let outcome = ctx.sign_in.complete(callback, registered_user_id.as_deref()).await?;

    let redirect = Redirect::to(&outcome.redirect_target().to_uri()).into_response();
    let cookie = match &outcome {
        SignInOutcome::SignedIn { session, .. } => {
            set_cookie(SESSION_COOKIE, &session.id, ctx.config.auth.session_ttl_seconds)
        }
        SignInOutcome::Denied(_) | SignInOutcome::Unregistered => None,
    };
    Ok(with_cookie(redirect, cookie))
}

pub async fn sign_out(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if let Some(session_id) = read_cookie(&headers, SESSION_COOKIE) {
        ctx.sign_in.sign_out(&session_id).await?;
    } else {
        debug!("sign-out without a session cookie");
    }
    Ok(with_cookie(StatusCode::NO_CONTENT.into_response(), clear_cookie(SESSION_COOKIE)))
}
