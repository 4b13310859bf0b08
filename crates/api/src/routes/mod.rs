//! HTTP routes

mod auth;
mod health;
mod register;
mod users;

use std::sync::Arc;

use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;

use crate::context::AppContext;

/// Build the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/users", post(users::register))
        .route("/api/users/claim", post(users::claim))
        .route("/api/auth/signin/google", get(auth::sign_in))
        .route("/api/auth/callback/google", get(auth::callback))
        .route("/api/auth/signout", post(auth::sign_out))
        .route("/api/register/connect-calendar", get(register::connect_calendar))
        .with_state(ctx)
}

fn with_cookie(mut response: Response, cookie: Option<HeaderValue>) -> Response {
    if let Some(cookie) = cookie {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    response
}
