use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::context::AppContext;

pub async fn health(State(ctx): State<Arc<AppContext>>) -> Response {
    let db = Arc::clone(&ctx.db);
    let healthy = tokio::task::spawn_blocking(move || db.health_check())
        .await
        .is_ok_and(|result| result.is_ok());

    if healthy {
        Json(json!({ "status": "ok" })).into_response()
    } else {
        warn!("health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "unavailable" }))).into_response()
    }
}
