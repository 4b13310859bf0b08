//! Registration wizard steps

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use ignitecall_core::connect_calendar_status;
use ignitecall_domain::constants::SESSION_COOKIE;
use ignitecall_domain::ConnectCalendarStatus;
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::cookies::read_cookie;

#[derive(Debug, Default, Deserialize)]
pub struct ConnectCalendarQuery {
    pub error: Option<String>,
}

pub async fn connect_calendar(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    Query(query): Query<ConnectCalendarQuery>,
) -> Result<Json<ConnectCalendarStatus>, ApiError> {
    let signed_in = match read_cookie(&headers, SESSION_COOKIE) {
        Some(session_id) => ctx.sign_in.session(&session_id).await?.is_some(),
        None => false,
    };
    Ok(Json(connect_calendar_status(signed_in, query.error.as_deref())))
}
