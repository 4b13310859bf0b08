//! Minimal cookie helpers
//!
//! Only the two cookies the registration flow uses are read or written, so a
//! full cookie jar is not needed.

use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};

/// Value of the cookie `name` from the request's `Cookie` headers.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value).map_or_else(|_| value.to_string(), |v| v.into_owned())
        })
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value for a cookie on path `/`. The value is percent-encoded.
pub fn set_cookie(name: &str, value: &str, max_age_secs: i64) -> Option<HeaderValue> {
    let header = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        name,
        urlencoding::encode(value),
        max_age_secs
    );
    HeaderValue::from_str(&header).ok()
}

/// `Set-Cookie` value that removes the cookie.
pub fn clear_cookie(name: &str) -> Option<HeaderValue> {
    set_cookie(name, "", 0)
}
