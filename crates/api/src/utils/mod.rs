//! Utility helpers for the HTTP layer

pub mod cookies;
pub mod logging;
