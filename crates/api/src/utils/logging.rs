//! Tracing setup and log helpers

use ignitecall_domain::IgniteCallError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the log format (`json` or anything else
/// for human-readable output).
pub const LOG_FORMAT_ENV: &str = "IGNITECALL_LOG_FORMAT";

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()
    };

    if let Err(err) = result {
        tracing::debug!(error = %err, "tracing subscriber already installed");
    }
}

/// Convert an `IgniteCallError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &IgniteCallError) -> &'static str {
    match error {
        IgniteCallError::Database(_) => "database",
        IgniteCallError::Config(_) => "config",
        IgniteCallError::Network(_) => "network",
        IgniteCallError::Auth(_) => "auth",
        IgniteCallError::Security(_) => "security",
        IgniteCallError::NotFound(_) => "not_found",
        IgniteCallError::Conflict(_) => "conflict",
        IgniteCallError::InvalidInput(_) => "invalid_input",
        IgniteCallError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&IgniteCallError::Security("x".into())), "security");
        assert_eq!(error_label(&IgniteCallError::Conflict("x".into())), "conflict");
        assert_eq!(error_label(&IgniteCallError::NotFound("x".into())), "not_found");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
