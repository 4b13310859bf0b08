//! Macro for implementing Display and FromStr for code enums
//!
//! Several domain enums have a stable wire representation (query parameter
//! values, URL path segments). This macro keeps the variant ↔ string mapping
//! in one place for both directions.
//!
//! # Example
//!
//! ```rust
//! use ignitecall_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ConsentState {
//!     Granted,
//!     Revoked,
//! }
//!
//! impl_domain_status_conversions!(ConsentState {
//!     Granted => "granted",
//!     Revoked => "revoked",
//! });
//!
//! assert_eq!(ConsentState::Revoked.to_string(), "revoked");
//! assert_eq!("GRANTED".parse::<ConsentState>(), Ok(ConsentState::Granted));
//! ```

/// Implements Display and FromStr traits for code enums
///
/// - Display writes the mapped string verbatim
/// - FromStr matches case-insensitively, so mapped strings must be lowercase
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
