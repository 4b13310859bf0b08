//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// OAuth scopes
pub const GOOGLE_CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";
pub const GOOGLE_USERINFO_EMAIL_SCOPE: &str = "https://www.googleapis.com/auth/userinfo.email";
pub const GOOGLE_USERINFO_PROFILE_SCOPE: &str = "https://www.googleapis.com/auth/userinfo.profile";
pub const OPENID_SCOPE: &str = "openid";
pub const GOOGLE_PROVIDER_ID: &str = "google";

// Registration flow routes
pub const REGISTER_PATH: &str = "/register";
pub const CONNECT_CALENDAR_PATH: &str = "/register/connect-calendar/";
pub const TIME_INTERVALS_PATH: &str = "/register/time-intervals";
pub const UPDATE_PROFILE_PATH: &str = "/register/update-profile";
pub const AUTH_ERROR_QUERY_PARAM: &str = "error";
pub const USERNAME_QUERY_PARAM: &str = "username";

// Form rules
pub const USERNAME_MIN_LENGTH: usize = 3;
pub const NAME_MIN_LENGTH: usize = 3;
pub const USERNAME_PATTERN: &str = r"^[A-Za-z-]+$";
pub const PROFILE_URL_PREFIX: &str = "ignite.com/";

// User-facing messages
pub const USERNAME_TOO_SHORT_MESSAGE: &str = "O usuário precisa ter no mínimo 3 letras";
pub const USERNAME_PATTERN_MESSAGE: &str = "O usuário pode conter apenas letras e hifens";
pub const NAME_TOO_SHORT_MESSAGE: &str = "O nome precisa ter pelo menos 3 letras.";
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already taken.";
pub const CALENDAR_PERMISSION_ERROR_MESSAGE: &str = "Falha ao se conectar ao Google, verifique se você habilitou as permissões de acesso ao Google Calendar";

// Cookies
pub const USER_ID_COOKIE: &str = "@ignitecall:userId";
pub const USER_ID_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;
pub const SESSION_COOKIE: &str = "ignitecall.session";
/// Binds a pending handshake to the browser that started it
pub const OAUTH_STATE_COOKIE: &str = "ignitecall.oauth-state";

// Sessions and pending handshakes
pub const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 30;
pub const PENDING_LOGIN_TTL_SECS: i64 = 600;
pub const SESSION_SWEEP_INTERVAL_SECS: u64 = 300;
