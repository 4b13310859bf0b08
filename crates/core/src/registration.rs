//! Registration step state

use ignitecall_domain::constants::CALENDAR_PERMISSION_ERROR_MESSAGE;
use ignitecall_domain::{ConnectCalendarStatus, RegistrationStep};

/// State of step 2 (connect calendar).
///
/// Any non-blank `error` query value means the last handshake was denied,
/// which is reported with the calendar-permission message. The user may
/// move on only once signed in.
pub fn connect_calendar_status(signed_in: bool, error_param: Option<&str>) -> ConnectCalendarStatus {
    let auth_error = error_param
        .filter(|value| !value.trim().is_empty())
        .map(|_| CALENDAR_PERMISSION_ERROR_MESSAGE.to_string());

    ConnectCalendarStatus {
        current_step: RegistrationStep::ConnectCalendar.number(),
        total_steps: RegistrationStep::COUNT,
        signed_in,
        auth_error,
        can_proceed: signed_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_visit() {
        let status = connect_calendar_status(false, None);
        assert_eq!(status.current_step, 2);
        assert_eq!(status.total_steps, 4);
        assert!(!status.can_proceed);
        assert!(status.auth_error.is_none());
    }

    #[test]
    fn denied_handshake_shows_permission_message() {
        let status = connect_calendar_status(false, Some("permissions"));
        assert_eq!(status.auth_error.as_deref(), Some(CALENDAR_PERMISSION_ERROR_MESSAGE));

        let status = connect_calendar_status(false, Some("access_denied"));
        assert!(status.auth_error.is_some());

        assert!(connect_calendar_status(false, Some("  ")).auth_error.is_none());
    }

    #[test]
    fn signed_in_may_proceed() {
        let status = connect_calendar_status(true, None);
        assert!(status.signed_in);
        assert!(status.can_proceed);
    }
}
