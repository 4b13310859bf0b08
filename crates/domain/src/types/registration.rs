//! Multi-step registration flow

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONNECT_CALENDAR_PATH, REGISTER_PATH, TIME_INTERVALS_PATH, UPDATE_PROFILE_PATH,
};
use crate::impl_domain_status_conversions;

/// Registration steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationStep {
    Register,
    ConnectCalendar,
    TimeIntervals,
    UpdateProfile,
}

impl_domain_status_conversions!(RegistrationStep {
    Register => "register",
    ConnectCalendar => "connect-calendar",
    TimeIntervals => "time-intervals",
    UpdateProfile => "update-profile",
});

impl RegistrationStep {
    /// Total number of steps shown in the progress indicator.
    pub const COUNT: u8 = 4;

    /// 1-based position.
    pub fn number(self) -> u8 {
        match self {
            Self::Register => 1,
            Self::ConnectCalendar => 2,
            Self::TimeIntervals => 3,
            Self::UpdateProfile => 4,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Register => REGISTER_PATH,
            Self::ConnectCalendar => CONNECT_CALENDAR_PATH,
            Self::TimeIntervals => TIME_INTERVALS_PATH,
            Self::UpdateProfile => UPDATE_PROFILE_PATH,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Register => Some(Self::ConnectCalendar),
            Self::ConnectCalendar => Some(Self::TimeIntervals),
            Self::TimeIntervals => Some(Self::UpdateProfile),
            Self::UpdateProfile => None,
        }
    }
}

/// State of the connect-calendar step as presented to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectCalendarStatus {
    pub current_step: u8,
    pub total_steps: u8,
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_error: Option<String>,
    /// "Próximo passo" is only enabled once the calendar is connected
    pub can_proceed: bool,
}
