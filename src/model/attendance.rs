use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::timestamp;

/// Wall-clock format of `timeIn` / `timeOut`, e.g. `08:58 AM`.
pub const CLOCK_TIME_FORMAT: &str = "%I:%M %p";

const SHIFT_START: (u32, u32) = (9, 0);
const SHIFT_END: (u32, u32) = (17, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    #[serde(rename = "On Time")]
    #[strum(to_string = "On Time", serialize = "on-time", serialize = "OnTime")]
    OnTime,
    Late,
    Early,
}

impl AttendanceStatus {
    /// Late beats early: arriving after the shift start is Late whatever the
    /// departure, otherwise leaving before the shift end is Early. Times are
    /// compared at minute precision, as they are displayed.
    pub fn classify(time_in: NaiveTime, time_out: NaiveTime) -> Self {
        let start = NaiveTime::from_hms_opt(SHIFT_START.0, SHIFT_START.1, 0).unwrap_or_default();
        let end = NaiveTime::from_hms_opt(SHIFT_END.0, SHIFT_END.1, 0).unwrap_or_default();
        let (time_in, time_out) = (to_minute(time_in), to_minute(time_out));
        if time_in > start {
            AttendanceStatus::Late
        } else if time_out < end {
            AttendanceStatus::Early
        } else {
            AttendanceStatus::OnTime
        }
    }
}

fn to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimeHistoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub date: NaiveDate,
    pub time_in: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
}

impl TimeHistoryRecord {
    /// Record of one completed clock-in/clock-out cycle.
    pub fn from_shift(time_in: DateTime<Utc>, time_out: DateTime<Utc>) -> Self {
        TimeHistoryRecord {
            id: None,
            user_id: None,
            name: None,
            date: time_out.date_naive(),
            time_in: time_in.format(CLOCK_TIME_FORMAT).to_string(),
            time_out: Some(time_out.format(CLOCK_TIME_FORMAT).to_string()),
            status: Some(AttendanceStatus::classify(time_in.time(), time_out.time())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum ClockState {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ClockAction {
    In,
    Out,
}

/// Clock-in state of the dashboard; a single document shared by all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockStatus {
    pub status: ClockState,
    #[serde(serialize_with = "timestamp::serialize_opt")]
    pub time_in: Option<DateTime<Utc>>,
    #[serde(serialize_with = "timestamp::serialize_opt")]
    pub time_out: Option<DateTime<Utc>>,
}

impl Default for ClockStatus {
    fn default() -> Self {
        ClockStatus {
            status: ClockState::Out,
            time_in: None,
            time_out: None,
        }
    }
}
