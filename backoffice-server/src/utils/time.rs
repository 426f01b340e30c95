//! Time helpers for the business timezone
//!
//! The clock is injected everywhere so tests can pin "now".

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use mockable::Clock;
use shared::error::{AppError, AppResult, ErrorCode};

/// Clock handle shared by services and middleware
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Wire format of scheduled and clock-in times
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parse a scheduled time (`HH:MM:SS`)
pub fn parse_scheduled_time(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| AppError::new(ErrorCode::InvalidScheduleTime))
}

/// UTC instant as wall-clock time in the business timezone
pub fn to_business_local(now: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    now.with_timezone(&tz).naive_local()
}

/// Drop sub-second precision
pub fn truncate_to_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

/// Late when the clock-in is strictly after today's scheduled time
pub fn is_late(clock_in: NaiveDateTime, scheduled: NaiveTime) -> bool {
    clock_in > clock_in.date().and_time(scheduled)
}

/// English weekday name ("Monday")
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
