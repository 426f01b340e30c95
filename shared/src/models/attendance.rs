//! Attendance Model (clock-in records)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Weather stored when the provider call fails
pub const WEATHER_NOT_AVAILABLE: &str = "N/A";

/// Clock-in record
///
/// `is_late` and `day_of_week` are fixed at creation. Only `weather` can
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    /// Business-local date of the clock-in
    pub date: NaiveDate,
    /// Business-local time, whole seconds
    pub clock_in_time: NaiveTime,
    pub scheduled_time: NaiveTime,
    pub is_late: bool,
    pub weather: String,
    pub latitude: f64,
    pub longitude: f64,
    /// English weekday name, e.g. "Monday"
    pub day_of_week: String,
    pub created_at: i64,
}

/// Clock-in payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockInRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// "HH:MM:SS"
    pub scheduled_time: Option<String>,
}

/// Update payload; weather is the only mutable field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub weather: Option<String>,
}
