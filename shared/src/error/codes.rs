//! Error codes
//!
//! The leading digit groups a code by domain (see [`super::ErrorCategory`]).
//! Codes never reach the wire; they pick the status and show up in logs.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // 0xxx: general
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    /// Body or path could not be decoded
    InvalidRequest = 5,
    RequiredField = 7,

    // 1xxx: auth
    NotAuthenticated = 1001,
    InvalidCredentials = 1002,
    TokenExpired = 1003,
    TokenInvalid = 1004,
    PasswordTooShort = 1101,
    /// Role outside `owner` / `staff`
    InvalidRole = 1102,
    AccountNotFound = 1201,
    EmailTaken = 1202,

    // 2xxx: permission
    PermissionDenied = 2001,

    // 3xxx: attendance
    AttendanceNotFound = 3001,
    InvalidScheduleTime = 3002,
    InvalidCoordinates = 3003,

    // 4xxx: inventory
    StockNotFound = 4001,
    StockInvalidPrice = 4002,
    StockInvalidQuantity = 4003,
    /// `unit_price * quantity_sold` does not fit a stored amount
    StockTotalOutOfRange = 4004,

    // 5xxx: report
    ReportNotFound = 5001,

    // 9xxx: system
    InternalError = 9001,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Message sent when the error carries no custom text
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",

            Self::NotAuthenticated => "Authorization header is required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token has expired",
            Self::TokenInvalid => "Invalid token",
            Self::PasswordTooShort => "Password must be at least 8 characters",
            Self::InvalidRole => "Invalid role",
            Self::AccountNotFound => "User not found",
            Self::EmailTaken => "Email is already registered",

            Self::PermissionDenied => "Forbidden: insufficient role",

            Self::AttendanceNotFound => "Absence record not found",
            Self::InvalidScheduleTime => "Invalid time format for scheduled_time. Use HH:MM:SS",
            Self::InvalidCoordinates => "Latitude and longitude are invalid",

            Self::StockNotFound => "Stock not found",
            Self::StockInvalidPrice => "Unit price must not be negative",
            Self::StockInvalidQuantity => "Quantity sold must not be negative",
            Self::StockTotalOutOfRange => "Total exceeds the largest storable amount",

            Self::ReportNotFound => "Report not found",

            Self::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvalidRole.code(), 1102);
        assert_eq!(ErrorCode::EmailTaken.code(), 1202);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::AttendanceNotFound.code(), 3001);
        assert_eq!(ErrorCode::StockTotalOutOfRange.code(), 4004);
        assert_eq!(ErrorCode::ReportNotFound.code(), 5001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_display_is_the_number() {
        assert_eq!(ErrorCode::StockNotFound.to_string(), "4001");
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(ErrorCode::InvalidCredentials.message(), "Invalid email or password");
        assert_eq!(ErrorCode::AccountNotFound.message(), "User not found");
    }
}
