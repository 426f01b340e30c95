//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound
            | Self::AccountNotFound
            | Self::AttendanceNotFound
            | Self::StockNotFound
            | Self::ReportNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::EmailTaken => StatusCode::CONFLICT,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            Self::PermissionDenied => StatusCode::FORBIDDEN,

            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // validation and malformed input
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
