//! API Response types
//!
//! Every successful call answers with the same envelope:
//! ```json
//! {
//!     "message": "Stock created successfully",
//!     "data": { ... }
//! }
//! ```
//! `data` is left out when there is nothing to return. Failures do not use
//! the envelope, see [`crate::error::AppError`].

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// HTTP status sent with the envelope
    #[serde(skip, default = "default_status")]
    pub status: StatusCode,
}

fn default_status() -> StatusCode {
    StatusCode::OK
}

impl<T> ApiResponse<T> {
    /// 200 with data
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            status: StatusCode::OK,
        }
    }

    /// 201 with the created record
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            status: StatusCode::CREATED,
        }
    }
}

impl ApiResponse<()> {
    /// 200 with a message only
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            status: StatusCode::OK,
        }
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = self.status;
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_ok_envelope() {
        let response = ApiResponse::ok("Stocks retrieved successfully", vec![1, 2]);
        assert_eq!(response.status, StatusCode::OK);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Stocks retrieved successfully", "data": [1, 2]})
        );
    }

    #[test]
    fn test_message_only_omits_data() {
        let response = ApiResponse::message("Report deleted successfully");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Report deleted successfully"}"#);
    }

    #[test]
    fn test_created_status() {
        let response = ApiResponse::created("Clock-in recorded successfully", 7).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_deserialize_defaults_status() {
        let response: ApiResponse<i32> =
            serde_json::from_str(r#"{"message":"ok","data":42}"#).unwrap();
        assert_eq!(response.data, Some(42));
        assert_eq!(response.status, StatusCode::OK);
    }
}
