//! Shared types for the backoffice workspace
//!
//! Error codes, the response envelope and the request/record models used by
//! the server and its clients.

pub mod error;
pub mod models;
pub mod response;

pub use http;

pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
