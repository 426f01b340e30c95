//! HTTP API
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - registration and login (public)
//! - [`users`] - account administration (owner)
//! - [`absences`] - clock-in records (owner, staff)
//! - [`stocks`] - stock sales (owner, staff)
//! - [`reports`] - financial report ledger (owner)
//!
//! Success bodies use the [`ApiResponse`] envelope; failures are plain text
//! with the status of their [`AppError`] code.

mod extract;

pub mod absences;
pub mod auth;
pub mod health;
pub mod reports;
pub mod stocks;
pub mod users;

pub use extract::ApiJson;

use axum::Router;
use shared::{AppError, ApiResponse};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Handler result: enveloped success or plain-text error
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Build the application with every route group and the HTTP middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Public
        .merge(health::router())
        .merge(auth::router())
        // Role-gated groups
        .merge(users::router(&state))
        .merge(absences::router(&state))
        .merge(stocks::router(&state))
        .merge(reports::router(&state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
