//! Public account routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/register | POST | none |
//! | /api/login | POST | none |

mod handler;

use axum::{Router, routing::post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(handler::register))
        .route("/api/login", post(handler::login))
}
