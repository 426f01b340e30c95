//! Attendance API (owner and staff)

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::{ALL_ROLES, require_roles};
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/absences", routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_roles(ALL_ROLES),
        ))
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/clock-in", post(handler::clock_in))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
