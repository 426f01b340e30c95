//! Account administration API (owner only)

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::{OWNER_ONLY, require_roles};
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/users", routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_roles(OWNER_ONLY),
        ))
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", put(handler::update).delete(handler::delete))
}
