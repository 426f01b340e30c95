//! Financial report API (owner only)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{OWNER_ONLY, require_roles};
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/reports", routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_roles(OWNER_ONLY),
        ))
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
