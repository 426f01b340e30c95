//! Stock API (owner and staff)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{ALL_ROLES, require_roles};
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/stocks", routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_roles(ALL_ROLES),
        ))
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::patch)
                .delete(handler::delete),
        )
}
