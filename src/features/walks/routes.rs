use axum::{routing::get, Router};

use crate::features::walks::handlers::{self, WalkState};

pub const WALKS_PATH: &str = "/Walks";

/// Create routes for the walks feature
pub fn routes(state: WalkState) -> Router {
    Router::new()
        .route(WALKS_PATH, get(handlers::list_walks).post(handlers::add_walk))
        .route(
            "/Walks/{id}",
            get(handlers::get_walk)
                .put(handlers::update_walk)
                .delete(handlers::delete_walk),
        )
        .with_state(state)
}
