use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::walk_difficulties::handlers;
use crate::features::walk_difficulties::repositories::WalkDifficultyRepository;

pub const WALK_DIFFICULTIES_PATH: &str = "/WalkDifficulties";

/// Create routes for the walk difficulties feature
pub fn routes(repo: Arc<dyn WalkDifficultyRepository>) -> Router {
    Router::new()
        .route(
            WALK_DIFFICULTIES_PATH,
            get(handlers::list_walk_difficulties).post(handlers::add_walk_difficulty),
        )
        .route(
            "/WalkDifficulties/{id}",
            get(handlers::get_walk_difficulty)
                .put(handlers::update_walk_difficulty)
                .delete(handlers::delete_walk_difficulty),
        )
        .with_state(repo)
}
