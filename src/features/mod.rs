//! HTTP features, one per entity: models, DTOs, repositories, handlers, routes.

pub mod regions;
pub mod walk_difficulties;
pub mod walks;

use axum::Router;

use crate::features::walks::WalkState;
use crate::modules::storage::Repositories;

/// All entity routes, backed by the given repositories
pub fn routes(repos: &Repositories) -> Router {
    let walk_state = WalkState {
        walks: repos.walks.clone(),
        regions: repos.regions.clone(),
        walk_difficulties: repos.walk_difficulties.clone(),
    };

    Router::new()
        .merge(regions::routes::routes(repos.regions.clone()))
        .merge(walk_difficulties::routes::routes(
            repos.walk_difficulties.clone(),
        ))
        .merge(walks::routes::routes(walk_state))
}
