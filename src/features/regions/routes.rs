use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::repositories::RegionRepository;

pub const REGIONS_PATH: &str = "/Regions";

/// Create routes for the regions feature
pub fn routes(repo: Arc<dyn RegionRepository>) -> Router {
    Router::new()
        .route(
            REGIONS_PATH,
            get(handlers::list_regions).post(handlers::add_region),
        )
        .route(
            "/Regions/{id}",
            get(handlers::get_region)
                .put(handlers::update_region)
                .delete(handlers::delete_region),
        )
        .with_state(repo)
}
