use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::walk_difficulties::{
    dtos as walk_difficulties_dtos, handlers as walk_difficulties_handlers,
};
use crate::features::walks::{dtos as walks_dtos, handlers as walks_handlers};
use crate::shared::types::ErrorResponse;
use crate::shared::validation::FieldErrors;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_regions,
        regions_handlers::get_region,
        regions_handlers::add_region,
        regions_handlers::update_region,
        regions_handlers::delete_region,
        // Walk difficulties
        walk_difficulties_handlers::list_walk_difficulties,
        walk_difficulties_handlers::get_walk_difficulty,
        walk_difficulties_handlers::add_walk_difficulty,
        walk_difficulties_handlers::update_walk_difficulty,
        walk_difficulties_handlers::delete_walk_difficulty,
        // Walks
        walks_handlers::list_walks,
        walks_handlers::get_walk,
        walks_handlers::add_walk,
        walks_handlers::update_walk,
        walks_handlers::delete_walk,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldErrors,
            regions_dtos::RegionDto,
            regions_dtos::AddRegionRequest,
            regions_dtos::UpdateRegionRequest,
            walk_difficulties_dtos::WalkDifficultyDto,
            walk_difficulties_dtos::AddWalkDifficultyRequest,
            walk_difficulties_dtos::UpdateWalkDifficultyRequest,
            walks_dtos::WalkDto,
            walks_dtos::AddWalkRequest,
            walks_dtos::UpdateWalkRequest,
        )
    ),
    tags(
        (name = "regions", description = "Regions of New Zealand"),
        (name = "walk-difficulties", description = "Walk difficulty reference data"),
        (name = "walks", description = "Walking tracks"),
    ),
    info(
        title = "NZ Walks API",
        version = "0.1.0",
        description = "Regions, walks and walk difficulties of New Zealand",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_entity_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/Regions",
            "/Regions/{id}",
            "/WalkDifficulties",
            "/WalkDifficulties/{id}",
            "/Walks",
            "/Walks/{id}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Walks".to_string(),
            version: "9.9.9".to_string(),
            description: "custom".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Walks");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("custom"));
    }
}
