use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, IdPath};
use crate::features::regions::RegionRepository;
use crate::features::walk_difficulties::WalkDifficultyRepository;
use crate::features::walks::dtos::{AddWalkRequest, UpdateWalkRequest, WalkDto};
use crate::features::walks::repositories::WalkRepository;
use crate::features::walks::routes::WALKS_PATH;
use crate::shared::types::{Created, ErrorResponse};
use crate::shared::validation::{field_errors_of, FieldErrors};

const WALK_NOT_FOUND: &str = "Walk with this id was not found";

/// Walk handlers read regions and difficulties to validate references
#[derive(Clone)]
pub struct WalkState {
    pub walks: Arc<dyn WalkRepository>,
    pub regions: Arc<dyn RegionRepository>,
    pub walk_difficulties: Arc<dyn WalkDifficultyRepository>,
}

/// Both lookups always run so the client sees every bad reference at once
async fn check_references(
    mut errors: FieldErrors,
    state: &WalkState,
    region_id: Uuid,
    walk_difficulty_id: Uuid,
) -> Result<FieldErrors> {
    if state.regions.get_by_id(region_id).await?.is_none() {
        errors.add("regionId", "RegionId is invalid.");
    }
    if state
        .walk_difficulties
        .get_by_id(walk_difficulty_id)
        .await?
        .is_none()
    {
        errors.add("walkDifficultyId", "WalkDifficultyId is invalid.");
    }
    Ok(errors)
}

/// List all walks
#[utoipa::path(
    get,
    path = "/Walks",
    responses(
        (status = 200, description = "All walks", body = Vec<WalkDto>),
    ),
    tag = "walks"
)]
pub async fn list_walks(State(state): State<WalkState>) -> Result<Json<Vec<WalkDto>>> {
    let walks = state.walks.get_all().await?;
    Ok(Json(walks.into_iter().map(Into::into).collect()))
}

/// Get a walk by id
#[utoipa::path(
    get,
    path = "/Walks/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk id")
    ),
    responses(
        (status = 200, description = "Walk found", body = WalkDto),
        (status = 404, description = "Walk not found")
    ),
    tag = "walks"
)]
pub async fn get_walk(
    State(state): State<WalkState>,
    IdPath(id): IdPath,
) -> Result<Json<WalkDto>> {
    let walk = state.walks.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(walk.into()))
}

/// Create a walk
#[utoipa::path(
    post,
    path = "/Walks",
    request_body = AddWalkRequest,
    responses(
        (status = 201, description = "Walk created", body = WalkDto),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "walks"
)]
pub async fn add_walk(
    State(state): State<WalkState>,
    AppJson(req): AppJson<AddWalkRequest>,
) -> Result<Created<WalkDto>> {
    let errors = field_errors_of(&req);
    check_references(errors, &state, req.region_id, req.walk_difficulty_id)
        .await?
        .into_result()?;

    let walk = state.walks.add(req.into()).await?;
    let dto = WalkDto::from(walk);

    Ok(Created::at(format!("{}/{}", WALKS_PATH, dto.id), dto))
}

/// Replace every field of a walk
#[utoipa::path(
    put,
    path = "/Walks/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk id")
    ),
    request_body = UpdateWalkRequest,
    responses(
        (status = 200, description = "Walk updated", body = WalkDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Walk not found", body = ErrorResponse)
    ),
    tag = "walks"
)]
pub async fn update_walk(
    State(state): State<WalkState>,
    IdPath(id): IdPath,
    AppJson(req): AppJson<UpdateWalkRequest>,
) -> Result<Json<WalkDto>> {
    let errors = field_errors_of(&req);
    check_references(errors, &state, req.region_id, req.walk_difficulty_id)
        .await?
        .into_result()?;

    let walk = state
        .walks
        .update(id, req.into())
        .await?
        .ok_or_else(|| AppError::ResourceNotFound(WALK_NOT_FOUND.to_string()))?;
    Ok(Json(walk.into()))
}

/// Delete a walk, returning the removed record
#[utoipa::path(
    delete,
    path = "/Walks/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk id")
    ),
    responses(
        (status = 200, description = "Walk deleted", body = WalkDto),
        (status = 404, description = "Walk not found", body = ErrorResponse)
    ),
    tag = "walks"
)]
pub async fn delete_walk(
    State(state): State<WalkState>,
    IdPath(id): IdPath,
) -> Result<Json<WalkDto>> {
    let walk = state
        .walks
        .delete(id)
        .await?
        .ok_or_else(|| AppError::ResourceNotFound(WALK_NOT_FOUND.to_string()))?;
    Ok(Json(walk.into()))
}
