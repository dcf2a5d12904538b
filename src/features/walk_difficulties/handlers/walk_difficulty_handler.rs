use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, IdPath};
use crate::features::walk_difficulties::dtos::{
    AddWalkDifficultyRequest, UpdateWalkDifficultyRequest, WalkDifficultyDto,
};
use crate::features::walk_difficulties::repositories::WalkDifficultyRepository;
use crate::features::walk_difficulties::routes::WALK_DIFFICULTIES_PATH;
use crate::shared::types::{Created, ErrorResponse};
use crate::shared::validation::{field_errors_of, FieldErrors};

/// Adds "Code already exists." when another difficulty holds `code`.
/// `updating` is the row being replaced, which may keep its own code.
async fn check_code_unique(
    mut errors: FieldErrors,
    repo: &dyn WalkDifficultyRepository,
    code: &str,
    updating: Option<Uuid>,
) -> Result<FieldErrors> {
    if code.trim().is_empty() {
        return Ok(errors);
    }

    if let Some(existing) = repo.get_by_code(code).await? {
        if Some(existing.id) != updating {
            errors.add("code", "Code already exists.");
        }
    }
    Ok(errors)
}

/// List all walk difficulties
#[utoipa::path(
    get,
    path = "/WalkDifficulties",
    responses(
        (status = 200, description = "All walk difficulties", body = Vec<WalkDifficultyDto>),
    ),
    tag = "walk-difficulties"
)]
pub async fn list_walk_difficulties(
    State(repo): State<Arc<dyn WalkDifficultyRepository>>,
) -> Result<Json<Vec<WalkDifficultyDto>>> {
    let difficulties = repo.get_all().await?;
    Ok(Json(difficulties.into_iter().map(Into::into).collect()))
}

/// Get a walk difficulty by id
#[utoipa::path(
    get,
    path = "/WalkDifficulties/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk difficulty id")
    ),
    responses(
        (status = 200, description = "Walk difficulty found", body = WalkDifficultyDto),
        (status = 404, description = "Walk difficulty not found")
    ),
    tag = "walk-difficulties"
)]
pub async fn get_walk_difficulty(
    State(repo): State<Arc<dyn WalkDifficultyRepository>>,
    IdPath(id): IdPath,
) -> Result<Json<WalkDifficultyDto>> {
    let difficulty = repo.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(difficulty.into()))
}

/// Create a walk difficulty
#[utoipa::path(
    post,
    path = "/WalkDifficulties",
    request_body = AddWalkDifficultyRequest,
    responses(
        (status = 201, description = "Walk difficulty created", body = WalkDifficultyDto),
        (status = 400, description = "Blank or duplicate code", body = ErrorResponse)
    ),
    tag = "walk-difficulties"
)]
pub async fn add_walk_difficulty(
    State(repo): State<Arc<dyn WalkDifficultyRepository>>,
    AppJson(req): AppJson<AddWalkDifficultyRequest>,
) -> Result<Created<WalkDifficultyDto>> {
    let errors = field_errors_of(&req);
    check_code_unique(errors, repo.as_ref(), &req.code, None)
        .await?
        .into_result()?;

    let difficulty = repo.add(req.into()).await?;
    let dto = WalkDifficultyDto::from(difficulty);

    Ok(Created::at(
        format!("{}/{}", WALK_DIFFICULTIES_PATH, dto.id),
        dto,
    ))
}

/// Replace a walk difficulty
#[utoipa::path(
    put,
    path = "/WalkDifficulties/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk difficulty id")
    ),
    request_body = UpdateWalkDifficultyRequest,
    responses(
        (status = 200, description = "Walk difficulty updated", body = WalkDifficultyDto),
        (status = 400, description = "Blank or duplicate code", body = ErrorResponse),
        (status = 404, description = "Walk difficulty not found")
    ),
    tag = "walk-difficulties"
)]
pub async fn update_walk_difficulty(
    State(repo): State<Arc<dyn WalkDifficultyRepository>>,
    IdPath(id): IdPath,
    AppJson(req): AppJson<UpdateWalkDifficultyRequest>,
) -> Result<Json<WalkDifficultyDto>> {
    let errors = field_errors_of(&req);
    check_code_unique(errors, repo.as_ref(), &req.code, Some(id))
        .await?
        .into_result()?;

    let difficulty = repo
        .update(id, req.into())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(difficulty.into()))
}

/// Delete a walk difficulty, returning the removed record
#[utoipa::path(
    delete,
    path = "/WalkDifficulties/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk difficulty id")
    ),
    responses(
        (status = 200, description = "Walk difficulty deleted", body = WalkDifficultyDto),
        (status = 404, description = "Walk difficulty not found")
    ),
    tag = "walk-difficulties"
)]
pub async fn delete_walk_difficulty(
    State(repo): State<Arc<dyn WalkDifficultyRepository>>,
    IdPath(id): IdPath,
) -> Result<Json<WalkDifficultyDto>> {
    let difficulty = repo.delete(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(difficulty.into()))
}
