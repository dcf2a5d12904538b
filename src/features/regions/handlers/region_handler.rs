use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, IdPath};
use crate::features::regions::dtos::{AddRegionRequest, RegionDto, UpdateRegionRequest};
use crate::features::regions::repositories::RegionRepository;
use crate::features::regions::routes::REGIONS_PATH;
use crate::shared::types::{Created, ErrorResponse};

/// List all regions
#[utoipa::path(
    get,
    path = "/Regions",
    responses(
        (status = 200, description = "All regions", body = Vec<RegionDto>),
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(repo): State<Arc<dyn RegionRepository>>,
) -> Result<Json<Vec<RegionDto>>> {
    let regions = repo.get_all().await?;
    Ok(Json(regions.into_iter().map(Into::into).collect()))
}

/// Get a region by id
#[utoipa::path(
    get,
    path = "/Regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region id")
    ),
    responses(
        (status = 200, description = "Region found", body = RegionDto),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(repo): State<Arc<dyn RegionRepository>>,
    IdPath(id): IdPath,
) -> Result<Json<RegionDto>> {
    let region = repo.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(region.into()))
}

/// Create a region
#[utoipa::path(
    post,
    path = "/Regions",
    request_body = AddRegionRequest,
    responses(
        (status = 201, description = "Region created", body = RegionDto),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn add_region(
    State(repo): State<Arc<dyn RegionRepository>>,
    AppJson(req): AppJson<AddRegionRequest>,
) -> Result<Created<RegionDto>> {
    let region = repo.add(req.into()).await?;
    let dto = RegionDto::from(region);

    Ok(Created::at(format!("{}/{}", REGIONS_PATH, dto.id), dto))
}

/// Replace every field of a region
#[utoipa::path(
    put,
    path = "/Regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region id")
    ),
    request_body = UpdateRegionRequest,
    responses(
        (status = 200, description = "Region updated", body = RegionDto),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn update_region(
    State(repo): State<Arc<dyn RegionRepository>>,
    IdPath(id): IdPath,
    AppJson(req): AppJson<UpdateRegionRequest>,
) -> Result<Json<RegionDto>> {
    let region = repo
        .update(id, req.into())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(region.into()))
}

/// Delete a region, returning the removed record
#[utoipa::path(
    delete,
    path = "/Regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region id")
    ),
    responses(
        (status = 200, description = "Region deleted", body = RegionDto),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn delete_region(
    State(repo): State<Arc<dyn RegionRepository>>,
    IdPath(id): IdPath,
) -> Result<Json<RegionDto>> {
    let region = repo.delete(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(region.into()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use uuid::Uuid;

    use crate::features::regions::dtos::RegionDto;
    use crate::features::regions::RegionRepository;
    use crate::shared::test_helpers::{random_region_request, test_server};

    fn bay_of_plenty() -> serde_json::Value {
        json!({
            "code": "BOP",
            "name": "Bay of Plenty",
            "area": 12,
            "latitude": -38,
            "longitude": 176.9,
            "population": 300000
        })
    }

    #[tokio::test]
    async fn test_list_is_empty_without_regions() {
        let (server, _) = test_server();

        let response = server.get("/Regions").await;
        response.assert_status_ok();
        assert!(response.json::<Vec<RegionDto>>().is_empty());
    }

    #[tokio::test]
    async fn test_add_then_get_returns_same_body() {
        let (server, _) = test_server();

        let response = server.post("/Regions").json(&bay_of_plenty()).await;
        response.assert_status(StatusCode::CREATED);

        let created = response.json::<RegionDto>();
        assert!(!created.id.is_nil());
        assert_eq!(created.code, "BOP");
        assert_eq!(created.name, "Bay of Plenty");
        assert_eq!(created.area, 12.0);
        assert_eq!(created.latitude, -38.0);
        assert_eq!(created.longitude, 176.9);
        assert_eq!(created.population, 300_000);

        let location = response.header("location");
        assert_eq!(location, format!("/Regions/{}", created.id).as_str());

        let fetched = server.get(&format!("/Regions/{}", created.id)).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<RegionDto>(), created);
    }

    #[tokio::test]
    async fn test_list_returns_added_regions_in_order() {
        let (server, _) = test_server();

        let mut expected = Vec::new();
        for _ in 0..3 {
            let created = server
                .post("/Regions")
                .json(&random_region_request())
                .await
                .json::<RegionDto>();
            expected.push(created);
        }

        let listed = server.get("/Regions").await.json::<Vec<RegionDto>>();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found_with_empty_body() {
        let (server, _) = test_server();

        let response = server.get(&format!("/Regions/{}", Uuid::now_v7())).await;
        response.assert_status_not_found();
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let (server, _) = test_server();

        let response = server.get("/Regions/not-a-guid").await;
        response.assert_status_not_found();
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let (server, _) = test_server();
        let created = server
            .post("/Regions")
            .json(&bay_of_plenty())
            .await
            .json::<RegionDto>();

        let response = server
            .put(&format!("/Regions/{}", created.id))
            .json(&json!({
                "code": "BOP",
                "name": "Te Moana-a-Toi",
                "area": 12200.5,
                "latitude": -38.1,
                "longitude": 176.5,
                "population": 345000
            }))
            .await;
        response.assert_status_ok();

        let updated = response.json::<RegionDto>();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Te Moana-a-Toi");
        assert_eq!(updated.population, 345_000);

        let fetched = server
            .get(&format!("/Regions/{}", created.id))
            .await
            .json::<RegionDto>();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_leaves_storage_unchanged() {
        let (server, repos) = test_server();
        let created = server
            .post("/Regions")
            .json(&bay_of_plenty())
            .await
            .json::<RegionDto>();

        let response = server
            .put(&format!("/Regions/{}", Uuid::now_v7()))
            .json(&bay_of_plenty())
            .await;
        response.assert_status_not_found();

        let stored = repos.regions.get_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, created.id);
    }

    #[tokio::test]
    async fn test_delete_then_get_and_delete_are_not_found() {
        let (server, _) = test_server();
        let created = server
            .post("/Regions")
            .json(&bay_of_plenty())
            .await
            .json::<RegionDto>();
        let path = format!("/Regions/{}", created.id);

        let response = server.delete(&path).await;
        response.assert_status_ok();
        assert_eq!(response.json::<RegionDto>(), created);

        server.get(&path).await.assert_status_not_found();
        server.delete(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_add_stores_fields_without_range_checks() {
        let (server, repos) = test_server();

        let response = server
            .post("/Regions")
            .json(&json!({
                "code": "",
                "name": "",
                "area": 0,
                "latitude": 0,
                "longitude": 0,
                "population": -1
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let created = response.json::<RegionDto>();
        assert_eq!(created.code, "");
        assert_eq!(created.area, 0.0);
        assert_eq!(created.population, -1);
        assert_eq!(repos.regions.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_accepts_zero_area() {
        let (server, _) = test_server();
        let created = server
            .post("/Regions")
            .json(&bay_of_plenty())
            .await
            .json::<RegionDto>();

        let response = server
            .put(&format!("/Regions/{}", created.id))
            .json(&json!({
                "code": "BOP",
                "name": "Bay of Plenty",
                "area": 0,
                "latitude": -38,
                "longitude": 176.9,
                "population": 0
            }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<RegionDto>().area, 0.0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (server, _) = test_server();

        let response = server
            .post("/Regions")
            .json(&json!({ "code": "BOP" }))
            .await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON data"));
    }
}
