use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::regions::models::Region;

/// Region as exposed to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: Uuid,
    #[schema(example = "BOP")]
    pub code: String,
    #[schema(example = "Bay of Plenty")]
    pub name: String,
    pub area: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i64,
}

/// Request DTO for creating a region. Fields are stored as given.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddRegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i64,
}

/// Request DTO for replacing every field of a region
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i64,
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            area: region.area,
            latitude: region.latitude,
            longitude: region.longitude,
            population: region.population,
        }
    }
}

impl From<RegionDto> for Region {
    fn from(dto: RegionDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
            name: dto.name,
            area: dto.area,
            latitude: dto.latitude,
            longitude: dto.longitude,
            population: dto.population,
        }
    }
}

/// The id stays nil; the repository assigns one on insert.
impl From<AddRegionRequest> for Region {
    fn from(req: AddRegionRequest) -> Self {
        Self {
            id: Uuid::nil(),
            code: req.code,
            name: req.name,
            area: req.area,
            latitude: req.latitude,
            longitude: req.longitude,
            population: req.population,
        }
    }
}

impl From<UpdateRegionRequest> for Region {
    fn from(req: UpdateRegionRequest) -> Self {
        Self {
            id: Uuid::nil(),
            code: req.code,
            name: req.name,
            area: req.area,
            latitude: req.latitude,
            longitude: req.longitude,
            population: req.population,
        }
    }
}
