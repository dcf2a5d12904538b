use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::walks::models::Walk;
use crate::shared::validation::not_blank;

/// Walk as exposed to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: Uuid,
    #[schema(example = "Mount Victoria Loop")]
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Request DTO for creating a walk.
///
/// `regionId` and `walkDifficultyId` must name existing rows; that part is
/// checked by the handler against the repositories.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkRequest {
    #[validate(custom(function = "not_blank", message = "Name is required."))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Length should be greater than zero."))]
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Request DTO for replacing a walk
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkRequest {
    #[validate(custom(function = "not_blank", message = "Name is required."))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Length should be greater than zero."))]
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl From<Walk> for WalkDto {
    fn from(walk: Walk) -> Self {
        Self {
            id: walk.id,
            name: walk.name,
            length: walk.length,
            region_id: walk.region_id,
            walk_difficulty_id: walk.walk_difficulty_id,
        }
    }
}

impl From<WalkDto> for Walk {
    fn from(dto: WalkDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            length: dto.length,
            region_id: dto.region_id,
            walk_difficulty_id: dto.walk_difficulty_id,
        }
    }
}

impl From<AddWalkRequest> for Walk {
    fn from(req: AddWalkRequest) -> Self {
        Self {
            id: Uuid::nil(),
            name: req.name,
            length: req.length,
            region_id: req.region_id,
            walk_difficulty_id: req.walk_difficulty_id,
        }
    }
}

impl From<UpdateWalkRequest> for Walk {
    fn from(req: UpdateWalkRequest) -> Self {
        Self {
            id: Uuid::nil(),
            name: req.name,
            length: req.length,
            region_id: req.region_id,
            walk_difficulty_id: req.walk_difficulty_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let walk = Walk {
            id: Uuid::now_v7(),
            name: "Tongariro Alpine Crossing".to_string(),
            length: 19.4,
            region_id: Uuid::now_v7(),
            walk_difficulty_id: Uuid::now_v7(),
        };

        let dto = WalkDto::from(walk.clone());
        assert_eq!(dto.region_id, walk.region_id);
        assert_eq!(Walk::from(dto), walk);
    }

    #[test]
    fn test_json_field_names() {
        let dto = WalkDto {
            id: Uuid::nil(),
            name: "Abel Tasman Coast Track".to_string(),
            length: 60.0,
            region_id: Uuid::nil(),
            walk_difficulty_id: Uuid::nil(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("regionId").is_some());
        assert!(json.get("walkDifficultyId").is_some());
        assert!(json.get("region_id").is_none());
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let req = UpdateWalkRequest {
            name: "Short".to_string(),
            length: 0.0,
            region_id: Uuid::nil(),
            walk_difficulty_id: Uuid::nil(),
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("length"));
        assert!(!errors.field_errors().contains_key("name"));
    }
}
