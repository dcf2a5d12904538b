use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::walk_difficulties::models::WalkDifficulty;
use crate::shared::validation::not_blank;

/// Walk difficulty as exposed to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyDto {
    pub id: Uuid,
    #[schema(example = "Medium")]
    pub code: String,
}

/// Request DTO for creating a walk difficulty
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkDifficultyRequest {
    #[validate(custom(function = "not_blank", message = "Code is required."))]
    pub code: String,
}

/// Request DTO for replacing a walk difficulty
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkDifficultyRequest {
    #[validate(custom(function = "not_blank", message = "Code is required."))]
    pub code: String,
}

impl From<WalkDifficulty> for WalkDifficultyDto {
    fn from(difficulty: WalkDifficulty) -> Self {
        Self {
            id: difficulty.id,
            code: difficulty.code,
        }
    }
}

impl From<WalkDifficultyDto> for WalkDifficulty {
    fn from(dto: WalkDifficultyDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
        }
    }
}

impl From<AddWalkDifficultyRequest> for WalkDifficulty {
    fn from(req: AddWalkDifficultyRequest) -> Self {
        Self {
            id: Uuid::nil(),
            code: req.code,
        }
    }
}

impl From<UpdateWalkDifficultyRequest> for WalkDifficulty {
    fn from(req: UpdateWalkDifficultyRequest) -> Self {
        Self {
            id: Uuid::nil(),
            code: req.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let difficulty = WalkDifficulty {
            id: Uuid::now_v7(),
            code: "Hard".to_string(),
        };

        let dto = WalkDifficultyDto::from(difficulty.clone());
        assert_eq!(WalkDifficulty::from(dto), difficulty);
    }

    #[test]
    fn test_blank_code_is_rejected() {
        let req = AddWalkDifficultyRequest {
            code: "\t".to_string(),
        };
        assert!(req.validate().is_err());

        let req = UpdateWalkDifficultyRequest {
            code: "Easy".to_string(),
        };
        assert!(req.validate().is_ok());
        assert!(WalkDifficulty::from(req).id.is_nil());
    }
}
