use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Difficulty grade a walk is rated with (e.g. "Easy", "Medium", "Hard").
/// `code` is unique across all difficulties.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub code: String,
}
