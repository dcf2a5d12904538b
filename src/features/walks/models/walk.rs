use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A walking track, located in one region and graded with one difficulty
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    /// Track length, always > 0 once persisted
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}
