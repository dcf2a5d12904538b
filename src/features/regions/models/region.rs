use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A New Zealand region (e.g. Bay of Plenty)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i64,
}
