mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::walks::models::Walk;

pub use memory::InMemoryWalkRepository;
pub use postgres::PgWalkRepository;

/// Storage for walks.
///
/// Callers validate that `region_id` and `walk_difficulty_id` resolve before
/// writing. Only the PostgreSQL implementation enforces it again (foreign keys).
#[async_trait]
pub trait WalkRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Walk>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Walk>>;

    async fn add(&self, walk: Walk) -> Result<Walk>;

    async fn update(&self, id: Uuid, walk: Walk) -> Result<Option<Walk>>;

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>>;
}
