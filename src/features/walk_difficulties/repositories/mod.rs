mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::walk_difficulties::models::WalkDifficulty;

pub use memory::InMemoryWalkDifficultyRepository;
pub use postgres::PgWalkDifficultyRepository;

/// Storage for walk difficulties
#[async_trait]
pub trait WalkDifficultyRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<WalkDifficulty>>;

    /// Exact, case-sensitive match on `code`
    async fn get_by_code(&self, code: &str) -> Result<Option<WalkDifficulty>>;

    async fn add(&self, difficulty: WalkDifficulty) -> Result<WalkDifficulty>;

    async fn update(&self, id: Uuid, difficulty: WalkDifficulty)
        -> Result<Option<WalkDifficulty>>;

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>>;
}
