use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::walk_difficulties::models::WalkDifficulty;
use crate::features::walk_difficulties::repositories::WalkDifficultyRepository;
use crate::modules::storage::InMemoryStore;

/// In-memory implementation of WalkDifficultyRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryWalkDifficultyRepository {
    store: InMemoryStore,
}

impl InMemoryWalkDifficultyRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WalkDifficultyRepository for InMemoryWalkDifficultyRepository {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>> {
        Ok(self.store.read().await.walk_difficulties.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        let tables = self.store.read().await;
        Ok(tables.walk_difficulties.iter().find(|d| d.id == id).cloned())
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<WalkDifficulty>> {
        let tables = self.store.read().await;
        Ok(tables
            .walk_difficulties
            .iter()
            .find(|d| d.code == code)
            .cloned())
    }

    async fn add(&self, mut difficulty: WalkDifficulty) -> Result<WalkDifficulty> {
        difficulty.id = Uuid::now_v7();

        let mut tables = self.store.write().await;
        tables.walk_difficulties.push(difficulty.clone());

        tracing::info!(
            walk_difficulty_id = %difficulty.id,
            code = %difficulty.code,
            "Created walk difficulty"
        );
        Ok(difficulty)
    }

    async fn update(
        &self,
        id: Uuid,
        difficulty: WalkDifficulty,
    ) -> Result<Option<WalkDifficulty>> {
        let mut tables = self.store.write().await;
        let Some(existing) = tables.walk_difficulties.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };

        existing.code = difficulty.code;

        tracing::info!(walk_difficulty_id = %id, "Updated walk difficulty");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        let mut tables = self.store.write().await;
        let Some(pos) = tables.walk_difficulties.iter().position(|d| d.id == id) else {
            return Ok(None);
        };

        let removed = tables.walk_difficulties.remove(pos);
        tables.walks.retain(|w| w.walk_difficulty_id != id);

        tracing::info!(walk_difficulty_id = %id, "Deleted walk difficulty");
        Ok(Some(removed))
    }
}
