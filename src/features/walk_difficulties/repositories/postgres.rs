use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::walk_difficulties::models::WalkDifficulty;
use crate::features::walk_difficulties::repositories::WalkDifficultyRepository;

/// PostgreSQL implementation of WalkDifficultyRepository
pub struct PgWalkDifficultyRepository {
    pool: PgPool,
}

impl PgWalkDifficultyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkDifficultyRepository for PgWalkDifficultyRepository {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>> {
        sqlx::query_as::<_, WalkDifficulty>(
            "SELECT id, code FROM walk_difficulties ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list walk difficulties: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        sqlx::query_as::<_, WalkDifficulty>(
            "SELECT id, code FROM walk_difficulties WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get walk difficulty {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<WalkDifficulty>> {
        sqlx::query_as::<_, WalkDifficulty>(
            "SELECT id, code FROM walk_difficulties WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get walk difficulty by code '{}': {:?}", code, e);
            AppError::Database(e)
        })
    }

    async fn add(&self, difficulty: WalkDifficulty) -> Result<WalkDifficulty> {
        let difficulty = sqlx::query_as::<_, WalkDifficulty>(
            r#"
            INSERT INTO walk_difficulties (id, code)
            VALUES ($1, $2)
            RETURNING id, code
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&difficulty.code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create walk difficulty: {:?}", e);
            AppError::from_write(e)
        })?;

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
        let updated = sqlx::query_as::<_, WalkDifficulty>(
            r#"
            UPDATE walk_difficulties
            SET code = $2
            WHERE id = $1
            RETURNING id, code
            "#,
        )
        .bind(id)
        .bind(&difficulty.code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update walk difficulty {}: {:?}", id, e);
            AppError::from_write(e)
        })?;

        if updated.is_some() {
            tracing::info!(walk_difficulty_id = %id, "Updated walk difficulty");
        }
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        let deleted = sqlx::query_as::<_, WalkDifficulty>(
            "DELETE FROM walk_difficulties WHERE id = $1 RETURNING id, code",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete walk difficulty {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if deleted.is_some() {
            tracing::info!(walk_difficulty_id = %id, "Deleted walk difficulty");
        }
        Ok(deleted)
    }
}
