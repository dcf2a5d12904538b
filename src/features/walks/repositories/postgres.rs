use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::walks::models::Walk;
use crate::features::walks::repositories::WalkRepository;

/// PostgreSQL implementation of WalkRepository
pub struct PgWalkRepository {
    pool: PgPool,
}

impl PgWalkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkRepository for PgWalkRepository {
    async fn get_all(&self) -> Result<Vec<Walk>> {
        sqlx::query_as::<_, Walk>(
            r#"
            SELECT id, name, length, region_id, walk_difficulty_id
            FROM walks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list walks: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Walk>> {
        sqlx::query_as::<_, Walk>(
            r#"
            SELECT id, name, length, region_id, walk_difficulty_id
            FROM walks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get walk {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn add(&self, walk: Walk) -> Result<Walk> {
        let walk = sqlx::query_as::<_, Walk>(
            r#"
            INSERT INTO walks (id, name, length, region_id, walk_difficulty_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&walk.name)
        .bind(walk.length)
        .bind(walk.region_id)
        .bind(walk.walk_difficulty_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create walk: {:?}", e);
            AppError::from_write(e)
        })?;

        tracing::info!(walk_id = %walk.id, region_id = %walk.region_id, "Created walk");
        Ok(walk)
    }

    async fn update(&self, id: Uuid, walk: Walk) -> Result<Option<Walk>> {
        let updated = sqlx::query_as::<_, Walk>(
            r#"
            UPDATE walks
            SET name = $2, length = $3, region_id = $4, walk_difficulty_id = $5
            WHERE id = $1
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(id)
        .bind(&walk.name)
        .bind(walk.length)
        .bind(walk.region_id)
        .bind(walk.walk_difficulty_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update walk {}: {:?}", id, e);
            AppError::from_write(e)
        })?;

        if updated.is_some() {
            tracing::info!(walk_id = %id, "Updated walk");
        }
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>> {
        let deleted = sqlx::query_as::<_, Walk>(
            r#"
            DELETE FROM walks
            WHERE id = $1
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete walk {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if deleted.is_some() {
            tracing::info!(walk_id = %id, "Deleted walk");
        }
        Ok(deleted)
    }
}
