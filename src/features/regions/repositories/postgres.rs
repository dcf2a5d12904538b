use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::Region;
use crate::features::regions::repositories::RegionRepository;

/// PostgreSQL implementation of RegionRepository
pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn get_all(&self) -> Result<Vec<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            SELECT id, code, name, area, latitude, longitude, population
            FROM regions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list regions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            SELECT id, code, name, area, latitude, longitude, population
            FROM regions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get region {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn add(&self, region: Region) -> Result<Region> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            INSERT INTO regions (id, code, name, area, latitude, longitude, population)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, code, name, area, latitude, longitude, population
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&region.code)
        .bind(&region.name)
        .bind(region.area)
        .bind(region.latitude)
        .bind(region.longitude)
        .bind(region.population)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create region: {:?}", e);
            AppError::from_write(e)
        })?;

        tracing::info!(region_id = %region.id, code = %region.code, "Created region");
        Ok(region)
    }

    async fn update(&self, id: Uuid, region: Region) -> Result<Option<Region>> {
        let updated = sqlx::query_as::<_, Region>(
            r#"
            UPDATE regions
            SET code = $2, name = $3, area = $4, latitude = $5, longitude = $6, population = $7
            WHERE id = $1
            RETURNING id, code, name, area, latitude, longitude, population
            "#,
        )
        .bind(id)
        .bind(&region.code)
        .bind(&region.name)
        .bind(region.area)
        .bind(region.latitude)
        .bind(region.longitude)
        .bind(region.population)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update region {}: {:?}", id, e);
            AppError::from_write(e)
        })?;

        if updated.is_some() {
            tracing::info!(region_id = %id, "Updated region");
        }
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        let deleted = sqlx::query_as::<_, Region>(
            r#"
            DELETE FROM regions
            WHERE id = $1
            RETURNING id, code, name, area, latitude, longitude, population
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete region {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if deleted.is_some() {
            tracing::info!(region_id = %id, "Deleted region");
        }
        Ok(deleted)
    }
}
