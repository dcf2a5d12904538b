use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::walks::models::Walk;
use crate::features::walks::repositories::WalkRepository;
use crate::modules::storage::InMemoryStore;

/// In-memory implementation of WalkRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryWalkRepository {
    store: InMemoryStore,
}

impl InMemoryWalkRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WalkRepository for InMemoryWalkRepository {
    async fn get_all(&self) -> Result<Vec<Walk>> {
        Ok(self.store.read().await.walks.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Walk>> {
        let tables = self.store.read().await;
        Ok(tables.walks.iter().find(|w| w.id == id).cloned())
    }

    async fn add(&self, mut walk: Walk) -> Result<Walk> {
        walk.id = Uuid::now_v7();

        let mut tables = self.store.write().await;
        tables.walks.push(walk.clone());

        tracing::info!(walk_id = %walk.id, region_id = %walk.region_id, "Created walk");
        Ok(walk)
    }

    async fn update(&self, id: Uuid, walk: Walk) -> Result<Option<Walk>> {
        let mut tables = self.store.write().await;
        let Some(existing) = tables.walks.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };

        *existing = Walk { id, ..walk };

        tracing::info!(walk_id = %id, "Updated walk");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>> {
        let mut tables = self.store.write().await;
        let Some(pos) = tables.walks.iter().position(|w| w.id == id) else {
            return Ok(None);
        };

        let removed = tables.walks.remove(pos);

        tracing::info!(walk_id = %id, "Deleted walk");
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::models::Region;
    use crate::features::regions::{InMemoryRegionRepository, RegionRepository};

    fn walk(name: &str, region_id: Uuid) -> Walk {
        Walk {
            id: Uuid::nil(),
            name: name.to_string(),
            length: 5.5,
            region_id,
            walk_difficulty_id: Uuid::now_v7(),
        }
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let repo = InMemoryWalkRepository::new(InMemoryStore::new());
        let created = repo.add(walk("Rangitoto Summit", Uuid::now_v7())).await.unwrap();

        let replacement = walk("Rangitoto Summit Track", Uuid::now_v7());
        let updated = repo
            .update(created.id, replacement.clone())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, replacement.name);
        assert_eq!(updated.region_id, replacement.region_id);
        assert_eq!(updated.walk_difficulty_id, replacement.walk_difficulty_id);
    }

    #[tokio::test]
    async fn test_deleting_region_removes_its_walks() {
        let store = InMemoryStore::new();
        let regions = InMemoryRegionRepository::new(store.clone());
        let walks = InMemoryWalkRepository::new(store);

        let region = regions
            .add(Region {
                id: Uuid::nil(),
                code: "CAN".to_string(),
                name: "Canterbury".to_string(),
                area: 44_508.0,
                latitude: -43.5,
                longitude: 172.6,
                population: 655_000,
            })
            .await
            .unwrap();
        let elsewhere = Uuid::now_v7();

        walks.add(walk("Avon Heathcote", region.id)).await.unwrap();
        let kept = walks.add(walk("Kepler Track", elsewhere)).await.unwrap();

        regions.delete(region.id).await.unwrap();

        assert_eq!(walks.get_all().await.unwrap(), vec![kept]);
    }
}
