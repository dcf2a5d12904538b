use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::regions::models::Region;
use crate::features::regions::repositories::RegionRepository;
use crate::modules::storage::InMemoryStore;

/// In-memory implementation of RegionRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryRegionRepository {
    store: InMemoryStore,
}

impl InMemoryRegionRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn get_all(&self) -> Result<Vec<Region>> {
        Ok(self.store.read().await.regions.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>> {
        let tables = self.store.read().await;
        Ok(tables.regions.iter().find(|r| r.id == id).cloned())
    }

    async fn add(&self, mut region: Region) -> Result<Region> {
        region.id = Uuid::now_v7();

        let mut tables = self.store.write().await;
        tables.regions.push(region.clone());

        tracing::info!(region_id = %region.id, code = %region.code, "Created region");
        Ok(region)
    }

    async fn update(&self, id: Uuid, region: Region) -> Result<Option<Region>> {
        let mut tables = self.store.write().await;
        let Some(existing) = tables.regions.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        *existing = Region { id, ..region };

        tracing::info!(region_id = %id, "Updated region");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        let mut tables = self.store.write().await;
        let Some(pos) = tables.regions.iter().position(|r| r.id == id) else {
            return Ok(None);
        };

        let removed = tables.regions.remove(pos);
        // Walks in this region go with it
        tables.walks.retain(|w| w.region_id != id);

        tracing::info!(region_id = %id, "Deleted region");
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(code: &str, name: &str) -> Region {
        Region {
            id: Uuid::nil(),
            code: code.to_string(),
            name: name.to_string(),
            area: 100.0,
            latitude: -40.0,
            longitude: 175.0,
            population: 1000,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_get_returns_it() {
        let repo = InMemoryRegionRepository::new(InMemoryStore::new());

        let created = repo.add(region("NSN", "Nelson")).await.unwrap();
        assert!(!created.id.is_nil());

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_all_keeps_insertion_order() {
        let repo = InMemoryRegionRepository::new(InMemoryStore::new());
        assert!(repo.get_all().await.unwrap().is_empty());

        repo.add(region("NTL", "Northland")).await.unwrap();
        repo.add(region("AUK", "Auckland")).await.unwrap();
        repo.add(region("WKO", "Waikato")).await.unwrap();

        let codes: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.code)
            .collect();
        assert_eq!(codes, vec!["NTL", "AUK", "WKO"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_but_not_id() {
        let repo = InMemoryRegionRepository::new(InMemoryStore::new());
        let created = repo.add(region("STL", "Southland")).await.unwrap();

        let mut changed = region("STL", "Murihiku");
        changed.id = Uuid::now_v7();
        let updated = repo.update(created.id, changed).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Murihiku");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_return_none() {
        let repo = InMemoryRegionRepository::new(InMemoryStore::new());
        let id = Uuid::now_v7();

        assert!(repo.update(id, region("X", "X")).await.unwrap().is_none());
        assert!(repo.delete(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_row() {
        let repo = InMemoryRegionRepository::new(InMemoryStore::new());
        let created = repo.add(region("OTA", "Otago")).await.unwrap();

        let removed = repo.delete(created.id).await.unwrap();
        assert_eq!(removed, Some(created.clone()));
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
