use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::features::regions::models::Region;
use crate::features::walk_difficulties::models::WalkDifficulty;
use crate::features::walks::models::Walk;

/// Rows of every entity, each table in insertion order
#[derive(Debug, Default)]
pub struct Tables {
    pub regions: Vec<Region>,
    pub walk_difficulties: Vec<WalkDifficulty>,
    pub walks: Vec<Walk>,
}

/// Shared handle to the in-memory tables. Clones point at the same data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_clones_share_tables() {
        let store = InMemoryStore::new();
        let other = store.clone();

        store.write().await.walk_difficulties.push(WalkDifficulty {
            id: Uuid::now_v7(),
            code: "Easy".to_string(),
        });

        assert_eq!(other.read().await.walk_difficulties.len(), 1);
        assert!(other.read().await.regions.is_empty());
    }
}
