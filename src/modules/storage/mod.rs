//! Storage backends for the feature repositories
//!
//! `Repositories` bundles one trait object per entity; it is built either over a
//! PostgreSQL pool or over a shared in-memory store.

mod memory_store;

use std::sync::Arc;

use sqlx::PgPool;

use crate::features::regions::{InMemoryRegionRepository, PgRegionRepository, RegionRepository};
use crate::features::walk_difficulties::{
    InMemoryWalkDifficultyRepository, PgWalkDifficultyRepository, WalkDifficultyRepository,
};
use crate::features::walks::{InMemoryWalkRepository, PgWalkRepository, WalkRepository};

pub use memory_store::InMemoryStore;

#[derive(Clone)]
pub struct Repositories {
    pub regions: Arc<dyn RegionRepository>,
    pub walk_difficulties: Arc<dyn WalkDifficultyRepository>,
    pub walks: Arc<dyn WalkRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            regions: Arc::new(PgRegionRepository::new(pool.clone())),
            walk_difficulties: Arc::new(PgWalkDifficultyRepository::new(pool.clone())),
            walks: Arc::new(PgWalkRepository::new(pool)),
        }
    }

    /// All three repositories share one store, so deletes cascade to walks
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            regions: Arc::new(InMemoryRegionRepository::new(store.clone())),
            walk_difficulties: Arc::new(InMemoryWalkDifficultyRepository::new(store.clone())),
            walks: Arc::new(InMemoryWalkRepository::new(store)),
        }
    }
}
