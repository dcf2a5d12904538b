mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::regions::models::Region;

pub use memory::InMemoryRegionRepository;
pub use postgres::PgRegionRepository;

/// Storage for regions
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// Every region, in insertion order
    async fn get_all(&self) -> Result<Vec<Region>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>>;

    /// Persist a new region under a freshly assigned id; `region.id` is ignored
    async fn add(&self, region: Region) -> Result<Region>;

    /// Overwrite every field of the region with `id`; `None` if there is no such row
    async fn update(&self, id: Uuid, region: Region) -> Result<Option<Region>>;

    /// Remove the region with `id` and return what was stored
    async fn delete(&self, id: Uuid) -> Result<Option<Region>>;
}
