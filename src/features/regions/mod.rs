//! Regions of New Zealand.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/Regions` | List all regions |
//! | GET | `/Regions/{id}` | Get region by id |
//! | POST | `/Regions` | Create a region |
//! | PUT | `/Regions/{id}` | Replace a region |
//! | DELETE | `/Regions/{id}` | Delete a region (and its walks) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;

pub use repositories::{InMemoryRegionRepository, PgRegionRepository, RegionRepository};
