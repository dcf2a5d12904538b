//! Walk difficulty reference data. Codes are unique.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;

pub use repositories::{
    InMemoryWalkDifficultyRepository, PgWalkDifficultyRepository, WalkDifficultyRepository,
};
