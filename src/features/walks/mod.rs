//! Walking tracks. Every walk belongs to a region and carries a difficulty;
//! both references are checked on create and update.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/Walks` | List all walks |
//! | GET | `/Walks/{id}` | Get walk by id |
//! | POST | `/Walks` | Create a walk |
//! | PUT | `/Walks/{id}` | Replace a walk |
//! | DELETE | `/Walks/{id}` | Delete a walk |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;

pub use handlers::WalkState;
pub use repositories::{InMemoryWalkRepository, PgWalkRepository, WalkRepository};
