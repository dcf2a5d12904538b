#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use fake::{faker::address::en::StateName, Fake};
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::regions::models::Region;
#[cfg(test)]
use crate::features::regions::RegionRepository;
#[cfg(test)]
use crate::features::walk_difficulties::WalkDifficultyRepository;
#[cfg(test)]
use crate::features::walk_difficulties::models::WalkDifficulty;
#[cfg(test)]
use crate::modules::storage::Repositories;

/// Server over every feature route, backed by a fresh in-memory store.
/// The repositories are returned too so tests can inspect storage directly.
#[cfg(test)]
pub fn test_server() -> (TestServer, Repositories) {
    let repos = Repositories::in_memory();
    let server = TestServer::new(crate::features::routes(&repos)).unwrap();
    (server, repos)
}

#[cfg(test)]
pub fn random_region_request() -> serde_json::Value {
    let name: String = StateName().fake();
    serde_json::json!({
        "code": name.chars().take(3).collect::<String>().to_uppercase(),
        "name": name,
        "area": (1.0..50_000.0).fake::<f64>(),
        "latitude": (-47.0..-34.0).fake::<f64>(),
        "longitude": (166.0..179.0).fake::<f64>(),
        "population": (0..2_000_000i64).fake::<i64>(),
    })
}

#[cfg(test)]
pub async fn seed_region(repos: &Repositories, code: &str) -> Region {
    repos
        .regions
        .add(Region {
            id: Uuid::nil(),
            code: code.to_string(),
            name: StateName().fake(),
            area: (1.0..50_000.0).fake(),
            latitude: (-47.0..-34.0).fake(),
            longitude: (166.0..179.0).fake(),
            population: (0..2_000_000i64).fake(),
        })
        .await
        .unwrap()
}

#[cfg(test)]
pub async fn seed_walk_difficulty(repos: &Repositories, code: &str) -> WalkDifficulty {
    repos
        .walk_difficulties
        .add(WalkDifficulty {
            id: Uuid::nil(),
            code: code.to_string(),
        })
        .await
        .unwrap()
}
