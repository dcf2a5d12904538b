mod walk_dto;

pub use walk_dto::{AddWalkRequest, UpdateWalkRequest, WalkDto};
