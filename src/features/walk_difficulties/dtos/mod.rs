mod walk_difficulty_dto;

pub use walk_difficulty_dto::{
    AddWalkDifficultyRequest, UpdateWalkDifficultyRequest, WalkDifficultyDto,
};
