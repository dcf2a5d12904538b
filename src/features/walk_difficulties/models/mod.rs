mod walk_difficulty;

pub use walk_difficulty::WalkDifficulty;
