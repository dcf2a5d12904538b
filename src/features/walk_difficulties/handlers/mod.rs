pub mod walk_difficulty_handler;

pub use walk_difficulty_handler::{
    __path_add_walk_difficulty, __path_delete_walk_difficulty, __path_get_walk_difficulty,
    __path_list_walk_difficulties, __path_update_walk_difficulty, add_walk_difficulty,
    delete_walk_difficulty, get_walk_difficulty, list_walk_difficulties, update_walk_difficulty,
};
