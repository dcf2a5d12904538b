pub mod walk_handler;

pub use walk_handler::{
    __path_add_walk, __path_delete_walk, __path_get_walk, __path_list_walks, __path_update_walk,
    add_walk, delete_walk, get_walk, list_walks, update_walk, WalkState,
};
