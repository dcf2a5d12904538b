pub mod region_handler;

pub use region_handler::{
    __path_add_region, __path_delete_region, __path_get_region, __path_list_regions,
    __path_update_region, add_region, delete_region, get_region, list_regions, update_region,
};
