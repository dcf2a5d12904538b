mod region_dto;

pub use region_dto::{AddRegionRequest, RegionDto, UpdateRegionRequest};
