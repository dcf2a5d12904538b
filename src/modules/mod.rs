//! Modules layer - Infrastructure components behind the feature repositories

pub mod storage;
