//! Height-field terrain for a single chunk and the solidity queries built on it.
#![forbid(unsafe_code)]

pub mod column_grid;
pub mod error;
pub mod heightfield;
pub mod noise;
pub mod solidity;
pub mod worldgen;

pub use column_grid::ColumnGrid;
pub use error::WorldError;
pub use heightfield::{HeightField, column_height};
pub use noise::{HeightNoise, NoiseHeights};
pub use solidity::{Solidity, candidates_in};
pub use worldgen::{
    MAX_CHUNK_SIDE, MAX_HEIGHT_LIMIT, NoiseKind, WorldGenConfig, check_extent,
    load_config_from_path,
};
