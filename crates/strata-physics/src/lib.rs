//! Player collision against voxel terrain: MTV resolution and a gravity walker on top of it.
#![forbid(unsafe_code)]

pub mod config;
pub mod dims;
pub mod error;
pub mod resolve;
pub mod walker;

pub use config::PlayerConfig;
pub use dims::PlayerDims;
pub use error::PhysicsError;
pub use resolve::{
    Correction, DEFAULT_MAX_ITERATIONS, Resolution, ResolveInput, Resolver, minimum_translation,
};
pub use walker::{MAX_FRAME_DT, MoveIntent, Walker};
