//! CPU meshing crate: visible-face mesher and outline builder (engine-only).
#![forbid(unsafe_code)]

mod build;
mod constants;
mod face;
mod mesh_build;
mod palette;

pub use build::{build_chunk_mesh, for_each_visible_face};
pub use constants::{FLOATS_PER_VERTEX, OUTLINE_VERTICES_PER_FACE, TRIANGLE_VERTICES_PER_FACE};
pub use face::Face;
pub use mesh_build::{ChunkMesh, MeshStats, Vertex, interleave};
pub use palette::{MeshConfig, Rgb};
