//! Shared constants for strata-mesh-cpu.

/// Two triangles per face.
pub const TRIANGLE_VERTICES_PER_FACE: usize = 6;
/// Four edges per face, two endpoints each.
pub const OUTLINE_VERTICES_PER_FACE: usize = 8;
/// Interleaved layout: position xyz, then color rgb.
pub const FLOATS_PER_VERTEX: usize = 6;

// Quad corner indices for the two triangles and the four outline edges.
pub(crate) const QUAD_TRIANGLES: [usize; TRIANGLE_VERTICES_PER_FACE] = [0, 1, 2, 2, 3, 0];
pub(crate) const QUAD_EDGES: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];
