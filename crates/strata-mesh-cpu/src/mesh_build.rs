use strata_geom::{IVec3, Vec3};

use crate::constants::{
    FLOATS_PER_VERTEX, OUTLINE_VERTICES_PER_FACE, QUAD_EDGES, QUAD_TRIANGLES,
    TRIANGLE_VERTICES_PER_FACE,
};
use crate::face::Face;
use crate::palette::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub pos: Vec3,
    pub color: Rgb,
}

impl Vertex {
    #[inline]
    pub fn to_floats(self) -> [f32; FLOATS_PER_VERTEX] {
        [
            self.pos.x,
            self.pos.y,
            self.pos.z,
            self.color[0],
            self.color[1],
            self.color[2],
        ]
    }
}

/// Flattens vertices into the interleaved `[px, py, pz, r, g, b]` upload layout.
pub fn interleave(vertices: &[Vertex]) -> Vec<f32> {
    let mut out = Vec::with_capacity(vertices.len() * FLOATS_PER_VERTEX);
    for v in vertices {
        out.extend_from_slice(&v.to_floats());
    }
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub voxels: usize,
    pub faces_emitted: usize,
    pub faces_culled: usize,
}

/// Filled triangles plus the outline segments tracing each face.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkMesh {
    pub triangles: Vec<Vertex>,
    pub outline: Vec<Vertex>,
    pub stats: MeshStats,
}

impl ChunkMesh {
    pub fn with_face_capacity(faces: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(faces * TRIANGLE_VERTICES_PER_FACE),
            outline: Vec::with_capacity(faces * OUTLINE_VERTICES_PER_FACE),
            stats: MeshStats::default(),
        }
    }

    /// Appends one face of voxel `v`: two triangles and four outline edges.
    pub fn add_face(&mut self, face: Face, v: IVec3, color: Rgb, outline_color: Rgb) {
        let corners = face.corners(v);
        for &i in &QUAD_TRIANGLES {
            self.triangles.push(Vertex {
                pos: corners[i],
                color,
            });
        }
        for &(a, b) in &QUAD_EDGES {
            self.outline.push(Vertex {
                pos: corners[a],
                color: outline_color,
            });
            self.outline.push(Vertex {
                pos: corners[b],
                color: outline_color,
            });
        }
        self.stats.faces_emitted += 1;
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.triangles.len() / TRIANGLE_VERTICES_PER_FACE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangles_interleaved(&self) -> Vec<f32> {
        interleave(&self.triangles)
    }

    pub fn outline_interleaved(&self) -> Vec<f32> {
        interleave(&self.outline)
    }
}
