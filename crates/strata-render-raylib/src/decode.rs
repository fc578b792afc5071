use raylib::prelude::{Color, Vector3};
use strata_mesh_cpu::FLOATS_PER_VERTEX;

use crate::conv::rgb_to_color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RlVertex {
    pub pos: Vector3,
    pub color: Color,
}

/// Splits an interleaved `[px, py, pz, r, g, b]` stream into raylib vertices.
///
/// A trailing partial vertex is dropped and logged.
pub fn decode_interleaved(data: &[f32]) -> Vec<RlVertex> {
    let chunks = data.chunks_exact(FLOATS_PER_VERTEX);
    let rest = chunks.remainder().len();
    if rest != 0 {
        log::warn!(
            "dropping {} trailing floats from a stride-{} vertex stream",
            rest,
            FLOATS_PER_VERTEX
        );
    }
    chunks
        .map(|f| RlVertex {
            pos: Vector3::new(f[0], f[1], f[2]),
            color: rgb_to_color([f[3], f[4], f[5]]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_geom::IVec3;
    use strata_mesh_cpu::{ChunkMesh, Face};

    #[test]
    fn decodes_position_and_colour() {
        let v = decode_interleaved(&[1.0, 2.0, 3.0, 1.0, 0.0, 0.5]);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].pos, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v[0].color, Color::new(255, 0, 128, 255));
    }

    #[test]
    fn trailing_partial_vertex_is_dropped() {
        let v = decode_interleaved(&[0.0; 6 * 2 + 4]);
        assert_eq!(v.len(), 2);
        assert!(decode_interleaved(&[0.0; 5]).is_empty());
    }

    #[test]
    fn mesh_streams_decode_to_whole_faces() {
        let mut m = ChunkMesh::default();
        m.add_face(Face::PosX, IVec3::new(0, 0, 0), [0.2, 0.7, 0.2], [0.0; 3]);
        m.add_face(Face::NegY, IVec3::new(4, 1, -2), [0.5, 0.5, 0.5], [0.0; 3]);
        assert_eq!(decode_interleaved(&m.triangles_interleaved()).len(), 12);
        let outline = decode_interleaved(&m.outline_interleaved());
        assert_eq!(outline.len(), 16);
        assert!(outline.iter().all(|v| v.color == Color::new(0, 0, 0, 255)));
    }
}
