use strata_geom::IVec3;
use strata_world::{HeightField, Solidity};

use crate::face::Face;
use crate::mesh_build::{ChunkMesh, MeshStats};
use crate::palette::MeshConfig;

/// Visits every face of every solid voxel whose outward neighbour is not solid.
///
/// Columns are walked in storage order (x fastest), voxels bottom to top, faces in
/// `Face::ALL` order. Returns voxel and face counts for the walk.
pub fn for_each_visible_face(field: &HeightField, mut f: impl FnMut(IVec3, Face)) -> MeshStats {
    let mut stats = MeshStats::default();
    for (wx, wz, h) in field.columns() {
        for y in 0..h {
            let v = IVec3::new(wx, y, wz);
            stats.voxels += 1;
            for face in Face::ALL {
                if field.is_solid_at(face.neighbor(v)) {
                    stats.faces_culled += 1;
                } else {
                    stats.faces_emitted += 1;
                    f(v, face);
                }
            }
        }
    }
    stats
}

/// Builds the triangle and outline streams for a whole chunk. Deterministic: the same field
/// and config always give identical buffers.
pub fn build_chunk_mesh(field: &HeightField, cfg: &MeshConfig) -> ChunkMesh {
    // Top + bottom per column plus the perimeter walls is a cheap lower bound.
    let (sx, sz) = field.size();
    let mut mesh = ChunkMesh::with_face_capacity(2 * sx * sz + 2 * (sx + sz));
    let stats = for_each_visible_face(field, |v, face| {
        mesh.add_face(face, v, cfg.layer_color(v.y), cfg.outline_color);
    });
    debug_assert_eq!(stats.faces_emitted, mesh.stats.faces_emitted);
    mesh.stats = stats;
    log::debug!(
        "meshed {}x{} chunk: {} voxels, {} faces emitted, {} culled, {} tri verts, {} outline verts",
        sx,
        sz,
        stats.voxels,
        stats.faces_emitted,
        stats.faces_culled,
        mesh.triangles.len(),
        mesh.outline.len()
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_voxel_shows_all_six_faces() {
        let field = HeightField::from_heights(0, 0, 1, 1, vec![1], 64).unwrap();
        let mesh = build_chunk_mesh(&field, &MeshConfig::default());
        assert_eq!(mesh.stats.voxels, 1);
        assert_eq!(mesh.stats.faces_emitted, 6);
        assert_eq!(mesh.stats.faces_culled, 0);
        assert_eq!(mesh.triangles.len(), 36);
        assert_eq!(mesh.outline.len(), 48);
    }

    #[test]
    fn shared_faces_between_columns_are_culled() {
        let field = HeightField::from_heights(0, 0, 2, 1, vec![1, 1], 64).unwrap();
        let stats = for_each_visible_face(&field, |_, _| {});
        assert_eq!(stats.faces_emitted, 10);
        assert_eq!(stats.faces_culled, 2);
    }
}
