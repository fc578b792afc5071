use strata_mesh_cpu::{ChunkMesh, MeshConfig, build_chunk_mesh};
use strata_world::{HeightField, WorldError, WorldGenConfig};

/// A generated chunk together with its CPU mesh. Rebuilt wholesale on every change.
pub struct Terrain {
    pub field: HeightField,
    pub mesh: ChunkMesh,
}

impl Terrain {
    pub fn build(world: &WorldGenConfig, mesh: &MeshConfig) -> Result<Self, WorldError> {
        let field = HeightField::generate(world)?;
        let mesh = build_chunk_mesh(&field, mesh);
        log::info!(
            "terrain seed={} {}x{}: {} voxels, {} faces ({} culled)",
            world.seed,
            world.size_x,
            world.size_z,
            mesh.stats.voxels,
            mesh.stats.faces_emitted,
            mesh.stats.faces_culled
        );
        Ok(Self { field, mesh })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chunk_builds_a_non_empty_mesh() {
        let t = Terrain::build(&WorldGenConfig::default(), &MeshConfig::default()).unwrap();
        assert_eq!(t.field.size(), (32, 32));
        assert_eq!(t.mesh.stats.voxels, t.field.voxel_count());
        assert!(!t.mesh.is_empty());
    }

    #[test]
    fn invalid_world_is_an_error() {
        let world = WorldGenConfig {
            max_height: 0,
            ..WorldGenConfig::default()
        };
        assert!(Terrain::build(&world, &MeshConfig::default()).is_err());
    }
}
