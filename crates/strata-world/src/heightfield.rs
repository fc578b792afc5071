use strata_geom::IVec3;

use crate::column_grid::ColumnGrid;
use crate::error::WorldError;
use crate::noise::{HeightNoise, NoiseHeights};
use crate::solidity::Solidity;
use crate::worldgen::{WorldGenConfig, check_extent};

/// Maps a noise sample to a column height: clamp to `[0,1]`, `floor(n * amplitude) + 1`,
/// then clamp into `[1, max_height]`.
#[inline]
pub fn column_height(n: f32, amplitude: f32, max_height: i32) -> i32 {
    let n = if n.is_nan() { 0.0 } else { n.clamp(0.0, 1.0) };
    let h = (n * amplitude).floor() as i32 + 1;
    h.clamp(1, max_height.max(1))
}

/// Column heights of one chunk. Voxel `(x, y, z)` is solid iff `0 <= y < height(x, z)`.
///
/// Immutable once built; regenerate to change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightField {
    columns: ColumnGrid<i32>,
    max_height: i32,
}

impl HeightField {
    pub fn generate(cfg: &WorldGenConfig) -> Result<Self, WorldError> {
        cfg.validate()?;
        let noise = NoiseHeights::from_config(cfg);
        let field = Self::generate_with(
            cfg.origin_x,
            cfg.origin_z,
            cfg.size_x,
            cfg.size_z,
            &noise,
            cfg.amplitude,
            cfg.max_height,
        )?;
        log::debug!(
            "generated {}x{} height field at ({}, {}) seed={} freq={} -> {} voxels",
            cfg.size_x,
            cfg.size_z,
            cfg.origin_x,
            cfg.origin_z,
            cfg.seed,
            cfg.frequency,
            field.voxel_count()
        );
        Ok(field)
    }

    /// Samples `noise` over an explicit extent. Extents that leave the `i32` coordinate
    /// range are rejected like in [`WorldGenConfig::validate`].
    pub fn generate_with(
        origin_x: i32,
        origin_z: i32,
        size_x: usize,
        size_z: usize,
        noise: &impl HeightNoise,
        amplitude: f32,
        max_height: i32,
    ) -> Result<Self, WorldError> {
        check_extent(origin_x, origin_z, size_x, size_z)?;
        let max_height = max_height.max(1);
        let columns = ColumnGrid::from_fn(origin_x, origin_z, size_x, size_z, |wx, wz| {
            column_height(noise.sample(wx, wz), amplitude, max_height)
        });
        Ok(Self {
            columns,
            max_height,
        })
    }

    /// Builds a field from explicit heights laid out x fastest. Heights are clamped into
    /// `[1, max_height]` like generated ones.
    pub fn from_heights(
        origin_x: i32,
        origin_z: i32,
        size_x: usize,
        size_z: usize,
        heights: Vec<i32>,
        max_height: i32,
    ) -> Result<Self, WorldError> {
        check_extent(origin_x, origin_z, size_x, size_z)?;
        let max_height = max_height.max(1);
        let heights: Vec<i32> = heights
            .into_iter()
            .map(|h| h.clamp(1, max_height))
            .collect();
        let columns = ColumnGrid::from_vec(origin_x, origin_z, size_x, size_z, heights).map_err(
            |cells| WorldError::HeightCount {
                expected: size_x * size_z,
                actual: cells.len(),
            },
        )?;
        Ok(Self {
            columns,
            max_height,
        })
    }

    #[inline]
    pub fn origin(&self) -> (i32, i32) {
        self.columns.origin()
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        self.columns.size()
    }

    #[inline]
    pub fn max_height(&self) -> i32 {
        self.max_height
    }

    /// Column height in world coordinates; 0 outside the extent.
    #[inline]
    pub fn height(&self, wx: i32, wz: i32) -> i32 {
        self.columns.get(wx, wz).copied().unwrap_or(0)
    }

    /// Raw heights, x fastest.
    #[inline]
    pub fn heights(&self) -> &[i32] {
        self.columns.cells()
    }

    /// `(wx, wz, height)` for every column.
    pub fn columns(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        self.columns.iter().map(|(wx, wz, &h)| (wx, wz, h))
    }

    pub fn voxel_count(&self) -> usize {
        self.heights().iter().map(|&h| h as usize).sum()
    }

    /// Min corner of every solid voxel, column by column, bottom to top.
    pub fn solid_voxels(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.columns()
            .flat_map(|(wx, wz, h)| (0..h).map(move |y| IVec3::new(wx, y, wz)))
    }
}

impl Solidity for HeightField {
    #[inline]
    fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        y >= 0 && y < self.height(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_height_maps_unit_range() {
        assert_eq!(column_height(0.0, 16.0, 64), 1);
        assert_eq!(column_height(0.15, 16.0, 64), 3);
        assert_eq!(column_height(0.999, 16.0, 64), 16);
        assert_eq!(column_height(1.0, 16.0, 64), 17);
    }

    #[test]
    fn column_height_clamps_out_of_range_samples() {
        assert_eq!(column_height(-3.0, 16.0, 64), 1);
        assert_eq!(column_height(7.0, 16.0, 64), 17);
        assert_eq!(column_height(f32::NAN, 16.0, 64), 1);
        assert_eq!(column_height(1.0, 500.0, 64), 64);
    }

    #[test]
    fn from_heights_rejects_wrong_length() {
        let err = HeightField::from_heights(0, 0, 2, 2, vec![1, 2, 3], 64).unwrap_err();
        assert!(matches!(
            err,
            WorldError::HeightCount {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn explicit_extents_are_checked() {
        let err = HeightField::from_heights(i32::MAX, 0, 1, 1, vec![1], 64).unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
        let err = HeightField::generate_with(0, i32::MIN, 1, 1, &|_: i32, _: i32| 0.5f32, 16.0, 64)
            .unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
        let f = HeightField::from_heights(i32::MAX - 2, 0, 2, 1, vec![2, 2], 64).unwrap();
        assert!(f.is_solid(i32::MAX - 1, 1, 0));
        assert!(!f.is_solid(i32::MAX, 0, 0));
    }

    #[test]
    fn from_heights_clamps() {
        let f = HeightField::from_heights(0, 0, 2, 1, vec![0, 99], 64).unwrap();
        assert_eq!(f.heights(), &[1, 64]);
    }

    #[test]
    fn solid_voxels_matches_voxel_count() {
        let f = HeightField::from_heights(3, -2, 2, 2, vec![1, 2, 3, 4], 64).unwrap();
        let voxels: Vec<IVec3> = f.solid_voxels().collect();
        assert_eq!(voxels.len(), f.voxel_count());
        assert_eq!(voxels.len(), 10);
        assert!(voxels.iter().all(|v| f.is_solid(v.x, v.y, v.z)));
        assert_eq!(voxels[0], IVec3::new(3, 0, -2));
    }
}
