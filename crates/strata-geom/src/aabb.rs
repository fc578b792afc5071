use crate::{Axis, IVec3, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Unit box of the voxel whose min corner sits at `v`.
    #[inline]
    pub fn voxel(v: IVec3) -> Self {
        let min = v.as_vec3();
        Self {
            min,
            max: min + Vec3::splat(1.0),
        }
    }

    /// Player volume: `pos` is the centre of the feet, `radius` is the horizontal half-width.
    #[inline]
    pub fn player(pos: Vec3, radius: f32, height: f32) -> Self {
        Self {
            min: Vec3::new(pos.x - radius, pos.y, pos.z - radius),
            max: Vec3::new(pos.x + radius, pos.y + height, pos.z + radius),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn translated(&self, t: Vec3) -> Self {
        Self {
            min: self.min + t,
            max: self.max + t,
        }
    }

    /// Grows the box by `margin` on every side.
    #[inline]
    pub fn inflated(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }

    /// Smallest box containing both.
    #[inline]
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: Vec3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Vec3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Strict interval overlap on all three axes. Touching faces do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            !(self.max.axis(axis) <= other.min.axis(axis)
                || self.min.axis(axis) >= other.max.axis(axis))
        })
    }

    /// Per-axis penetration depth, `min(max) - max(min)`. Non-positive on separated axes.
    #[inline]
    pub fn overlap_depths(&self, other: &Aabb) -> Vec3 {
        Vec3::new(
            self.max.x.min(other.max.x) - self.min.x.max(other.min.x),
            self.max.y.min(other.max.y) - self.min.y.max(other.min.y),
            self.max.z.min(other.max.z) - self.min.z.max(other.min.z),
        )
    }
}
