use strata_geom::{Aabb, Vec3};

use crate::error::PhysicsError;

/// Player box size. Always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerDims {
    radius: f32,
    height: f32,
}

impl PlayerDims {
    pub fn new(radius: f32, height: f32) -> Result<Self, PhysicsError> {
        let ok = radius.is_finite() && height.is_finite() && radius > 0.0 && height > 0.0;
        if !ok {
            return Err(PhysicsError::InvalidDimensions { radius, height });
        }
        Ok(Self { radius, height })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Box for a player standing with the centre of its feet at `pos`.
    #[inline]
    pub fn aabb_at(&self, pos: Vec3) -> Aabb {
        Aabb::player(pos, self.radius, self.height)
    }
}
