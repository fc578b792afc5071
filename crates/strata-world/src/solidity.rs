use strata_geom::{Aabb, IVec3};

/// "Is the voxel at integer `(x, y, z)` occupied?"
pub trait Solidity {
    fn is_solid(&self, x: i32, y: i32, z: i32) -> bool;

    #[inline]
    fn is_solid_at(&self, v: IVec3) -> bool {
        self.is_solid(v.x, v.y, v.z)
    }
}

impl<F> Solidity for F
where
    F: Fn(i32, i32, i32) -> bool,
{
    #[inline]
    fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self(x, y, z)
    }
}

/// Broad phase: every solid voxel whose unit cell intersects `bounds`, including cells that
/// only touch it. Ordered by y, then z, then x.
pub fn candidates_in<S: Solidity + ?Sized>(oracle: &S, bounds: &Aabb) -> Vec<IVec3> {
    if !bounds.min.is_finite() || !bounds.max.is_finite() {
        return Vec::new();
    }
    let cell = |v: f32| v.floor() as i32;
    let (x0, x1) = (cell(bounds.min.x), cell(bounds.max.x));
    let (y0, y1) = (cell(bounds.min.y), cell(bounds.max.y));
    let (z0, z1) = (cell(bounds.min.z), cell(bounds.max.z));
    let mut out = Vec::new();
    for y in y0..=y1 {
        for z in z0..=z1 {
            for x in x0..=x1 {
                if oracle.is_solid(x, y, z) {
                    out.push(IVec3::new(x, y, z));
                }
            }
        }
    }
    out
}
