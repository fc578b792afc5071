use strata_geom::{Aabb, Axis, IVec3, Vec3};

use crate::dims::PlayerDims;

pub const DEFAULT_MAX_ITERATIONS: u32 = 4;

// Corrections smaller than this leave the velocity component alone.
const VELOCITY_EPSILON: f32 = 1e-6;

/// Smallest push that separates `player` from `voxel` along a single axis.
///
/// Zero when the boxes do not overlap on every axis. Equal depths pick X, then Y, then Z.
/// The push points away from the voxel centre; a player centred exactly on it goes positive.
pub fn minimum_translation(player: &Aabb, voxel: &Aabb) -> Vec3 {
    let d = player.overlap_depths(voxel);
    if d.x <= 0.0 || d.y <= 0.0 || d.z <= 0.0 {
        return Vec3::ZERO;
    }
    let axis = if d.x <= d.y && d.x <= d.z {
        Axis::X
    } else if d.y <= d.z {
        Axis::Y
    } else {
        Axis::Z
    };
    let depth = d.axis(axis);
    let sign = if player.center().axis(axis) < voxel.center().axis(axis) {
        -1.0
    } else {
        1.0
    };
    Vec3::along(axis, sign * depth)
}

/// Snapshot handed to the resolver. Candidates are visited in the given order.
#[derive(Clone, Copy, Debug)]
pub struct ResolveInput<'a> {
    pub position: Vec3,
    pub velocity: Vec3,
    pub dims: PlayerDims,
    pub candidates: &'a [IVec3],
}

/// One push applied during resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correction {
    pub voxel: IVec3,
    pub offset: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Set when some correction lifted the player out of a voxel below.
    pub grounded: bool,
    /// False when the pass cap ran out with a candidate still overlapping.
    pub resolved: bool,
    /// Passes executed, including the final clean one.
    pub iterations: u32,
    pub corrections: Vec<Correction>,
}

impl Resolution {
    #[inline]
    pub fn total_offset(&self) -> Vec3 {
        self.corrections
            .iter()
            .fold(Vec3::ZERO, |acc, c| acc + c.offset)
    }
}

/// Iterative MTV resolver over a fixed candidate list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolver {
    max_iterations: u32,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Resolver {
    /// At least one pass always runs.
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }

    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn resolve(&self, input: ResolveInput<'_>) -> Resolution {
        let ResolveInput {
            mut position,
            mut velocity,
            dims,
            candidates,
        } = input;
        let mut grounded = false;
        let mut corrections = Vec::new();
        let mut iterations = 0;
        let mut clean = false;

        while iterations < self.max_iterations {
            iterations += 1;
            let mut corrected = false;
            for &voxel in candidates {
                let player = dims.aabb_at(position);
                let block = Aabb::voxel(voxel);
                if !player.overlaps(&block) {
                    continue;
                }
                let mtv = minimum_translation(&player, &block);
                if mtv == Vec3::ZERO {
                    continue;
                }
                position += mtv;
                corrections.push(Correction { voxel, offset: mtv });
                corrected = true;

                if mtv.x.abs() > VELOCITY_EPSILON {
                    velocity.x = 0.0;
                }
                if mtv.y.abs() > VELOCITY_EPSILON {
                    velocity.y = 0.0;
                    if mtv.y > 0.0 {
                        grounded = true;
                    }
                }
                if mtv.z.abs() > VELOCITY_EPSILON {
                    velocity.z = 0.0;
                }
            }
            if !corrected {
                clean = true;
                break;
            }
        }

        let resolved = clean || {
            let player = dims.aabb_at(position);
            !candidates
                .iter()
                .any(|&v| player.overlaps(&Aabb::voxel(v)))
        };
        if !resolved {
            log::debug!(
                "collision unresolved after {} passes at ({:.3}, {:.3}, {:.3}), {} corrections",
                iterations,
                position.x,
                position.y,
                position.z,
                corrections.len()
            );
        }

        Resolution {
            position,
            velocity,
            grounded,
            resolved,
            iterations,
            corrections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(min: [f32; 3], max: [f32; 3]) -> Aabb {
        Aabb::new(Vec3::new(min[0], min[1], min[2]), Vec3::new(max[0], max[1], max[2]))
    }

    #[test]
    fn touching_boxes_need_no_push() {
        let v = Aabb::voxel(IVec3::new(0, 0, 0));
        let p = cube([1.0, 0.0, 0.0], [2.0, 1.0, 1.0]);
        assert_eq!(minimum_translation(&p, &v), Vec3::ZERO);
    }

    #[test]
    fn push_follows_shallowest_axis_and_side() {
        let v = Aabb::voxel(IVec3::new(0, 0, 0));
        let below = cube([0.25, -0.75, 0.25], [0.75, 0.25, 0.75]);
        assert_eq!(minimum_translation(&below, &v), Vec3::new(0.0, -0.25, 0.0));
        let east = cube([0.875, 0.0, 0.0], [1.875, 1.0, 1.0]);
        assert_eq!(minimum_translation(&east, &v), Vec3::new(0.125, 0.0, 0.0));
        let north = cube([0.0, 0.0, -0.5], [1.0, 1.0, 0.0625]);
        assert_eq!(minimum_translation(&north, &v), Vec3::new(0.0, 0.0, -0.0625));
    }

    #[test]
    fn equal_depths_prefer_x_then_y_then_z() {
        let v = Aabb::voxel(IVec3::new(0, 0, 0));
        let all = cube([0.75, 0.75, 0.75], [1.75, 1.75, 1.75]);
        assert_eq!(minimum_translation(&all, &v), Vec3::new(0.25, 0.0, 0.0));
        let yz = cube([0.0, 0.75, 0.75], [1.0, 1.75, 1.75]);
        assert_eq!(minimum_translation(&yz, &v), Vec3::new(0.0, 0.25, 0.0));
    }

    #[test]
    fn zero_cap_still_runs_one_pass() {
        assert_eq!(Resolver::new(0).max_iterations(), 1);
        assert_eq!(Resolver::default().max_iterations(), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn empty_candidates_are_a_clean_pass() {
        let dims = PlayerDims::new(0.25, 1.8).unwrap();
        let r = Resolver::default().resolve(ResolveInput {
            position: Vec3::new(1.0, 2.0, 3.0),
            velocity: Vec3::new(0.5, -1.0, 0.0),
            dims,
            candidates: &[],
        });
        assert!(r.resolved);
        assert!(!r.grounded);
        assert_eq!(r.iterations, 1);
        assert_eq!(r.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(r.velocity, Vec3::new(0.5, -1.0, 0.0));
        assert_eq!(r.total_offset(), Vec3::ZERO);
    }
}
