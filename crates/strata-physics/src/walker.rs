use strata_geom::{Aabb, Vec3};
use strata_world::{Solidity, candidates_in};

use crate::config::PlayerConfig;
use crate::dims::PlayerDims;
use crate::error::PhysicsError;
use crate::resolve::{Resolution, ResolveInput, Resolver};

// Longer frames are split so a fall never skips through a voxel.
const MAX_SUBSTEP: f32 = 1.0 / 30.0;
/// Simulated time per `step` is capped here; the rest of a stalled frame is dropped.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Movement request for one frame. `forward` and `strafe` are in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    pub forward: f32,
    pub strafe: f32,
    pub jump: bool,
    pub run: bool,
}

/// Gravity-driven player body. `pos` is the centre of the feet.
#[derive(Clone, Debug)]
pub struct Walker {
    pub pos: Vec3,
    pub vel: Vec3,
    pub grounded: bool,
    pub spawn: Vec3,
    dims: PlayerDims,
    eye_height: f32,
    walk_speed: f32,
    run_mult: f32,
    jump_speed: f32,
    gravity: f32,
    kill_y: f32,
}

impl Walker {
    pub fn from_config(cfg: &PlayerConfig) -> Result<Self, PhysicsError> {
        let spawn = cfg.spawn_point();
        Ok(Self {
            pos: spawn,
            vel: Vec3::ZERO,
            grounded: false,
            spawn,
            dims: cfg.dims()?,
            eye_height: cfg.eye_height,
            walk_speed: cfg.walk_speed,
            run_mult: cfg.run_mult,
            jump_speed: cfg.jump_speed,
            gravity: cfg.gravity,
            kill_y: cfg.kill_y,
        })
    }

    #[inline]
    pub fn dims(&self) -> PlayerDims {
        self.dims
    }

    pub fn eye_position(&self) -> Vec3 {
        Vec3::new(self.pos.x, self.pos.y + self.eye_height, self.pos.z)
    }

    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.vel = Vec3::ZERO;
        self.grounded = false;
    }

    /// True when the body strictly overlaps a solid voxel where it stands.
    pub fn is_embedded<S: Solidity + ?Sized>(&self, oracle: &S) -> bool {
        let body = self.dims.aabb_at(self.pos);
        candidates_in(oracle, &body)
            .into_iter()
            .any(|v| body.overlaps(&Aabb::voxel(v)))
    }

    /// Horizontal wish direction for `intent` with the camera facing `yaw_deg`.
    pub fn wish_dir(intent: &MoveIntent, yaw_deg: f32) -> Vec3 {
        let yaw = yaw_deg.to_radians();
        let fwd = Vec3::new(yaw.cos(), 0.0, yaw.sin());
        let right = fwd.cross(Vec3::UP);
        let wish = fwd * intent.forward + right * intent.strafe;
        if wish.length() > 0.0 {
            wish.normalized()
        } else {
            Vec3::ZERO
        }
    }

    /// Advances one frame of at most [`MAX_FRAME_DT`] and returns the last resolution.
    pub fn step<S: Solidity + ?Sized>(
        &mut self,
        intent: &MoveIntent,
        yaw_deg: f32,
        dt: f32,
        oracle: &S,
        resolver: &Resolver,
    ) -> Resolution {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        let mut res = self.substep(intent, yaw_deg, h, oracle, resolver);
        for _ in 1..substeps {
            if self.pos.y < self.kill_y {
                break;
            }
            res = self.substep(intent, yaw_deg, h, oracle, resolver);
        }

        if self.pos.y < self.kill_y {
            log::info!(
                "player fell below y={} at ({:.2}, {:.2}), respawning",
                self.kill_y,
                self.pos.x,
                self.pos.z
            );
            self.respawn();
        }
        res
    }

    fn substep<S: Solidity + ?Sized>(
        &mut self,
        intent: &MoveIntent,
        yaw_deg: f32,
        dt: f32,
        oracle: &S,
        resolver: &Resolver,
    ) -> Resolution {
        // Horizontal motion is kinematic toward the wish direction.
        let speed = self.walk_speed * if intent.run { self.run_mult } else { 1.0 };
        let wish = Self::wish_dir(intent, yaw_deg) * speed;
        self.vel.x = wish.x;
        self.vel.z = wish.z;

        self.vel.y += self.gravity * dt;
        if self.grounded && intent.jump {
            self.vel.y = self.jump_speed;
        }

        let start = self.pos;
        self.pos += self.vel * dt;

        let swept = self.dims.aabb_at(start).union(&self.dims.aabb_at(self.pos));
        let candidates = candidates_in(oracle, &swept);
        let res = resolver.resolve(ResolveInput {
            position: self.pos,
            velocity: self.vel,
            dims: self.dims,
            candidates: &candidates,
        });
        self.pos = res.position;
        self.vel = res.velocity;
        self.grounded = res.grounded;
        res
    }
}
