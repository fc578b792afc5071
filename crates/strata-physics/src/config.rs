use serde::Deserialize;
use strata_geom::Vec3;

use crate::dims::PlayerDims;
use crate::error::PhysicsError;
use crate::resolve::{DEFAULT_MAX_ITERATIONS, Resolver};

/// Player body and movement tuning. Every field is optional in TOML.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlayerConfig {
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_eye_height")]
    pub eye_height: f32,
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    #[serde(default = "default_run_mult")]
    pub run_mult: f32,
    #[serde(default = "default_jump_speed")]
    pub jump_speed: f32,
    /// Vertical acceleration, negative is down.
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Falling below this height respawns the player.
    #[serde(default = "default_kill_y")]
    pub kill_y: f32,
    #[serde(default = "default_spawn")]
    pub spawn: [f32; 3],
}

fn default_radius() -> f32 {
    0.25
}
fn default_height() -> f32 {
    1.8
}
fn default_eye_height() -> f32 {
    1.6
}
fn default_walk_speed() -> f32 {
    5.0
}
fn default_run_mult() -> f32 {
    2.0
}
fn default_jump_speed() -> f32 {
    7.5
}
fn default_gravity() -> f32 {
    -25.0
}
fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}
fn default_kill_y() -> f32 {
    -32.0
}
fn default_spawn() -> [f32; 3] {
    [16.0, 20.0, 16.0]
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            height: default_height(),
            eye_height: default_eye_height(),
            walk_speed: default_walk_speed(),
            run_mult: default_run_mult(),
            jump_speed: default_jump_speed(),
            gravity: default_gravity(),
            max_iterations: default_max_iterations(),
            kill_y: default_kill_y(),
            spawn: default_spawn(),
        }
    }
}

impl PlayerConfig {
    pub fn dims(&self) -> Result<PlayerDims, PhysicsError> {
        PlayerDims::new(self.radius, self.height)
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.max_iterations)
    }

    #[inline]
    pub fn spawn_point(&self) -> Vec3 {
        let [x, y, z] = self.spawn;
        Vec3::new(x, y, z)
    }
}
