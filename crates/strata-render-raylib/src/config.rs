use raylib::prelude::Color;
use serde::Deserialize;
use strata_mesh_cpu::Rgb;

use crate::conv::rgb_to_color;

/// Per-draw presentation settings, passed explicitly to every draw call.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_outline_thickness")]
    pub outline_thickness: f32,
    #[serde(default = "default_true")]
    pub draw_fill: bool,
    #[serde(default = "default_true")]
    pub draw_outline: bool,
    #[serde(default = "default_clear_color")]
    pub clear_color: Rgb,
    /// Vertical field of view in degrees.
    #[serde(default = "default_fov_y")]
    pub fov_y: f32,
}

fn default_outline_thickness() -> f32 {
    1.5
}
fn default_true() -> bool {
    true
}
fn default_clear_color() -> Rgb {
    [0.53, 0.80, 0.92]
}
fn default_fov_y() -> f32 {
    70.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            outline_thickness: default_outline_thickness(),
            draw_fill: true,
            draw_outline: true,
            clear_color: default_clear_color(),
            fov_y: default_fov_y(),
        }
    }
}

impl RenderConfig {
    pub const MIN_THICKNESS: f32 = 0.5;
    pub const MAX_THICKNESS: f32 = 10.0;

    pub fn clear(&self) -> Color {
        rgb_to_color(self.clear_color)
    }

    /// Adjusts the outline width, kept within `[MIN_THICKNESS, MAX_THICKNESS]`.
    pub fn nudge_thickness(&mut self, delta: f32) {
        self.outline_thickness =
            (self.outline_thickness + delta).clamp(Self::MIN_THICKNESS, Self::MAX_THICKNESS);
    }
}
