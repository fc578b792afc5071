use raylib::prelude::*;

/// Mouse-look camera. Translation comes from the walker; this only tracks orientation.
pub struct LookCamera {
    pub yaw: f32,   // degrees
    pub pitch: f32, // degrees
    pub mouse_sensitivity: f32,
    pub captured: bool,
}

impl LookCamera {
    pub fn new() -> Self {
        Self {
            yaw: -90.0,
            pitch: -20.0,
            mouse_sensitivity: 0.2,
            captured: true,
        }
    }

    pub fn forward(&self) -> Vector3 {
        let yaw_rad = self.yaw.to_radians();
        let pitch_rad = self.pitch.to_radians();
        Vector3::new(
            yaw_rad.cos() * pitch_rad.cos(),
            pitch_rad.sin(),
            yaw_rad.sin() * pitch_rad.cos(),
        )
        .normalized()
    }

    pub fn to_camera3d(&self, eye: Vector3, fov_y: f32) -> Camera3D {
        Camera3D::perspective(eye, eye + self.forward(), Vector3::new(0.0, 1.0, 0.0), fov_y)
    }

    pub fn update_look(&mut self, rl: &mut RaylibHandle) {
        // Toggle mouse capture with Tab
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            self.captured = !self.captured;
            if self.captured {
                rl.disable_cursor();
            } else {
                rl.enable_cursor();
            }
        }
        if self.captured {
            let md = rl.get_mouse_delta();
            self.apply_mouse_delta(md.x, md.y);
        }
    }

    fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch -= dy * self.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-89.0, 89.0);
    }
}
