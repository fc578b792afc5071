use raylib::prelude::*;

use super::{App, FrameStats};
use crate::player::read_intent;
use crate::terrain::Terrain;

impl App {
    pub fn step(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, dt: f32) {
        self.process_config_file_events();
        self.handle_hotkeys(rl);
        if self.terrain_dirty {
            self.upload_terrain(rl, thread);
        }

        self.cam.update_look(rl);
        let intent = read_intent(rl);
        let res = self.walker.step(
            &intent,
            self.cam.yaw,
            dt,
            &self.terrain.field,
            &self.resolver,
        );
        self.stats = FrameStats {
            corrections: res.corrections.len(),
            iterations: res.iterations,
            resolved: res.resolved,
        };
    }

    fn handle_hotkeys(&mut self, rl: &RaylibHandle) {
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            self.regenerate_with_next_seed();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_O) {
            self.cfg.render.draw_outline = !self.cfg.render.draw_outline;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F) {
            self.cfg.render.draw_fill = !self.cfg.render.draw_fill;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT_BRACKET) {
            self.cfg.render.nudge_thickness(-0.5);
            log::debug!("outline thickness {}", self.cfg.render.outline_thickness);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT_BRACKET) {
            self.cfg.render.nudge_thickness(0.5);
            log::debug!("outline thickness {}", self.cfg.render.outline_thickness);
        }
    }

    fn regenerate_with_next_seed(&mut self) {
        let mut world = self.cfg.world.clone();
        world.seed = world.seed.wrapping_add(1);
        match Terrain::build(&world, &self.cfg.mesh) {
            Ok(t) => {
                self.terrain = t;
                self.cfg.world = world;
                self.walker.respawn();
                self.terrain_dirty = true;
            }
            Err(e) => log::warn!("regenerate failed: {}", e),
        }
    }
}
