use raylib::prelude::*;

use super::App;
use strata_render_raylib::conv::vec3_to_rl;

impl App {
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let eye = vec3_to_rl(self.walker.eye_position());
        let camera3d = self.cam.to_camera3d(eye, self.cfg.render.fov_y);
        let mut d = rl.begin_drawing(thread);
        d.clear_background(self.cfg.render.clear());
        {
            let mut d3 = d.begin_mode3D(camera3d);
            if let Some(cr) = &self.render {
                cr.draw(&mut d3, &self.cfg.render);
            }
        }

        let p = self.walker.pos;
        let lines = [
            format!(
                "seed {}  pos ({:.2}, {:.2}, {:.2})  {}",
                self.cfg.world.seed,
                p.x,
                p.y,
                p.z,
                if self.walker.grounded { "grounded" } else { "airborne" }
            ),
            format!(
                "faces {}  gpu tris {}  outline {:.1}px  fill {}  outline {}",
                self.terrain.mesh.stats.faces_emitted,
                self.render.as_ref().map_or(0, |r| r.triangle_count()),
                self.cfg.render.outline_thickness,
                self.cfg.render.draw_fill,
                self.cfg.render.draw_outline
            ),
            format!(
                "collision: {} corrections in {} passes{}",
                self.stats.corrections,
                self.stats.iterations,
                if self.stats.resolved { "" } else { " (unresolved)" }
            ),
            "WASD move  Shift run  Space jump  Tab mouse  R regen  O/F toggle  [ ] thickness"
                .to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            d.draw_text(line, 12, 12 + i as i32 * 22, 18, Color::DARKGRAY);
        }
        d.draw_fps(12, 12 + lines.len() as i32 * 22);
    }
}
