use strata_physics::{PhysicsError, PlayerConfig, Walker};
use strata_world::HeightField;

use super::App;
use crate::config::load_app_config;
use crate::terrain::Terrain;

/// Walker for reloaded tuning. Keeps the old motion state unless the new field buries it.
fn carry_walker(
    old: &Walker,
    cfg: &PlayerConfig,
    field: &HeightField,
) -> Result<Walker, PhysicsError> {
    let mut walker = Walker::from_config(cfg)?;
    walker.pos = old.pos;
    walker.vel = old.vel;
    walker.grounded = old.grounded;
    if walker.is_embedded(field) {
        log::info!(
            "reloaded terrain covers the player at ({:.2}, {:.2}, {:.2}), respawning",
            walker.pos.x,
            walker.pos.y,
            walker.pos.z
        );
        walker.respawn();
    }
    Ok(walker)
}

impl App {
    /// Drains watcher notifications and reloads the config once. On failure the old
    /// state is kept.
    pub fn process_config_file_events(&mut self) {
        let mut changed = false;
        for _ in self.config_event_rx.try_iter() {
            changed = true;
        }
        if !changed {
            return;
        }
        if !self.config_path.exists() {
            log::warn!("config missing: {}", self.config_path.display());
            return;
        }
        let cfg = match load_app_config(&self.config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!(
                    "config reload failed ({}): {}",
                    self.config_path.display(),
                    e
                );
                return;
            }
        };
        let terrain = match Terrain::build(&cfg.world, &cfg.mesh) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("terrain rebuild failed: {}", e);
                return;
            }
        };
        match carry_walker(&self.walker, &cfg.player, &terrain.field) {
            Ok(walker) => self.walker = walker,
            Err(e) => {
                log::warn!("player config rejected on reload: {}", e);
                return;
            }
        }
        self.resolver = cfg.player.resolver();
        self.terrain = terrain;
        self.cfg = cfg;
        self.terrain_dirty = true;
        log::info!("config reloaded from {}", self.config_path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_geom::Vec3;

    fn field(h: i32) -> HeightField {
        HeightField::from_heights(0, 0, 4, 4, vec![h; 16], 64).unwrap()
    }

    #[test]
    fn reload_keeps_a_walker_that_is_clear_of_the_terrain() {
        let cfg = PlayerConfig::default();
        let mut old = Walker::from_config(&cfg).unwrap();
        old.pos = Vec3::new(1.5, 2.0, 1.5);
        old.vel = Vec3::new(1.0, 0.0, 0.0);
        old.grounded = true;
        let w = carry_walker(&old, &cfg, &field(2)).unwrap();
        assert_eq!(w.pos, old.pos);
        assert_eq!(w.vel, old.vel);
        assert!(w.grounded);
    }

    #[test]
    fn reload_respawns_a_walker_buried_by_taller_terrain() {
        let cfg = PlayerConfig {
            spawn: [1.5, 20.0, 1.5],
            ..PlayerConfig::default()
        };
        let mut old = Walker::from_config(&cfg).unwrap();
        old.pos = Vec3::new(1.5, 2.0, 1.5);
        old.grounded = true;
        let w = carry_walker(&old, &cfg, &field(6)).unwrap();
        assert_eq!(w.pos, w.spawn);
        assert_eq!(w.vel, Vec3::ZERO);
        assert!(!w.grounded);
    }
}
