use serde::Deserialize;
use std::error::Error;
use std::path::Path;

use strata_mesh_cpu::MeshConfig;
use strata_physics::PlayerConfig;
use strata_render_raylib::RenderConfig;
use strata_world::WorldGenConfig;

/// Everything the viewer reads from `strata.toml`. Each section is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub world: WorldGenConfig,
    #[serde(default)]
    pub mesh: MeshConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: AppConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        self.world.validate()?;
        self.player.dims()?;
        Ok(())
    }

    /// Command-line values win over the file.
    pub fn apply_overrides(&mut self, seed: Option<i32>, size: Option<usize>) {
        if let Some(seed) = seed {
            self.world.seed = seed;
        }
        if let Some(size) = size {
            self.world.size_x = size;
            self.world.size_z = size;
        }
    }
}

pub fn load_app_config(path: &Path) -> Result<AppConfig, Box<dyn Error>> {
    let s = std::fs::read_to_string(path)?;
    AppConfig::from_toml_str(&s)
}

/// Loads `path`, falling back to defaults when the file does not exist.
pub fn load_or_default(path: &Path) -> Result<AppConfig, Box<dyn Error>> {
    if !path.exists() {
        log::info!("{} not found, using built-in defaults", path.display());
        return Ok(AppConfig::default());
    }
    load_app_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_optional() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());

        let cfg = AppConfig::from_toml_str(
            r#"
            [world]
            seed = 9
            [render]
            outline_thickness = 3.0
            draw_fill = false
        "#,
        )
        .unwrap();
        assert_eq!(cfg.world.seed, 9);
        assert_eq!(cfg.world.size_x, 32);
        assert_eq!(cfg.render.outline_thickness, 3.0);
        assert!(!cfg.render.draw_fill);
        assert_eq!(cfg.mesh, MeshConfig::default());
    }

    #[test]
    fn invalid_sections_are_rejected() {
        assert!(AppConfig::from_toml_str("[world]\nsize_x = 0").is_err());
        assert!(AppConfig::from_toml_str("[player]\nradius = -1.0").is_err());
        assert!(AppConfig::from_toml_str("[world\n").is_err());
    }

    #[test]
    fn overrides_replace_seed_and_size() {
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(Some(42), Some(8));
        assert_eq!(cfg.world.seed, 42);
        assert_eq!((cfg.world.size_x, cfg.world.size_z), (8, 8));
        cfg.apply_overrides(None, None);
        assert_eq!(cfg.world.seed, 42);
    }

    #[test]
    fn oversized_or_out_of_range_overrides_fail_validation() {
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(None, Some(strata_world::MAX_CHUNK_SIDE + 1));
        assert!(cfg.validate().is_err());
        cfg.apply_overrides(None, Some(usize::MAX));
        assert!(cfg.validate().is_err());

        let cfg = AppConfig::from_toml_str(&format!("[world]\norigin_x = {}", i32::MAX - 4));
        assert!(cfg.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_or_default(Path::new("/nonexistent/strata.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }
}
