use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::WorldError;

/// Largest chunk side accepted on either axis.
pub const MAX_CHUNK_SIDE: usize = 4096;
/// Largest column height accepted.
pub const MAX_HEIGHT_LIMIT: i32 = 4096;

/// Checks that a chunk extent and its one-column neighbour ring fit in `i32` world
/// coordinates and that neither side exceeds [`MAX_CHUNK_SIDE`].
pub fn check_extent(
    origin_x: i32,
    origin_z: i32,
    size_x: usize,
    size_z: usize,
) -> Result<(), WorldError> {
    if size_x == 0 || size_z == 0 {
        return Err(WorldError::InvalidConfig(format!(
            "chunk size must be non-zero, got {}x{}",
            size_x, size_z
        )));
    }
    if size_x > MAX_CHUNK_SIDE || size_z > MAX_CHUNK_SIDE {
        return Err(WorldError::InvalidConfig(format!(
            "chunk size {}x{} exceeds {}x{}",
            size_x, size_z, MAX_CHUNK_SIDE, MAX_CHUNK_SIDE
        )));
    }
    for (axis, origin, size) in [("x", origin_x, size_x), ("z", origin_z, size_z)] {
        // Neighbour lookups reach origin - 1 and origin + size.
        let lo = i64::from(origin) - 1;
        let hi = i64::from(origin) + size as i64;
        if lo < i64::from(i32::MIN) || hi > i64::from(i32::MAX) {
            return Err(WorldError::InvalidConfig(format!(
                "origin_{axis} = {origin} with size {size} leaves the i32 coordinate range"
            )));
        }
    }
    Ok(())
}

/// Worldgen parameters for one chunk. Every field is optional in TOML.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WorldGenConfig {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_max_height")]
    pub max_height: i32,
    #[serde(default)]
    pub origin_x: i32,
    #[serde(default)]
    pub origin_z: i32,
    #[serde(default = "default_chunk_size")]
    pub size_x: usize,
    #[serde(default = "default_chunk_size")]
    pub size_z: usize,
    #[serde(default = "default_noise")]
    pub noise: NoiseKind,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    OpenSimplex2,
    Perlin,
    Value,
}

fn default_seed() -> i32 {
    123_456
}
fn default_frequency() -> f32 {
    0.05
}
fn default_amplitude() -> f32 {
    16.0
}
fn default_max_height() -> i32 {
    64
}
fn default_chunk_size() -> usize {
    32
}
fn default_noise() -> NoiseKind {
    NoiseKind::OpenSimplex2
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
            max_height: default_max_height(),
            origin_x: 0,
            origin_z: 0,
            size_x: default_chunk_size(),
            size_z: default_chunk_size(),
            noise: default_noise(),
        }
    }
}

impl WorldGenConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, WorldError> {
        let cfg: WorldGenConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), WorldError> {
        check_extent(self.origin_x, self.origin_z, self.size_x, self.size_z)?;
        if !(1..=MAX_HEIGHT_LIMIT).contains(&self.max_height) {
            return Err(WorldError::InvalidConfig(format!(
                "max_height must be in 1..={}, got {}",
                MAX_HEIGHT_LIMIT, self.max_height
            )));
        }
        if !self.frequency.is_finite() {
            return Err(WorldError::InvalidConfig("frequency must be finite".into()));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(WorldError::InvalidConfig(format!(
                "amplitude must be finite and non-negative, got {}",
                self.amplitude
            )));
        }
        Ok(())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<WorldGenConfig, WorldError> {
    let s = fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    WorldGenConfig::from_toml_str(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = WorldGenConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, WorldGenConfig::default());
        assert_eq!(cfg.amplitude, 16.0);
        assert_eq!(cfg.max_height, 64);
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let cfg = WorldGenConfig::from_toml_str(
            r#"
            seed = 7
            size_x = 4
            noise = "perlin"
        "#,
        )
        .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.size_x, 4);
        assert_eq!(cfg.size_z, 32);
        assert_eq!(cfg.noise, NoiseKind::Perlin);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = WorldGenConfig::from_toml_str("size_z = 0").unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
    }

    #[test]
    fn extents_past_the_coordinate_range_are_rejected() {
        let near_max = WorldGenConfig {
            origin_x: i32::MAX - 1,
            size_x: 2,
            size_z: 2,
            ..WorldGenConfig::default()
        };
        assert!(matches!(near_max.validate(), Err(WorldError::InvalidConfig(_))));
        let at_min = WorldGenConfig {
            origin_z: i32::MIN,
            ..WorldGenConfig::default()
        };
        assert!(matches!(at_min.validate(), Err(WorldError::InvalidConfig(_))));

        let last_fit = WorldGenConfig {
            origin_x: i32::MAX - 2,
            origin_z: i32::MIN + 1,
            size_x: 2,
            size_z: 2,
            ..WorldGenConfig::default()
        };
        assert!(last_fit.validate().is_ok());
    }

    #[test]
    fn oversized_chunks_and_heights_are_rejected() {
        let err = WorldGenConfig::from_toml_str(&format!("size_x = {}", MAX_CHUNK_SIDE + 1))
            .unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
        let wide = WorldGenConfig {
            size_x: usize::MAX,
            size_z: usize::MAX,
            ..WorldGenConfig::default()
        };
        assert!(wide.validate().is_err());
        let tall = WorldGenConfig {
            max_height: i32::MAX,
            ..WorldGenConfig::default()
        };
        assert!(tall.validate().is_err());
    }

    #[test]
    fn negative_amplitude_is_rejected() {
        let err = WorldGenConfig::from_toml_str("amplitude = -1.0").unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = WorldGenConfig::from_toml_str("seed = \"x\"").unwrap_err();
        assert!(matches!(err, WorldError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config_from_path(Path::new("/nonexistent/strata/world.toml")).unwrap_err();
        assert!(matches!(err, WorldError::Io { .. }));
    }
}
