use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::worldgen::{NoiseKind, WorldGenConfig};

/// Source of per-column terrain samples.
///
/// Implementations return a value nominally in `[0, 1]` for a world column. The height
/// field clamps whatever comes back, so a source may overshoot slightly.
pub trait HeightNoise {
    fn sample(&self, wx: i32, wz: i32) -> f32;
}

impl<F> HeightNoise for F
where
    F: Fn(i32, i32) -> f32,
{
    #[inline]
    fn sample(&self, wx: i32, wz: i32) -> f32 {
        self(wx, wz)
    }
}

/// Seeded fastnoise-lite source. Raw samples in `[-1, 1]` are remapped to `[0, 1]`.
pub struct NoiseHeights {
    noise: FastNoiseLite,
}

impl NoiseHeights {
    pub fn new(seed: i32, frequency: f32, kind: NoiseKind) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(match kind {
            NoiseKind::OpenSimplex2 => NoiseType::OpenSimplex2,
            NoiseKind::Perlin => NoiseType::Perlin,
            NoiseKind::Value => NoiseType::Value,
        }));
        noise.set_frequency(Some(frequency));
        Self { noise }
    }

    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        Self::new(cfg.seed, cfg.frequency, cfg.noise)
    }
}

impl HeightNoise for NoiseHeights {
    #[inline]
    fn sample(&self, wx: i32, wz: i32) -> f32 {
        let n = self.noise.get_noise_2d(wx as f32, wz as f32);
        (n + 1.0) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_near_unit_range() {
        let src = NoiseHeights::new(123_456, 0.05, NoiseKind::OpenSimplex2);
        for wz in -20..20 {
            for wx in -20..20 {
                let n = src.sample(wx, wz);
                assert!(n.is_finite());
                assert!((-0.01..=1.01).contains(&n), "sample {n} at ({wx},{wz})");
            }
        }
    }

    #[test]
    fn same_seed_same_samples() {
        let a = NoiseHeights::new(9, 0.05, NoiseKind::Perlin);
        let b = NoiseHeights::new(9, 0.05, NoiseKind::Perlin);
        for i in -50..50 {
            assert_eq!(a.sample(i, i * 3).to_bits(), b.sample(i, i * 3).to_bits());
        }
    }

    #[test]
    fn closures_are_noise_sources() {
        let flat = |_: i32, _: i32| 0.5f32;
        assert_eq!(flat.sample(10, -4), 0.5);
    }
}
