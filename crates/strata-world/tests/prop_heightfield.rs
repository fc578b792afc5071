use proptest::prelude::*;
use strata_world::{HeightField, NoiseKind, Solidity, WorldGenConfig};

fn small_config() -> impl Strategy<Value = WorldGenConfig> {
    (
        any::<i32>(),
        0.005f32..0.2,
        0.0f32..80.0,
        1i32..=64,
        -500i32..500,
        -500i32..500,
        1usize..=12,
        1usize..=12,
        prop_oneof![
            Just(NoiseKind::OpenSimplex2),
            Just(NoiseKind::Perlin),
            Just(NoiseKind::Value)
        ],
    )
        .prop_map(
            |(seed, frequency, amplitude, max_height, origin_x, origin_z, size_x, size_z, noise)| {
                WorldGenConfig {
                    seed,
                    frequency,
                    amplitude,
                    max_height,
                    origin_x,
                    origin_z,
                    size_x,
                    size_z,
                    noise,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn heights_stay_in_range(cfg in small_config()) {
        let f = HeightField::generate(&cfg).unwrap();
        prop_assert_eq!(f.heights().len(), cfg.size_x * cfg.size_z);
        for (_, _, h) in f.columns() {
            prop_assert!(h >= 1 && h <= cfg.max_height);
        }
    }

    #[test]
    fn generation_is_deterministic(cfg in small_config()) {
        let a = HeightField::generate(&cfg).unwrap();
        let b = HeightField::generate(&cfg).unwrap();
        prop_assert_eq!(a, b);
    }

    // Solidity is exactly "in extent and 0 <= y < height"
    #[test]
    fn solidity_matches_column_heights(cfg in small_config()) {
        let f = HeightField::generate(&cfg).unwrap();
        let (ox, oz) = f.origin();
        let (sx, sz) = f.size();
        for wz in oz - 1..=oz + sz as i32 {
            for wx in ox - 1..=ox + sx as i32 {
                let inside = wx >= ox && wx < ox + sx as i32 && wz >= oz && wz < oz + sz as i32;
                let h = f.height(wx, wz);
                prop_assert_eq!(inside, h > 0);
                for y in -2..=cfg.max_height + 1 {
                    let expect = inside && y >= 0 && y < h;
                    prop_assert_eq!(f.is_solid(wx, y, wz), expect);
                }
            }
        }
    }
}

#[test]
fn overlapping_chunks_agree_on_shared_columns() {
    let a = HeightField::generate(&WorldGenConfig {
        size_x: 8,
        size_z: 8,
        ..WorldGenConfig::default()
    })
    .unwrap();
    let b = HeightField::generate(&WorldGenConfig {
        origin_x: 4,
        origin_z: 4,
        size_x: 8,
        size_z: 8,
        ..WorldGenConfig::default()
    })
    .unwrap();
    for wz in 4..8 {
        for wx in 4..8 {
            assert_eq!(a.height(wx, wz), b.height(wx, wz));
        }
    }
}

#[test]
fn four_by_four_with_known_corner_column() {
    // 0.15 * 16 = 2.4 -> floor 2 -> height 3
    let noise = |wx: i32, wz: i32| -> f32 { if (wx, wz) == (0, 0) { 0.15 } else { 0.5 } };
    let f = HeightField::generate_with(0, 0, 4, 4, &noise, 16.0, 64).unwrap();
    assert_eq!(f.height(0, 0), 3);
    assert_eq!(f.height(1, 0), 9);
    assert!(f.is_solid(0, 0, 0));
    assert!(f.is_solid(0, 2, 0));
    assert!(!f.is_solid(0, 3, 0));
    assert!(!f.is_solid(0, -1, 0));
    assert!(!f.is_solid(-1, 0, 0));
    assert!(!f.is_solid(4, 0, 0));
}
