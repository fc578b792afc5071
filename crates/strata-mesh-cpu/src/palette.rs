use serde::Deserialize;

/// Linear RGB in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Cosmetic mesher settings: elevation banding and outline colour.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MeshConfig {
    #[serde(default = "default_band_size")]
    pub band_size: i32,
    #[serde(default = "default_palette")]
    pub palette: Vec<Rgb>,
    #[serde(default = "default_outline_color")]
    pub outline_color: Rgb,
}

fn default_band_size() -> i32 {
    3
}
fn default_palette() -> Vec<Rgb> {
    vec![
        [0.0, 0.2, 0.7],    // water
        [0.9, 0.85, 0.6],   // sand
        [0.2, 0.7, 0.2],    // grass
        [0.45, 0.33, 0.21], // dirt
        [0.5, 0.5, 0.5],    // stone
        [0.85, 0.85, 0.85], // rock
        [1.0, 1.0, 1.0],    // snow
    ]
}
fn default_outline_color() -> Rgb {
    [0.0, 0.0, 0.0]
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            band_size: default_band_size(),
            palette: default_palette(),
            outline_color: default_outline_color(),
        }
    }
}

impl MeshConfig {
    /// Colour of the band containing layer `y`. Degenerate settings fall back to white.
    #[inline]
    pub fn layer_color(&self, y: i32) -> Rgb {
        let Some(last) = self.palette.len().checked_sub(1) else {
            return [1.0, 1.0, 1.0];
        };
        let band = y.div_euclid(self.band_size.max(1)).clamp(0, last as i32);
        self.palette[band as usize]
    }
}
