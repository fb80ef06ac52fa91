use rand::Rng;

use super::frame::Viewport;
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseConfig {
    /// Exclusive upper bound of the grey value.
    pub max_value: u8,
    pub alpha: u8,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            max_value: config::NOISE_MAX_VALUE,
            alpha: config::NOISE_ALPHA,
        }
    }
}

/// Row-major RGBA grain, sized to the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseField {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl NoiseField {
    pub fn generate<R: Rng + ?Sized>(config: NoiseConfig, viewport: Viewport, rng: &mut R) -> Self {
        let len = viewport.width as usize * viewport.height as usize * 4;
        let mut pixels = vec![0u8; len];
        for px in pixels.chunks_exact_mut(4) {
            let v = if config.max_value == 0 {
                0
            } else {
                rng.gen_range(0..config.max_value)
            };
            px[0] = v;
            px[1] = v;
            px[2] = v;
            px[3] = config.alpha;
        }
        Self {
            width: viewport.width,
            height: viewport.height,
            pixels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_pixel_is_faint_grey_with_fixed_alpha() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = NoiseField::generate(NoiseConfig::default(), Viewport::new(64, 48), &mut rng);
        assert_eq!(field.pixels.len(), 64 * 48 * 4);
        for px in field.pixels.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert!(px[0] < 15);
            assert_eq!(px[3], 13);
        }
    }

    #[test]
    fn grain_is_not_constant() {
        let mut rng = StdRng::seed_from_u64(9);
        let field = NoiseField::generate(NoiseConfig::default(), Viewport::new(32, 32), &mut rng);
        let first = field.pixels[0];
        assert!(field.pixels.chunks_exact(4).any(|px| px[0] != first));
    }

    #[test]
    fn empty_viewport_yields_empty_field() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = NoiseField::generate(NoiseConfig::default(), Viewport::new(0, 720), &mut rng);
        assert!(field.is_empty());
        assert_eq!(field.width, 0);
    }
}
