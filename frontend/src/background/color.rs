//! Colour helpers for the fluid background.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear interpolation towards `other`, rounded to the
    /// nearest integer. `mix` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, mix: f64) -> Rgb {
        let mix = mix.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 * (1.0 - mix) + b as f64 * mix).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

/// A colour with a fractional alpha, formatted as a CSS `rgba(...)` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Blend fraction for blob `index` at the given phase angle.
///
/// Offsetting by the index keeps the blobs from pulsing in lockstep.
pub fn mix_fraction(phase: f64, index: usize) -> f64 {
    ((phase + index as f64).sin() + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CHARCOAL, HUNTER_GREEN};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn mix_fraction_follows_offset_sine() {
        for i in 0..6 {
            let phase = 1.3;
            let expected = ((phase + i as f64).sin() + 1.0) / 2.0;
            let mix = mix_fraction(phase, i);
            assert!((mix - expected).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&mix));
        }
    }

    #[test]
    fn mix_fraction_extremes() {
        assert!((mix_fraction(FRAC_PI_2, 0) - 1.0).abs() < 1e-12);
        assert!(mix_fraction(-FRAC_PI_2, 0).abs() < 1e-12);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(CHARCOAL.lerp(HUNTER_GREEN, 0.0), CHARCOAL);
        assert_eq!(CHARCOAL.lerp(HUNTER_GREEN, 1.0), HUNTER_GREEN);
        // 26 + 18 * 0.5 = 35, 26 + 69 * 0.5 = 60.5 -> 61, 26 + 51 * 0.5 = 51.5 -> 52
        assert_eq!(CHARCOAL.lerp(HUNTER_GREEN, 0.5), Rgb::new(35, 61, 52));
    }

    #[test]
    fn lerp_clamps_mix() {
        assert_eq!(CHARCOAL.lerp(HUNTER_GREEN, 1.7), HUNTER_GREEN);
        assert_eq!(CHARCOAL.lerp(HUNTER_GREEN, -0.2), CHARCOAL);
    }

    #[test]
    fn rgba_formats_as_css() {
        assert_eq!(HUNTER_GREEN.with_alpha(0.35).to_string(), "rgba(44,95,77,0.35)");
        assert_eq!(Rgb::new(0, 0, 0).with_alpha(0.0).to_string(), "rgba(0,0,0,0)");
    }
}
