use std::f64::consts::TAU;

use super::blob::BlobPoint;
use super::color::{mix_fraction, Rgb, Rgba};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Phase angle for `elapsed_secs`, completing one turn every `cycle_secs`.
pub fn phase_at(elapsed_secs: f64, cycle_secs: f64) -> f64 {
    elapsed_secs / cycle_secs * TAU
}

/// A filled circle shaded by a radial gradient from `inner` at the centre to
/// `outer` at `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDisc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub inner: Rgba,
    pub outer: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vignette {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub inner: Rgba,
    pub outer: Rgba,
    pub width: f64,
    pub height: f64,
}

impl Vignette {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let width = viewport.width as f64;
        let height = viewport.height as f64;
        let black = Rgb::new(0, 0, 0);
        Self {
            cx: width * 0.5,
            cy: height * 0.5,
            inner_radius: width.min(height) * config::VIGNETTE_INNER_RATIO,
            outer_radius: width.max(height) * config::VIGNETTE_OUTER_RATIO,
            inner: black.with_alpha(0.0),
            outer: black.with_alpha(config::VIGNETTE_ALPHA),
            width,
            height,
        }
    }
}

/// Endpoint colours and opacity of the blob gradients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub from: Rgb,
    pub to: Rgb,
    pub alpha: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            from: config::CHARCOAL,
            to: config::HUNTER_GREEN,
            alpha: config::BLOB_ALPHA,
        }
    }
}

impl Palette {
    pub fn disc_for(&self, blob: &BlobPoint, index: usize, phase: f64) -> GradientDisc {
        let color = self.from.lerp(self.to, mix_fraction(phase, index));
        GradientDisc {
            x: blob.x,
            y: blob.y,
            radius: blob.r,
            inner: color.with_alpha(self.alpha),
            outer: self.from.with_alpha(0.0),
        }
    }
}
