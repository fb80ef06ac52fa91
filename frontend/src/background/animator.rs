//! Per-frame state of the fluid background.
//!
//! The animator owns the blob points and drives a [`Surface`]; it never
//! schedules frames itself. The host calls [`Animator::render_frame`] from its
//! frame callback and [`Animator::resize`] from its resize listener.

use log::{debug, info};
use rand::Rng;

use super::blob::{BlobConfig, BlobPoint};
use super::frame::{phase_at, GradientDisc, Palette, Viewport, Vignette};
use super::noise::{NoiseConfig, NoiseField};
use crate::config;
use crate::error::Result;

/// Drawing backend for the animator: a visible colour surface plus an
/// offscreen noise surface of the same size.
pub trait Surface {
    /// Resize both surfaces, discarding their contents.
    fn resize(&mut self, viewport: Viewport) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn fill_disc(&mut self, disc: &GradientDisc) -> Result<()>;
    fn fill_vignette(&mut self, vignette: &Vignette) -> Result<()>;
    fn put_noise(&mut self, noise: &NoiseField) -> Result<()>;
    /// Draw the noise surface onto the visible one at the origin, unscaled.
    fn composite_noise(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    NotStarted,
    Running,
    Stopped,
}

pub struct Animator<S, R> {
    surface: S,
    rng: R,
    viewport: Viewport,
    blobs: Vec<BlobPoint>,
    blob_config: BlobConfig,
    noise_config: NoiseConfig,
    palette: Palette,
    cycle_secs: f64,
    start_ms: f64,
    state: LoopState,
}

impl<S: Surface, R: Rng> Animator<S, R> {
    pub fn new(surface: S, rng: R, viewport: Viewport) -> Self {
        Self {
            surface,
            rng,
            viewport,
            blobs: Vec::new(),
            blob_config: BlobConfig::default(),
            noise_config: NoiseConfig::default(),
            palette: Palette::default(),
            cycle_secs: config::CYCLE_SECONDS,
            start_ms: 0.0,
            state: LoopState::NotStarted,
        }
    }

    #[cfg(test)]
    pub fn with_blob_config(mut self, blob_config: BlobConfig) -> Self {
        self.blob_config = blob_config;
        self
    }

    /// Size the surfaces, seed the blobs, capture the start time and draw
    /// the first noise frame. Calling it again on a running animator is a
    /// no-op.
    pub fn start(&mut self, now_ms: f64) -> Result<()> {
        if self.state != LoopState::NotStarted {
            return Ok(());
        }
        self.surface.resize(self.viewport)?;
        self.blobs = self.blob_config.seed(self.viewport, &mut self.rng);
        self.start_ms = now_ms;
        self.regenerate_noise()?;
        self.state = LoopState::Running;
        info!(
            "Fluid background started at {}x{} with {} blobs",
            self.viewport.width,
            self.viewport.height,
            self.blobs.len()
        );
        Ok(())
    }

    pub fn render_frame(&mut self, now_ms: f64) -> Result<()> {
        if self.state != LoopState::Running {
            return Ok(());
        }
        let elapsed = (now_ms - self.start_ms) / 1000.0;
        let phase = phase_at(elapsed, self.cycle_secs);

        self.surface.clear()?;

        let viewport = self.viewport;
        for blob in self.blobs.iter_mut() {
            blob.advance(viewport);
        }

        for (i, blob) in self.blobs.iter().enumerate() {
            let disc = self.palette.disc_for(blob, i, phase);
            self.surface.fill_disc(&disc)?;
        }

        self.surface.fill_vignette(&Vignette::for_viewport(viewport))?;
        self.surface.composite_noise()
    }

    /// Resize both surfaces and regenerate the grain once. Ignored unless
    /// the animator is running.
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        if self.state != LoopState::Running {
            debug!("Ignoring resize to {}x{} while {:?}", viewport.width, viewport.height, self.state);
            return Ok(());
        }
        self.viewport = viewport;
        self.surface.resize(viewport)?;
        self.regenerate_noise()?;
        debug!("Fluid background resized to {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            info!("Fluid background stopped");
        }
        self.state = LoopState::Stopped;
    }

    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[cfg(test)]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[cfg(test)]
    pub fn blobs(&self) -> &[BlobPoint] {
        &self.blobs
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn regenerate_noise(&mut self) -> Result<()> {
        let noise = NoiseField::generate(self.noise_config, self.viewport, &mut self.rng);
        // An empty canvas cannot hold image data.
        if noise.is_empty() {
            return Ok(());
        }
        self.surface.put_noise(&noise)
    }
}
