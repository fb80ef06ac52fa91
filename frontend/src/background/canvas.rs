use std::f64::consts::TAU;

use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData};

use super::animator::Surface;
use super::color::Rgba;
use super::frame::{GradientDisc, Viewport, Vignette};
use super::noise::NoiseField;
use crate::error::{DomError, Result};

/// The visible `<canvas>` plus an offscreen canvas holding the cached grain.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    noise_canvas: HtmlCanvasElement,
    noise_ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn new(document: &Document, canvas: HtmlCanvasElement) -> Result<Self> {
        let noise_canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DomError::UnexpectedElement("canvas"))?;
        let ctx = context_2d(&canvas)?;
        let noise_ctx = context_2d(&noise_canvas)?;
        Ok(Self {
            canvas,
            ctx,
            noise_canvas,
            noise_ctx,
            viewport: Viewport::default(),
        })
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")?
        .ok_or(DomError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DomError::NoContext)
}

fn gradient_stops(gradient: &web_sys::CanvasGradient, inner: Rgba, outer: Rgba) -> Result<()> {
    gradient.add_color_stop(0.0, &inner.to_string())?;
    gradient.add_color_stop(1.0, &outer.to_string())?;
    Ok(())
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) -> Result<()> {
        // Setting the size also clears the bitmap.
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
        self.noise_canvas.set_width(viewport.width);
        self.noise_canvas.set_height(viewport.height);
        self.viewport = viewport;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
        Ok(())
    }

    fn fill_disc(&mut self, disc: &GradientDisc) -> Result<()> {
        let gradient = self
            .ctx
            .create_radial_gradient(disc.x, disc.y, 0.0, disc.x, disc.y, disc.radius)?;
        gradient_stops(&gradient, disc.inner, disc.outer)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx.arc(disc.x, disc.y, disc.radius, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn fill_vignette(&mut self, vignette: &Vignette) -> Result<()> {
        let gradient = self.ctx.create_radial_gradient(
            vignette.cx,
            vignette.cy,
            vignette.inner_radius,
            vignette.cx,
            vignette.cy,
            vignette.outer_radius,
        )?;
        gradient_stops(&gradient, vignette.inner, vignette.outer)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, vignette.width, vignette.height);
        Ok(())
    }

    fn put_noise(&mut self, noise: &NoiseField) -> Result<()> {
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&noise.pixels[..]),
            noise.width,
            noise.height,
        )?;
        self.noise_ctx.put_image_data(&image, 0.0, 0.0)?;
        Ok(())
    }

    fn composite_noise(&mut self) -> Result<()> {
        if self.viewport.is_empty() {
            return Ok(());
        }
        self.ctx
            .draw_image_with_html_canvas_element(&self.noise_canvas, 0.0, 0.0)?;
        Ok(())
    }
}
