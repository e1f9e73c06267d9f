use crate::core::Surface;
use crate::MountError;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D rendering context.
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Fails with [`MountError::NoContext`] when the canvas cannot hand out a 2D context.
    pub fn acquire(canvas: web::HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| MountError::NoContext)?
            .ok_or(MountError::NoContext)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

#[inline]
fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

impl Surface for Canvas2dSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, rgb: [u8; 3], alpha: f32, line_width: f32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&rgba(rgb, alpha));
        self.ctx.set_line_width(line_width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&rgba(rgb, alpha));
        self.ctx.fill();
    }
}
