use crate::core::{Bounds, DrawSurface, Rgb};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
}

/// [`DrawSurface`] over a 2D canvas context. Drawing is in CSS pixels; the
/// backing store follows the device pixel ratio.
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    // fill/stroke style strings are rebuilt only when the color changes
    fill: Option<Rgb>,
    stroke: Option<Rgb>,
}

impl Canvas2dSurface {
    pub fn new(canvas: web::HtmlCanvasElement, bounds: Bounds) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        let mut surface = Self {
            canvas,
            ctx,
            dpr: 1.0,
            fill: None,
            stroke: None,
        };
        surface.resize(bounds.width, bounds.height);
        log::info!(
            "[canvas] 2d surface {}x{} @{}x",
            bounds.width,
            bounds.height,
            surface.dpr
        );
        Ok(surface)
    }

    fn set_fill(&mut self, color: Rgb) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Rgb) {
        if self.stroke != Some(color) {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.stroke = Some(color);
        }
    }

    fn path_circle(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
    }
}

impl DrawSurface for Canvas2dSurface {
    fn resize(&mut self, width: f32, height: f32) {
        let dpr = device_pixel_ratio();
        self.dpr = dpr;
        self.canvas.set_width((width as f64 * dpr) as u32);
        self.canvas.set_height((height as f64 * dpr) as u32);
        // resizing the backing store resets the context state
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.fill = None;
        self.stroke = None;
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.set_fill(color);
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.path_circle(center, radius);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgb, alpha: f32) {
        self.set_stroke(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.path_circle(center, radius);
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }
}
