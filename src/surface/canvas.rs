//! HTML canvas surface (2D context)

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Bounds, Color, Surface, SurfaceError};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    bounds: Bounds,
}

impl CanvasSurface {
    /// Resolve the canvas with the given element id and size it to the
    /// default logical bounds, scaled for the device pixel ratio.
    pub fn from_id(id: &str) -> Result<Self, SurfaceError> {
        let not_found = || SurfaceError::NotFound { id: id.to_string() };

        let window = web_sys::window().ok_or_else(not_found)?;
        let canvas: HtmlCanvasElement = window
            .document()
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(not_found)?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
            .ok_or_else(not_found)?;

        let mut surface = Self {
            canvas,
            ctx,
            bounds: Bounds::default(),
        };
        surface.setup(window.device_pixel_ratio());
        Ok(surface)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn setup(&mut self, dpr: f64) {
        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        let Bounds { width, height } = self.bounds;

        self.canvas.set_width((width * dpr) as u32);
        self.canvas.set_height((height * dpr) as u32);

        // Keep the on-page size at logical pixels
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));

        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("Failed to scale canvas context: {:?}", e);
        }
        log::info!(
            "Canvas sized {}x{} (logical {}x{}, dpr {})",
            self.canvas.width(),
            self.canvas.height(),
            width,
            height,
            dpr
        );
    }
}

impl Surface for CanvasSurface {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.bounds.width, self.bounds.height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_rect(&mut self, origin: DVec2, width: f64, height: f64, color: Color) {
        self.ctx.begin_path();
        self.ctx.rect(origin.x, origin.y, width, height);
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill();
        self.ctx.close_path();
    }
}
