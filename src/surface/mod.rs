//! Drawing surface abstraction
//!
//! Game logic works in logical coordinates over a fixed [`Bounds`]. Concrete
//! surfaces handle any pixel-density scaling internally.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::DVec2;
use thiserror::Error;

use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Logical dimensions of a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

/// CSS fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub const RED: Color = Color("red");
    pub const BLUE: Color = Color("blue");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// No drawable canvas resolves at the given element id
    #[error("canvas with id `{id}` not found")]
    NotFound { id: String },
}

/// A drawable rectangular area with fixed logical dimensions
pub trait Surface {
    fn bounds(&self) -> Bounds;

    /// Clear the whole logical area
    fn clear(&mut self);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);

    fn fill_rect(&mut self, origin: DVec2, width: f64, height: f64, color: Color);
}
