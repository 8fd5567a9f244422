//! Headless surface that records draw calls
//!
//! Used by tests and the native build, where there is no canvas to paint.

use glam::DVec2;

use super::{Bounds, Color, Surface};

/// A single recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    Rect {
        origin: DVec2,
        width: f64,
        height: f64,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    bounds: Bounds,
    /// Commands issued since the last clear
    commands: Vec<DrawCommand>,
    clears: u64,
}

impl RecordingSurface {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Draw calls in the current frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the surface was cleared
    pub fn clears(&self) -> u64 {
        self.clears
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: DVec2, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::Rect {
            origin,
            width,
            height,
            color,
        });
    }
}
