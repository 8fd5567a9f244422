//! Movable entities (ball and paddle)
//!
//! An entity is an axis-aligned box on a surface. Position and velocity are
//! private; all changes go through the methods below so the boundary rules
//! stay in one place.

use glam::DVec2;

use crate::surface::{Bounds, Color, Surface};

/// How an entity is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Circle inscribed in the bounding box
    Circle,
    Rect,
}

#[derive(Debug, Clone)]
pub struct Entity {
    /// Top-left corner
    pos: DVec2,
    size: DVec2,
    vel: DVec2,
    color: Color,
    shape: Shape,
    /// Set once the ball touches the bottom edge; never cleared
    terminal: bool,
    /// Logical bounds of the surface this entity lives on
    bounds: Bounds,
}

impl Entity {
    pub fn new(bounds: Bounds, pos: DVec2, size: DVec2, color: Color, shape: Shape) -> Self {
        Self {
            pos,
            size,
            vel: DVec2::ZERO,
            color,
            shape,
            terminal: false,
            bounds,
        }
    }

    pub fn position(&self) -> DVec2 {
        self.pos
    }

    pub fn velocity(&self) -> DVec2 {
        self.vel
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn left(&self) -> f64 {
        self.pos.x
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f64 {
        self.pos.y
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether the footprint at horizontal position `x` fits the surface width
    fn fits_horizontally(&self, x: f64) -> bool {
        x >= 0.0 && x + self.size.x <= self.bounds.width
    }

    /// Paddle policy: accept `speed` only if one step of it keeps the whole
    /// footprint on the surface, otherwise stop dead.
    pub fn set_horizontal_velocity(&mut self, speed: f64) {
        self.vel.x = if self.fits_horizontally(self.pos.x + speed) {
            speed
        } else {
            0.0
        };
    }

    pub fn set_velocity(&mut self, vel: DVec2) {
        self.vel = vel;
    }

    /// Paddle step: move horizontally if the result stays in bounds.
    /// Vertical position is fixed.
    pub fn advance(&mut self) {
        let next_x = self.pos.x + self.vel.x;
        if self.fits_horizontally(next_x) {
            self.pos.x = next_x;
        }
    }

    /// Ball step: reflect off the side walls and the ceiling, latch terminal
    /// on the floor.
    ///
    /// Boundary tests use the current velocity against the would-be next
    /// position, so the ball may rest on a wall for a frame before turning.
    pub fn advance_ball(&mut self) {
        if self.terminal {
            return;
        }

        let next = self.pos + self.vel;
        let max_x = self.bounds.width - self.size.x;
        let max_y = self.bounds.height - self.size.y;

        if next.x > max_x || next.x < 0.0 {
            self.vel.x = -self.vel.x;
        }

        if next.y < 0.0 {
            self.vel.y = -self.vel.y;
        } else if next.y > max_y {
            self.pos.y = max_y;
            self.vel = DVec2::ZERO;
            self.terminal = true;
            return;
        }

        self.pos += self.vel;
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self.shape {
            Shape::Circle => {
                let radius = self.size.x.min(self.size.y) / 2.0;
                let center = self.pos + DVec2::splat(radius);
                surface.fill_circle(center, radius, self.color);
            }
            Shape::Rect => {
                surface.fill_rect(self.pos, self.size.x, self.size.y, self.color);
            }
        }
    }
}
