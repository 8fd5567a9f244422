//! Paddle Ball - a canvas paddle-and-ball mini-game
//!
//! Core modules:
//! - `sim`: Entities, collision and the game controller (no rendering or platform code)
//! - `surface`: Drawing abstraction over a fixed logical area
//! - `scheduler`: Frame-driven game loop over an injectable frame clock
//! - `platform`: Browser bindings (canvas clock, keyboard, coordinate readout)
//! - `settings`: User preferences

pub mod platform;
pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod surface;

pub use scheduler::{FrameClock, LoopExit, ManualClock};
pub use settings::Settings;
pub use sim::{GameController, GamePhase, Key, TickOutcome};
pub use surface::{Bounds, Color, Surface, SurfaceError};

/// Game configuration constants
pub mod consts {
    /// Logical surface dimensions (before device pixel ratio scaling)
    pub const SURFACE_WIDTH: f64 = 560.0;
    pub const SURFACE_HEIGHT: f64 = 300.0;

    /// Paddle defaults
    pub const PADDLE_X: f64 = 256.0;
    pub const PADDLE_Y: f64 = 290.0;
    pub const PADDLE_WIDTH: f64 = 60.0;
    /// Height of the band the ball must land in to bounce
    pub const PADDLE_HEIGHT: f64 = 10.0;
    /// Horizontal speed while an arrow key is held (logical px per frame)
    pub const PADDLE_SPEED: f64 = 5.0;

    /// Ball defaults
    pub const BALL_X: f64 = 280.0;
    pub const BALL_Y: f64 = 280.0;
    pub const BALL_SIZE: f64 = 10.0;
    /// Velocity given to the ball on launch
    pub const LAUNCH_DX: f64 = 3.0;
    pub const LAUNCH_DY: f64 = -4.0;

    /// Horizontal jitter added on paddle bounce, drawn from [-JITTER, JITTER)
    pub const BOUNCE_JITTER: f64 = 1.0;
}
