//! Game simulation
//!
//! All gameplay logic lives here and has no rendering or platform
//! dependencies beyond the [`Surface`](crate::surface::Surface) trait:
//! - Per-frame steps, no variable timestep
//! - Bounce jitter comes from an injected RNG only

pub mod collision;
pub mod controller;
pub mod entity;
pub mod input;

pub use collision::{bounce_off_paddle, paddle_contact};
pub use controller::{GameController, GamePhase, TickOutcome};
pub use entity::{Entity, Shape};
pub use input::Key;
