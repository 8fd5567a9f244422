//! Platform abstraction layer
//!
//! Browser bindings for:
//! - Display frames (`requestAnimationFrame` as a [`FrameClock`](crate::scheduler::FrameClock))
//! - Keyboard events
//! - Pointer coordinate readout

#[cfg(target_arch = "wasm32")]
pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod overlay;

#[cfg(target_arch = "wasm32")]
pub use clock::{BrowserClock, FrameHandle};

/// Text shown by the coordinate readout for a pointer position
pub fn readout_text(x: i32, y: i32) -> String {
    format!("X: {x}, Y: {y}")
}
