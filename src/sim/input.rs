//! Keyboard commands
//!
//! Only four keys do anything. Everything else maps to `None` and is ignored.

/// A key with a defined effect on the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move paddle left while held
    Left,
    /// Move paddle right while held
    Right,
    /// Launch the ball (first press only)
    Launch,
    /// Stop the loop
    Pause,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Launch),
            "Escape" => Some(Key::Pause),
            _ => None,
        }
    }

    pub fn is_paddle(&self) -> bool {
        matches!(self, Key::Left | Key::Right)
    }
}
