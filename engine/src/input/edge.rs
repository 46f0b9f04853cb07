//! Press Edge Detection
//!
//! Turns polled held-state into single-fire press events: the edge fires on
//! the frame a key goes down and re-arms only after it is released. Toggles
//! (flight mode, world regeneration) consume edges so holding a key does not
//! retrigger them every frame.

/// Rising-edge detector over a polled boolean.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressEdge {
    held: bool,
}

impl PressEdge {
    /// Create a detector that treats the key as initially released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current held-state; returns `true` exactly once per press.
    pub fn update(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.held;
        self.held = pressed;
        rising
    }

    /// Held-state as of the last update.
    pub fn is_held(&self) -> bool {
        self.held
    }
}
