//! Cursor State
//!
//! Polled cursor position in window pixel coordinates. The camera derives
//! rotation from frame-to-frame differences of this position; it is not an
//! event-driven delta stream.

/// Last polled cursor position.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorState {
    /// Horizontal position in pixels, origin at the window's left edge.
    pub x: f32,
    /// Vertical position in pixels, origin at the window's top edge.
    pub y: f32,
}

impl CursorState {
    /// Create a cursor state at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the polled position.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Current position as a tuple.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}
