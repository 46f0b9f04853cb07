//! Input Module
//!
//! Platform-agnostic input state for the simulation core. The module is
//! decoupled from any specific windowing system: a shell polls its window
//! once per frame and mirrors key and cursor state in here, the simulation
//! only ever reads this snapshot.

pub mod edge;
pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use edge::PressEdge;
pub use keyboard::{ActionKeys, KeyCode, KeyboardState, MovementKeys};
pub use mouse::CursorState;

/// Combined polled input state for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub cursor: CursorState,
}

impl InputState {
    /// Create an input state with no keys held and the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Release all keys.
    pub fn reset(&mut self) {
        self.keyboard.reset();
    }
}
