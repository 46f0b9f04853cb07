//! Keyboard State
//!
//! Polled held-state of the named game keys, independent of the windowing
//! system's key codes. The shell translates its native events or poll
//! results into [`KeyCode`]s and calls [`KeyboardState::handle_key`].

/// Generic key codes for the keys the game binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Move forward.
    W,
    /// Strafe left.
    A,
    /// Move backward.
    S,
    /// Strafe right.
    D,
    /// Toggle falling / free-fly mode.
    Q,
    /// Regenerate the world.
    E,
    /// Respawn at the last checkpoint.
    F,
    /// Hard reset (falling) or ascend (free-fly).
    Space,
    /// Descend in free-fly mode.
    ShiftLeft,
    /// Exit; handled by the shell, ignored here.
    Escape,
    /// Catch-all for unhandled keys.
    Unknown,
}

/// Held-state of the four movement keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
}

impl MovementKeys {
    /// Create a state with no movement keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held-state for a movement key.
    ///
    /// Returns `true` if the key was a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => self.forward = pressed,
            KeyCode::S => self.backward = pressed,
            KeyCode::A => self.left = pressed,
            KeyCode::D => self.right = pressed,
            _ => return false,
        }
        true
    }

    /// Check if any movement key is held.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Release all movement keys.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Held-state of the non-movement game keys.
///
/// These are raw held flags; single-press semantics (toggle, regenerate) are
/// derived by the session through [`crate::input::PressEdge`], never in here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionKeys {
    /// Q key - toggle falling / free-fly mode
    pub toggle_flight: bool,
    /// E key - regenerate the world
    pub regenerate: bool,
    /// F key - respawn at the last checkpoint
    pub respawn: bool,
    /// Space - hard reset while falling, ascend in free-fly
    pub vertical_up: bool,
    /// Left shift - descend in free-fly
    pub vertical_down: bool,
}

impl ActionKeys {
    /// Create a state with no action keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held-state for an action key.
    ///
    /// Returns `true` if the key was an action key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::Q => self.toggle_flight = pressed,
            KeyCode::E => self.regenerate = pressed,
            KeyCode::F => self.respawn = pressed,
            KeyCode::Space => self.vertical_up = pressed,
            KeyCode::ShiftLeft => self.vertical_down = pressed,
            _ => return false,
        }
        true
    }

    /// Release all action keys.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete polled keyboard state.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
    /// Action key states
    pub actions: ActionKeys,
}

impl KeyboardState {
    /// Create a keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release.
    ///
    /// Returns `true` if the key maps to a game binding.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.movement.handle_key(key, pressed) || self.actions.handle_key(key, pressed)
    }

    /// Release all keys.
    pub fn reset(&mut self) {
        self.movement.reset();
        self.actions.reset();
    }
}
