//! Player Module
//!
//! The player is a small cube driven by camera-relative movement with a
//! cosmetic lean, plus one of two vertical modes: falling physics with
//! bounce landings, or free-fly.

pub mod controller;

pub use controller::{PlayerController, exp_smooth};

/// Per-frame movement intents for the player controller.
///
/// Built by the session from polled keyboard state. `toggle_flight` is a
/// press edge (fires once per press); the remaining flags are raw held
/// state. Space doubles as hard reset while falling and as ascend in
/// free-fly, so it is carried mode-independently as `vertical_up` and
/// interpreted by the controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    /// Move along the camera's forward direction.
    pub forward: bool,
    /// Move against the camera's forward direction.
    pub backward: bool,
    /// Strafe along the camera's left.
    pub left: bool,
    /// Strafe along the camera's right.
    pub right: bool,
    /// Rising edge of the flight-mode toggle key.
    pub toggle_flight: bool,
    /// Respawn at the last checkpoint (falling mode only).
    pub respawn: bool,
    /// Hard reset while falling; ascend in free-fly.
    pub vertical_up: bool,
    /// Descend in free-fly.
    pub vertical_down: bool,
}
