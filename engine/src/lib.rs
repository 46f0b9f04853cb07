//! Geometry Jump Engine Library
//!
//! Simulation core for a procedurally generated 3D platformer: a seeded
//! random walk of floating platforms, a bouncing player cube with swept
//! landing collision, and a free-look camera that trails the player.
//!
//! This library is window-system agnostic. A shell (windowed or headless)
//! polls input into [`input::InputState`], calls
//! [`game::GameSession::update`] once per frame with the wall-clock delta,
//! and hands the resulting matrices and staged geometry to whatever draws
//! them.
//!
//! # Modules
//!
//! - [`world`] - platforms and the random-walk generator
//! - [`player`] - the player controller (movement, physics, checkpoints)
//! - [`camera`] - the trailing free-look camera
//! - [`physics`] - AABB overlap and swept landing tests
//! - [`input`] - generic key and cursor state, decoupled from any window crate
//! - [`render`] - CPU-side geometry staging for a GPU uploader
//!
//! # Example
//!
//! ```ignore
//! use jump_engine::game::GameSession;
//! use jump_engine::input::{InputState, KeyCode};
//!
//! let mut session = GameSession::with_seed(7);
//! let mut input = InputState::new();
//!
//! // Shell feeds polled key and cursor state...
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.cursor.set_position(640.0, 360.0);
//!
//! // ...and steps the simulation once per frame.
//! session.update(&input, 1.0 / 60.0);
//! let view = session.view_matrix();
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types at crate level for convenience
pub use camera::FollowCameraController;
pub use input::{CursorState, InputState, KeyCode, KeyboardState, PressEdge};
pub use player::{PlayerController, PlayerInput};
pub use world::{Platform, World};
