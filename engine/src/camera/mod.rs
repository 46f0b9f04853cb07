//! Camera Module
//!
//! The trailing free-look camera. Window-system agnostic: it consumes polled
//! cursor coordinates and the player position, and produces view and
//! projection matrices for whatever renders them.

pub mod follow_controller;

pub use follow_controller::FollowCameraController;
