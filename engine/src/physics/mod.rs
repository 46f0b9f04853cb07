//! Physics Module
//!
//! Pure collision functions for player-platform interactions. Nothing in
//! here mutates state; the player controller applies the results.

pub mod collision;

pub use collision::{Aabb, sweep_landing};
