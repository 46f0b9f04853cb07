//! Collision Detection
//!
//! Axis-aligned box overlap plus the swept landing test the platformer is
//! built on: the player only ever lands from above, while moving downward.

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from its center and per-axis half-size.
    pub fn from_center_half_extent(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap on the horizontal (X/Z) axes.
    ///
    /// Boxes that merely touch along an edge do not overlap; a landing
    /// requires real horizontal intersection.
    pub fn overlaps_xz(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}

/// Swept landing test for one platform.
///
/// `player` is the player's box after this frame's vertical integration and
/// `vertical_velocity` the (negative) velocity of the step. The player lands
/// when the boxes overlap horizontally and the player's bottom crossed the
/// platform's top during the step: below it now, above it one step ago.
///
/// Returns the platform's top surface height on a hit so the caller can snap
/// to it.
pub fn sweep_landing(
    player: &Aabb,
    platform: &Aabb,
    vertical_velocity: f32,
    dt: f32,
) -> Option<f32> {
    if !player.overlaps_xz(platform) {
        return None;
    }

    let top = platform.max.y;
    let bottom = player.min.y;
    if bottom < top && bottom - vertical_velocity * dt > top {
        Some(top)
    } else {
        None
    }
}
