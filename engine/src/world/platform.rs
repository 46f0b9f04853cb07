//! Platform Type
//!
//! A platform is a fixed axis-aligned box the player can land on. Platforms
//! are created in bulk by the generator and never mutated afterwards.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::Aabb;

/// A fixed axis-aligned box obstacle.
///
/// The bounding box spans `position - half_extent` to `position + half_extent`
/// on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Center of the platform in world space.
    pub position: Vec3,
    /// Per-axis half-size.
    pub half_extent: Vec3,
}

impl Platform {
    /// Create a platform from its center and per-axis half-size.
    pub fn new(position: Vec3, half_extent: Vec3) -> Self {
        Self {
            position,
            half_extent,
        }
    }

    /// Bounding box in world space.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extent(self.position, self.half_extent)
    }

    /// Height of the top surface (the landing plane).
    pub fn top(&self) -> f32 {
        self.position.y + self.half_extent.y
    }
}
