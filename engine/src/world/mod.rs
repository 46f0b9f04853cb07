//! World Module
//!
//! The game world is an ordered sequence of floating platforms produced by a
//! seeded random walk. The sequence is immutable for the lifetime of a
//! generation run and only ever replaced wholesale on regeneration, so the
//! player update can hold a shared reference for the whole frame.

pub mod generator;
pub mod platform;

pub use generator::generate_platforms;
pub use platform::Platform;

use glam::Mat4;
use rand::Rng;

/// The game world: platforms in generation order.
///
/// Generation order is the collision tie-break (first hit wins), so it must
/// stay deterministic within one run of the generator.
#[derive(Debug, Clone)]
pub struct World {
    platforms: Vec<Platform>,
}

impl World {
    /// Generate a fresh world from the given random source.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut world = Self {
            platforms: Vec::new(),
        };
        world.regenerate(rng);
        world
    }

    /// Build a world from an explicit platform list (custom or test levels).
    pub fn from_platforms(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    /// Replace the platform sequence wholesale.
    ///
    /// Any geometry staged from the old sequence is stale after this call;
    /// the caller is responsible for rebuilding it.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        self.platforms = generator::generate_platforms(rng);
        tracing::info!(
            platforms = self.platforms.len(),
            summit = self.summit_height(),
            "world generated"
        );
    }

    /// Platforms in generation order.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Number of platforms.
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    /// Top surface height of the final (highest) platform.
    ///
    /// The generator only ever steps upward, so the last platform is the
    /// summit of the run.
    pub fn summit_height(&self) -> f32 {
        self.platforms.last().map(Platform::top).unwrap_or(0.0)
    }

    /// Model matrix for world geometry.
    ///
    /// Platforms are staged in world space already, so this is the identity.
    pub fn model_matrix() -> Mat4 {
        Mat4::IDENTITY
    }
}
