//! Platform Generator
//!
//! Random walk that lays out the level as an endless upward staircase. Every
//! step climbs (the vertical offset is always positive), so every platform is
//! reachable in the vertical sense; horizontal placement can exceed practical
//! jump range, which is accepted level variance rather than a bug.
//!
//! The random source is injected so tests can drive generation with a fixed
//! seed; production wiring seeds it per session.

use glam::Vec3;
use rand::Rng;

use super::platform::Platform;

/// Platforms generated after the starting slab.
pub const PLATFORM_COUNT: usize = 200;

/// Half-extent of the starting slab at the origin.
pub const BASE_HALF_EXTENT: Vec3 = Vec3::new(0.5, 0.02, 0.5);

/// Vertical half-thickness of every platform.
pub const PLATFORM_HALF_THICKNESS: f32 = 0.02;

/// Vertical climb per step, sampled from `[Y_STEP_MIN, Y_STEP_MAX)`.
pub const Y_STEP_MIN: f32 = 0.1;
pub const Y_STEP_MAX: f32 = 0.5;

/// Horizontal half-extent per axis, sampled from `[HALF_EXTENT_MIN, HALF_EXTENT_MAX)`.
pub const HALF_EXTENT_MIN: f32 = 0.1;
pub const HALF_EXTENT_MAX: f32 = 0.8;

/// Fixed margin added to the horizontal placement envelope on top of the
/// previous and new half-extents.
pub const GAP_MARGIN: f32 = 0.8;

/// Generate the platform sequence.
///
/// The first platform sits at the origin with [`BASE_HALF_EXTENT`]; each of
/// the [`PLATFORM_COUNT`] following platforms offsets the accumulated
/// position by a fresh sample:
///
/// - `y_offset` in `[Y_STEP_MIN, Y_STEP_MAX)` (always upward),
/// - new half-extents per horizontal axis in `[HALF_EXTENT_MIN, HALF_EXTENT_MAX)`,
/// - `x`/`z` offsets in `[-max_offset, +max_offset)` where
///   `max_offset = GAP_MARGIN + previous_half + new_half` for that axis.
///
/// Sample order is fixed (y, x-extent, z-extent, x-offset, z-offset); the
/// output is fully determined by the random source.
pub fn generate_platforms(rng: &mut impl Rng) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(PLATFORM_COUNT + 1);

    let mut position = Vec3::ZERO;
    let mut half_extent = BASE_HALF_EXTENT;
    platforms.push(Platform::new(position, half_extent));

    for _ in 0..PLATFORM_COUNT {
        let y_offset: f32 = rng.gen_range(Y_STEP_MIN..Y_STEP_MAX);
        let new_half_x: f32 = rng.gen_range(HALF_EXTENT_MIN..HALF_EXTENT_MAX);
        let new_half_z: f32 = rng.gen_range(HALF_EXTENT_MIN..HALF_EXTENT_MAX);

        let max_offset_x = GAP_MARGIN + half_extent.x + new_half_x;
        let max_offset_z = GAP_MARGIN + half_extent.z + new_half_z;
        let x_offset = rng.gen_range(-max_offset_x..max_offset_x);
        let z_offset = rng.gen_range(-max_offset_z..max_offset_z);

        position += Vec3::new(x_offset, y_offset, z_offset);
        half_extent = Vec3::new(new_half_x, PLATFORM_HALF_THICKNESS, new_half_z);
        platforms.push(Platform::new(position, half_extent));
    }

    platforms
}
