//! Player Controller
//!
//! Owns the player cube's position, velocity, lean, mode, and checkpoint
//! state, and advances all of it one frame at a time. Horizontal movement is
//! relative to the camera basis passed in each update; vertical movement is
//! either bouncing platform physics or free-fly.
//!
//! Speeds and lean angles chase their targets with a closed-form exponential
//! decay, so acceleration feel is independent of frame rate.

use glam::{Mat4, Vec3};

use crate::physics::collision::{self, Aabb};
use crate::world::World;

use super::PlayerInput;

/// Horizontal speed a held movement key accelerates toward, in units/s.
pub const MOVE_SPEED: f32 = 2.0;

/// Full lean angle at sustained movement input, in radians.
pub const LEAN_ANGLE: f32 = 0.2;

/// Smoothing base for horizontal speeds: the fraction of the gap to the
/// target still remaining after one second.
pub const SPEED_SMOOTHING_BASE: f32 = 1e-5;

/// Smoothing base for lean angles. Larger than the speed base, so the lean
/// settles more lazily than the speed it visualizes.
pub const LEAN_SMOOTHING_BASE: f32 = 1e-4;

/// Downward acceleration while falling, in units/s^2.
pub const GRAVITY: f32 = 4.0;

/// Divisor applied to the impact velocity on each bounce.
pub const BOUNCE_DAMPING: f32 = 1.7;

/// Upward velocity floor leaving a landing; keeps the bounce alive forever.
pub const MIN_BOUNCE_VELOCITY: f32 = 2.0;

/// Upward velocity granted when flight mode is toggled.
pub const TOGGLE_LAUNCH_VELOCITY: f32 = 2.0;

/// Vertical speed in free-fly mode, in units/s.
pub const FLY_SPEED: f32 = 2.0;

/// Below this height the player has fallen off the level and respawns.
pub const KILL_PLANE_Y: f32 = -0.2;

/// Height above a checkpoint at which the player reappears.
pub const SPAWN_OFFSET_Y: f32 = 0.25;

/// Successful landings between checkpoint captures.
pub const LANDINGS_PER_CHECKPOINT: u32 = 20;

/// Player cube half-extent per axis.
pub const PLAYER_HALF_EXTENT: f32 = 0.05;

/// Mask that projects a vector onto the horizontal plane.
const HORIZONTAL: Vec3 = Vec3::new(1.0, 0.0, 1.0);

/// Exponential decay of `value` toward `target`.
///
/// `base` is the fraction of the remaining gap kept after one second; the
/// closed form `value + (target - value) * (1 - base^dt)` composes over
/// consecutive steps, so feel does not depend on frame rate. A zero `dt`
/// leaves `value` unchanged.
pub fn exp_smooth(value: f32, target: f32, base: f32, dt: f32) -> f32 {
    value + (target - value) * (1.0 - base.powf(dt))
}

/// The player cube.
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Position of the cube's center in world space.
    pub position: Vec3,
    /// Per-axis half-size; fixed for the session.
    pub size: Vec3,
    /// Vertical velocity, positive upward. Only meaningful while falling.
    pub vertical_velocity: f32,
    /// True while platform physics drive the cube; false in free-fly.
    pub is_falling: bool,
    /// Successful landings since the last checkpoint capture.
    pub jump_count: u32,
    /// Last confirmed safe landing position.
    pub checkpoint: Vec3,

    // Smoothed motion state (actual value chases target).
    speed_forward_back: f32,
    speed_right_left: f32,
    speed_forward_back_target: f32,
    speed_right_left_target: f32,
    lean_forward_back: f32,
    lean_right_left: f32,
    lean_forward_back_target: f32,
    lean_right_left_target: f32,

    // Camera basis captured at the last update, for the lean transform.
    direction: Vec3,
    right: Vec3,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, SPAWN_OFFSET_Y, 0.0),
            size: Vec3::splat(PLAYER_HALF_EXTENT),
            vertical_velocity: 0.0,
            is_falling: true,
            jump_count: 0,
            checkpoint: Vec3::ZERO,
            speed_forward_back: 0.0,
            speed_right_left: 0.0,
            speed_forward_back_target: 0.0,
            speed_right_left_target: 0.0,
            lean_forward_back: 0.0,
            lean_right_left: 0.0,
            lean_forward_back_target: 0.0,
            lean_right_left_target: 0.0,
            direction: Vec3::ZERO,
            right: Vec3::ZERO,
        }
    }
}

impl PlayerController {
    /// Create a player at the spawn point above the starting slab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the player one frame.
    ///
    /// `direction` and `right` are the camera basis for this frame, passed
    /// by value; the controller never holds a reference into the camera.
    /// `dt` must be the same frame delta the camera update receives.
    pub fn update(
        &mut self,
        input: &PlayerInput,
        direction: Vec3,
        right: Vec3,
        world: &World,
        dt: f32,
    ) {
        self.direction = direction;
        self.right = right;

        // Targets from held keys; opposing keys cancel.
        let mut speed_fb_target = 0.0;
        let mut speed_rl_target = 0.0;
        let mut lean_fb_target = 0.0;
        let mut lean_rl_target = 0.0;
        if input.forward {
            speed_fb_target += MOVE_SPEED;
            lean_fb_target += LEAN_ANGLE;
        }
        if input.backward {
            speed_fb_target -= MOVE_SPEED;
            lean_fb_target -= LEAN_ANGLE;
        }
        if input.left {
            speed_rl_target -= MOVE_SPEED;
            lean_rl_target += LEAN_ANGLE;
        }
        if input.right {
            speed_rl_target += MOVE_SPEED;
            lean_rl_target -= LEAN_ANGLE;
        }
        self.speed_forward_back_target = speed_fb_target;
        self.speed_right_left_target = speed_rl_target;
        self.lean_forward_back_target = lean_fb_target;
        self.lean_right_left_target = lean_rl_target;

        self.speed_forward_back = exp_smooth(
            self.speed_forward_back,
            self.speed_forward_back_target,
            SPEED_SMOOTHING_BASE,
            dt,
        );
        self.speed_right_left = exp_smooth(
            self.speed_right_left,
            self.speed_right_left_target,
            SPEED_SMOOTHING_BASE,
            dt,
        );

        // Displace along the horizontal projections of the camera basis. A
        // degenerate projection (camera looking straight up or down) skips
        // that axis for the frame instead of normalizing a zero vector.
        if self.speed_forward_back != 0.0 {
            if let Some(forward) = (direction * HORIZONTAL).try_normalize() {
                self.position += forward * self.speed_forward_back * dt;
            }
        }
        if self.speed_right_left != 0.0 {
            if let Some(sideways) = (right * HORIZONTAL).try_normalize() {
                self.position += sideways * self.speed_right_left * dt;
            }
        }

        self.lean_forward_back = exp_smooth(
            self.lean_forward_back,
            self.lean_forward_back_target,
            LEAN_SMOOTHING_BASE,
            dt,
        );
        self.lean_right_left = exp_smooth(
            self.lean_right_left,
            self.lean_right_left_target,
            LEAN_SMOOTHING_BASE,
            dt,
        );

        if input.toggle_flight {
            self.is_falling = !self.is_falling;
            self.vertical_velocity = TOGGLE_LAUNCH_VELOCITY;
            tracing::debug!(falling = self.is_falling, "flight mode toggled");
        }

        if self.is_falling {
            self.update_falling(input, world, dt);
        } else {
            if input.vertical_up {
                self.position.y += FLY_SPEED * dt;
            }
            if input.vertical_down {
                self.position.y -= FLY_SPEED * dt;
            }
        }
    }

    /// Falling-mode physics: integrate, land, handle resets.
    fn update_falling(&mut self, input: &PlayerInput, world: &World, dt: f32) {
        self.position.y += self.vertical_velocity * dt;
        self.vertical_velocity -= GRAVITY * dt;

        // Landings only happen on the way down. Platforms are tested in
        // generation order and the first crossing wins.
        if self.vertical_velocity < 0.0 {
            let player_box = Aabb::from_center_half_extent(self.position, self.size);
            for platform in world.platforms() {
                let Some(surface_y) =
                    collision::sweep_landing(&player_box, &platform.aabb(), self.vertical_velocity, dt)
                else {
                    continue;
                };
                self.land_on(surface_y);
                break;
            }
        }

        if input.vertical_up {
            self.hard_reset();
        }
        if input.respawn || self.position.y < KILL_PLANE_Y {
            self.respawn();
        }
    }

    /// Snap onto a platform top and bounce.
    fn land_on(&mut self, surface_y: f32) {
        self.position.y = surface_y + self.size.y;
        self.vertical_velocity = (-self.vertical_velocity / BOUNCE_DAMPING).max(MIN_BOUNCE_VELOCITY);

        self.jump_count += 1;
        if self.jump_count == LANDINGS_PER_CHECKPOINT {
            self.jump_count = 0;
            self.checkpoint = self.position;
            tracing::debug!(position = ?self.position, "checkpoint saved");
        }
    }

    /// Return to the last checkpoint, slightly above it.
    fn respawn(&mut self) {
        self.jump_count = 0;
        self.position = self.checkpoint + Vec3::new(0.0, SPAWN_OFFSET_Y, 0.0);
        self.vertical_velocity = 0.0;
        tracing::debug!(checkpoint = ?self.checkpoint, "respawned");
    }

    /// Reset to the world origin spawn and make it the checkpoint.
    fn hard_reset(&mut self) {
        self.position = Vec3::new(0.0, SPAWN_OFFSET_Y, 0.0);
        self.vertical_velocity = 0.0;
        self.jump_count = 0;
        self.checkpoint = self.position;
        tracing::debug!("hard reset to origin");
    }

    /// Model transform: translation plus the cosmetic lean.
    ///
    /// The lean banks the cube around the horizontal projections of the
    /// camera basis it was last updated with; it never feeds back into
    /// physics. Degenerate projections skip their rotation.
    pub fn model_matrix(&self) -> Mat4 {
        let mut model = Mat4::from_translation(self.position);
        if let Some(axis) = (self.direction * HORIZONTAL).try_normalize() {
            model *= Mat4::from_axis_angle(axis, -self.lean_right_left);
        }
        if let Some(axis) = (self.right * HORIZONTAL).try_normalize() {
            model *= Mat4::from_axis_angle(axis, -self.lean_forward_back);
        }
        model
    }

    /// Smoothed forward-back speed.
    pub fn speed_forward_back(&self) -> f32 {
        self.speed_forward_back
    }

    /// Smoothed right-left speed.
    pub fn speed_right_left(&self) -> f32 {
        self.speed_right_left
    }

    /// Smoothed forward-back lean angle in radians.
    pub fn lean_forward_back(&self) -> f32 {
        self.lean_forward_back
    }

    /// Smoothed right-left lean angle in radians.
    pub fn lean_right_left(&self) -> f32 {
        self.lean_right_left
    }
}
