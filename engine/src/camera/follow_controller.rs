//! Follow Camera Controller
//!
//! Free-look camera that trails a smoothed look-at point a fixed distance
//! behind the view direction. Rotation comes from frame-to-frame cursor
//! differences; the look-at point chases the player with per-axis
//! exponential smoothing tuned asymmetrically: horizontal tracking is near
//! immediate, vertical is softened so the constant bouncing does not jerk
//! the framing.

use glam::{Mat4, Vec3};

/// Radians of rotation per pixel of cursor travel.
pub const MOUSE_SPEED: f32 = 0.0008;

/// Pitch limit in radians. Slightly inside ±π/2, which also keeps
/// `cross(direction, +Y)` away from the degenerate vertical case.
pub const PITCH_LIMIT: f32 = 3.1 / 2.0;

/// Distance the eye trails behind the look-at point.
pub const FOLLOW_DISTANCE: f32 = 1.5;

/// Vertical field of view in degrees.
pub const FOV_Y_DEGREES: f32 = 70.0;

/// Near clip plane.
pub const Z_NEAR: f32 = 0.1;

/// Far clip plane.
pub const Z_FAR: f32 = 100.0;

/// Per-axis smoothing bases for the look-at point (X, Y, Z): the fraction
/// of the remaining gap kept after one second per axis. Y keeps far more,
/// so vertical motion is absorbed rather than mirrored.
const LOOK_SMOOTHING_BASE: Vec3 = Vec3::new(0.0002, 0.02, 0.0002);

/// Initial heading in radians, a whisker short of π: looks down -Z.
const INITIAL_HORIZONTAL_ANGLE: f32 = 3.14;

/// Aspect ratio the projection starts with before the first resize.
const INITIAL_ASPECT: f32 = 16.0 / 9.0;

/// Trailing free-look camera.
#[derive(Debug, Clone)]
pub struct FollowCameraController {
    /// Unit view direction, derived from the angles.
    pub direction: Vec3,
    /// Unit right vector, `normalize(direction × +Y)`.
    pub right: Vec3,

    look_at: Vec3,
    target: Vec3,
    horizontal_angle: f32,
    vertical_angle: f32,
    last_x: f32,
    last_y: f32,
    first_cursor_sample: bool,
    projection: Mat4,
}

impl Default for FollowCameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowCameraController {
    /// Create a camera looking along the initial heading at the origin.
    pub fn new() -> Self {
        let direction = direction_from_angles(INITIAL_HORIZONTAL_ANGLE, 0.0);
        Self {
            direction,
            right: direction.cross(Vec3::Y).normalize(),
            look_at: Vec3::ZERO,
            target: Vec3::ZERO,
            horizontal_angle: INITIAL_HORIZONTAL_ANGLE,
            vertical_angle: 0.0,
            last_x: 0.0,
            last_y: 0.0,
            first_cursor_sample: true,
            projection: Mat4::perspective_rh_gl(
                FOV_Y_DEGREES.to_radians(),
                INITIAL_ASPECT,
                Z_NEAR,
                Z_FAR,
            ),
        }
    }

    /// Apply the cursor position polled this frame.
    ///
    /// The very first sample only records the position, so the camera does
    /// not jump by the cursor's initial offset. Afterwards each call rotates
    /// by the difference to the previous sample and rebuilds the basis.
    pub fn update_rotation(&mut self, x: f32, y: f32) {
        if self.first_cursor_sample {
            self.last_x = x;
            self.last_y = y;
            self.first_cursor_sample = false;
            return;
        }

        self.horizontal_angle += MOUSE_SPEED * (self.last_x - x);
        self.vertical_angle += MOUSE_SPEED * (self.last_y - y);
        self.last_x = x;
        self.last_y = y;

        self.vertical_angle = self.vertical_angle.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.direction = direction_from_angles(self.horizontal_angle, self.vertical_angle);
        self.right = self.direction.cross(Vec3::Y).normalize();
    }

    /// Chase the player position with per-axis smoothing.
    ///
    /// `dt` must be the same frame delta the player update received.
    pub fn update_look_target(&mut self, player_position: Vec3, dt: f32) {
        self.target = player_position;
        let blend = Vec3::ONE - LOOK_SMOOTHING_BASE.powf(dt);
        self.look_at += (self.target - self.look_at) * blend;
    }

    /// Rebuild the projection for a new viewport size.
    pub fn update_projection(&mut self, width: u32, height: u32) {
        self.projection = Mat4::perspective_rh_gl(
            FOV_Y_DEGREES.to_radians(),
            width as f32 / height as f32,
            Z_NEAR,
            Z_FAR,
        );
    }

    /// View matrix: the eye trails the look-at point against the view
    /// direction.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.look_at - FOLLOW_DISTANCE * self.direction,
            self.look_at,
            Vec3::Y,
        )
    }

    /// Current projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Smoothed look-at point.
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Current horizontal angle in radians.
    pub fn horizontal_angle(&self) -> f32 {
        self.horizontal_angle
    }

    /// Current vertical angle in radians.
    pub fn vertical_angle(&self) -> f32 {
        self.vertical_angle
    }
}

/// Spherical-to-Cartesian view direction for the given angles.
fn direction_from_angles(horizontal: f32, vertical: f32) -> Vec3 {
    Vec3::new(
        vertical.cos() * horizontal.sin(),
        vertical.sin(),
        vertical.cos() * horizontal.cos(),
    )
    .normalize()
}
