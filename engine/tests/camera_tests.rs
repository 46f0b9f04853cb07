//! Camera Tests - Rotation, Pitch Clamp, Look-At Smoothing, Matrices
//!
//! Tests for the trailing free-look camera, driven with polled cursor
//! positions the way the session drives it.

use glam::{Mat4, Vec3};
use jump_engine::camera::FollowCameraController;
use jump_engine::camera::follow_controller::{
    FOLLOW_DISTANCE, FOV_Y_DEGREES, MOUSE_SPEED, PITCH_LIMIT, Z_FAR, Z_NEAR,
};

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn test_first_cursor_sample_only_records() {
    let mut camera = FollowCameraController::new();
    let heading_before = camera.horizontal_angle();
    let direction_before = camera.direction;

    camera.update_rotation(523.0, 981.0);

    assert_eq!(camera.horizontal_angle(), heading_before);
    assert_eq!(camera.vertical_angle(), 0.0);
    assert_eq!(camera.direction, direction_before);
}

#[test]
fn test_rotation_accumulates_cursor_deltas() {
    let mut camera = FollowCameraController::new();
    camera.update_rotation(100.0, 100.0);
    let heading = camera.horizontal_angle();

    // Cursor moves 10 px left: heading grows by MOUSE_SPEED * 10.
    camera.update_rotation(90.0, 100.0);
    assert!((camera.horizontal_angle() - (heading + MOUSE_SPEED * 10.0)).abs() < 1e-6);

    // Cursor moves 25 px up: pitch grows by MOUSE_SPEED * 25.
    camera.update_rotation(90.0, 75.0);
    assert!((camera.vertical_angle() - MOUSE_SPEED * 25.0).abs() < 1e-6);
}

#[test]
fn test_initial_direction_faces_initial_heading() {
    let camera = FollowCameraController::new();

    // Heading 3.14 is a whisker short of π: almost straight -Z, level.
    assert!(camera.direction.z < -0.99);
    assert_eq!(camera.direction.y, 0.0);
    assert!((camera.direction.length() - 1.0).abs() < 1e-6);
    assert!(camera.right.x > 0.99);
    assert_eq!(camera.right.y, 0.0);
}

#[test]
fn test_pitch_never_leaves_clamp_range() {
    let mut camera = FollowCameraController::new();
    camera.update_rotation(0.0, 0.0);

    // Drag the cursor far upward, then far downward, in large steps.
    let mut y = 0.0;
    for _ in 0..300 {
        y -= 50.0;
        camera.update_rotation(0.0, y);
        assert!(camera.vertical_angle() <= PITCH_LIMIT);
        assert!(camera.vertical_angle() >= -PITCH_LIMIT);
    }
    assert_eq!(camera.vertical_angle(), PITCH_LIMIT);

    for _ in 0..600 {
        y += 50.0;
        camera.update_rotation(0.0, y);
        assert!(camera.vertical_angle() <= PITCH_LIMIT);
        assert!(camera.vertical_angle() >= -PITCH_LIMIT);
    }
    assert_eq!(camera.vertical_angle(), -PITCH_LIMIT);
}

#[test]
fn test_basis_stays_orthonormal_under_rotation() {
    let mut camera = FollowCameraController::new();
    camera.update_rotation(0.0, 0.0);

    let mut x = 0.0;
    let mut y = 0.0;
    for step in 0..200 {
        x += (step % 17) as f32 * 3.0 - 20.0;
        y += (step % 13) as f32 * 2.0 - 10.0;
        camera.update_rotation(x, y);

        assert!((camera.direction.length() - 1.0).abs() < 1e-5);
        assert!((camera.right.length() - 1.0).abs() < 1e-5);
        assert!(camera.direction.dot(camera.right).abs() < 1e-5);
        // The right vector stays horizontal.
        assert!(camera.right.y.abs() < 1e-6);
    }
}

// ============================================================================
// Look-at smoothing
// ============================================================================

#[test]
fn test_look_at_zero_dt_is_inert() {
    let mut camera = FollowCameraController::new();
    camera.update_look_target(Vec3::new(3.0, 4.0, 5.0), 0.0);
    assert_eq!(camera.look_at(), Vec3::ZERO);
}

#[test]
fn test_look_at_converges_to_target() {
    let mut camera = FollowCameraController::new();
    let target = Vec3::new(2.0, 6.0, -3.0);

    for _ in 0..600 {
        camera.update_look_target(target, 1.0 / 60.0);
    }

    assert!((camera.look_at() - target).length() < 1e-2);
}

#[test]
fn test_vertical_axis_lags_horizontal_axes() {
    let mut camera = FollowCameraController::new();

    // One large step toward a diagonal target: X and Z close most of the
    // gap, Y keeps noticeably more of it (bounce absorption).
    camera.update_look_target(Vec3::ONE, 1.0);

    let look_at = camera.look_at();
    assert!(look_at.x > 0.999);
    assert!(look_at.z > 0.999);
    assert!(look_at.y < 0.985);
    assert!((look_at.x - look_at.z).abs() < 1e-6);
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_view_places_eye_behind_look_at() {
    let mut camera = FollowCameraController::new();
    camera.update_look_target(Vec3::new(1.0, 2.0, 3.0), 10.0);

    let view = camera.view_matrix();
    let eye = camera.look_at() - FOLLOW_DISTANCE * camera.direction;

    // The eye maps to the view-space origin, the look-at point straight
    // ahead at the follow distance.
    assert!(view.transform_point3(eye).length() < 1e-4);
    let ahead = view.transform_point3(camera.look_at());
    assert!((ahead - Vec3::new(0.0, 0.0, -FOLLOW_DISTANCE)).length() < 1e-4);
}

#[test]
fn test_projection_tracks_viewport_resize() {
    let mut camera = FollowCameraController::new();

    camera.update_projection(800, 600);
    let expected = Mat4::perspective_rh_gl(
        FOV_Y_DEGREES.to_radians(),
        800.0 / 600.0,
        Z_NEAR,
        Z_FAR,
    );
    assert_eq!(camera.projection_matrix(), expected);
}

#[test]
fn test_initial_projection_is_sixteen_by_nine() {
    let camera = FollowCameraController::new();
    let expected = Mat4::perspective_rh_gl(
        FOV_Y_DEGREES.to_radians(),
        16.0 / 9.0,
        Z_NEAR,
        Z_FAR,
    );
    assert_eq!(camera.projection_matrix(), expected);
}
