//! Session Tests - Frame Pipeline, Edge Debouncing, Determinism
//!
//! Runs whole sessions through scripted input, the way a shell would, and
//! compares serialized snapshots for determinism.

use glam::Mat4;
use jump_engine::camera::follow_controller::{FOV_Y_DEGREES, Z_FAR, Z_NEAR};
use jump_engine::game::GameSession;
use jump_engine::input::{InputState, KeyCode};

const DT: f32 = 1.0 / 60.0;

/// Scripted input for one frame of the shared determinism tape.
fn scripted_input(input: &mut InputState, frame: u32) {
    input.cursor.set_position(frame as f32 * 1.5, 200.0 - frame as f32);
    input.keyboard.handle_key(KeyCode::W, frame % 120 < 60);
    input.keyboard.handle_key(KeyCode::D, frame % 90 < 30);
    input.keyboard.handle_key(KeyCode::Q, frame == 200);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_same_snapshots() {
    let mut session_a = GameSession::with_seed(12345);
    let mut session_b = GameSession::with_seed(12345);
    let mut input_a = InputState::new();
    let mut input_b = InputState::new();

    for frame in 0..300 {
        scripted_input(&mut input_a, frame);
        scripted_input(&mut input_b, frame);
        session_a.update(&input_a, DT);
        session_b.update(&input_b, DT);

        let json_a = serde_json::to_string(&session_a.snapshot()).unwrap();
        let json_b = serde_json::to_string(&session_b.snapshot()).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged at frame {frame}");
    }
}

#[test]
fn test_different_seeds_different_worlds() {
    let session_a = GameSession::with_seed(111);
    let session_b = GameSession::with_seed(222);

    assert_ne!(session_a.world().platforms(), session_b.world().platforms());
}

// ============================================================================
// Pipeline behavior
// ============================================================================

#[test]
fn test_player_bounces_on_start_slab() {
    let mut session = GameSession::with_seed(5);
    let input = InputState::new();

    let mut landed = false;
    for _ in 0..600 {
        session.update(&input, DT);
        if session.player().jump_count > 0 {
            landed = true;
            break;
        }
    }

    assert!(landed, "player should land on the starting slab");
    let slab = session.world().platforms()[0];
    assert_eq!(
        session.player().position.y,
        slab.top() + session.player().size.y
    );
}

#[test]
fn test_camera_chases_player() {
    let mut session = GameSession::with_seed(5);
    let input = InputState::new();

    for _ in 0..600 {
        session.update(&input, DT);
    }

    // The look-at point has pulled toward the bouncing player's column.
    let look_at = session.camera().look_at();
    let player = session.player().position;
    assert!((look_at.x - player.x).abs() < 0.05);
    assert!((look_at.z - player.z).abs() < 0.05);
}

#[test]
fn test_frame_counter_advances() {
    let mut session = GameSession::with_seed(5);
    let input = InputState::new();
    assert_eq!(session.frame(), 0);

    for _ in 0..10 {
        session.update(&input, DT);
    }
    assert_eq!(session.frame(), 10);
    assert_eq!(session.snapshot().frame, 10);
}

// ============================================================================
// Regeneration and edge debouncing
// ============================================================================

#[test]
fn test_regenerate_fires_once_per_press() {
    let mut session = GameSession::with_seed(42);
    let mut input = InputState::new();

    let original = session.world().platforms().to_vec();

    // Hold E for three frames: exactly one regeneration.
    input.keyboard.handle_key(KeyCode::E, true);
    session.update(&input, DT);
    let after_press = session.world().platforms().to_vec();
    assert_ne!(after_press, original);

    session.update(&input, DT);
    session.update(&input, DT);
    assert_eq!(session.world().platforms(), &after_press[..]);

    // Release re-arms; the next press regenerates again.
    input.keyboard.handle_key(KeyCode::E, false);
    session.update(&input, DT);
    assert_eq!(session.world().platforms(), &after_press[..]);

    input.keyboard.handle_key(KeyCode::E, true);
    session.update(&input, DT);
    assert_ne!(session.world().platforms(), &after_press[..]);
}

#[test]
fn test_geometry_dirty_flag_lifecycle() {
    let mut session = GameSession::with_seed(8);
    let mut input = InputState::new();

    // Fresh session needs one initial build.
    assert!(session.take_geometry_dirty());
    assert!(!session.take_geometry_dirty());

    session.update(&input, DT);
    assert!(!session.take_geometry_dirty());

    input.keyboard.handle_key(KeyCode::E, true);
    session.update(&input, DT);
    assert!(session.take_geometry_dirty());
    assert!(!session.take_geometry_dirty());
}

#[test]
fn test_flight_toggle_fires_once_per_press() {
    let mut session = GameSession::with_seed(8);
    let mut input = InputState::new();
    assert!(session.player().is_falling);

    // Hold Q across frames: a single toggle.
    input.keyboard.handle_key(KeyCode::Q, true);
    for _ in 0..5 {
        session.update(&input, DT);
    }
    assert!(!session.player().is_falling);

    input.keyboard.handle_key(KeyCode::Q, false);
    session.update(&input, DT);
    input.keyboard.handle_key(KeyCode::Q, true);
    session.update(&input, DT);
    assert!(session.player().is_falling);
}

// ============================================================================
// Viewport and matrices
// ============================================================================

#[test]
fn test_resize_updates_projection() {
    let mut session = GameSession::with_seed(8);
    session.resize(1920, 1080);

    let expected = Mat4::perspective_rh_gl(
        FOV_Y_DEGREES.to_radians(),
        1920.0 / 1080.0,
        Z_NEAR,
        Z_FAR,
    );
    assert_eq!(session.projection_matrix(), expected);
}

#[test]
fn test_world_model_matrix_is_identity() {
    let session = GameSession::with_seed(8);
    assert_eq!(session.world_model_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_snapshot_reflects_session() {
    let mut session = GameSession::with_seed(31);
    let input = InputState::new();
    session.update(&input, DT);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.platform_count, 201);
    assert_eq!(snapshot.player_position, session.player().position);
    assert_eq!(snapshot.is_falling, session.player().is_falling);
    assert_eq!(snapshot.summit_height, session.world().summit_height());
}
