//! Game Session
//!
//! The per-frame orchestrator: owns the world, the player, the camera, and
//! the session RNG, and runs the fixed update pipeline once per frame -
//! camera rotation from the cursor, world regeneration on its press edge,
//! player physics against the world, then the camera's look-target chase.
//! Both updates receive the same frame delta, computed once by the shell.

use glam::{Mat4, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::camera::FollowCameraController;
use crate::input::{InputState, PressEdge};
use crate::player::{PlayerController, PlayerInput};
use crate::world::World;

/// One running game: world, player, camera, and the session's random
/// stream.
///
/// A session seeded with [`GameSession::with_seed`] is fully reproducible,
/// including every regenerated world, because regeneration draws from the
/// same `ChaCha8Rng` stream.
pub struct GameSession {
    world: World,
    player: PlayerController,
    camera: FollowCameraController,
    rng: ChaCha8Rng,
    toggle_flight_edge: PressEdge,
    regenerate_edge: PressEdge,
    geometry_dirty: bool,
    frame: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Start a session with a fresh random seed. Not reproducible across
    /// runs by design.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Start a session with a fixed seed. Tests and headless runs use this
    /// for reproducible levels.
    pub fn with_seed(seed: u64) -> Self {
        tracing::info!(seed, "session started");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let world = World::generate(&mut rng);
        Self {
            world,
            player: PlayerController::new(),
            camera: FollowCameraController::new(),
            rng,
            toggle_flight_edge: PressEdge::new(),
            regenerate_edge: PressEdge::new(),
            geometry_dirty: true,
            frame: 0,
        }
    }

    /// Advance the whole simulation one frame.
    ///
    /// `dt` is the wall-clock delta since the previous frame, computed once
    /// by the shell and shared by every component this call touches.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        if self.regenerate_edge.update(input.keyboard.actions.regenerate) {
            self.world.regenerate(&mut self.rng);
            self.geometry_dirty = true;
        }

        let (cursor_x, cursor_y) = input.cursor.position();
        self.camera.update_rotation(cursor_x, cursor_y);

        let player_input = PlayerInput {
            forward: input.keyboard.movement.forward,
            backward: input.keyboard.movement.backward,
            left: input.keyboard.movement.left,
            right: input.keyboard.movement.right,
            toggle_flight: self
                .toggle_flight_edge
                .update(input.keyboard.actions.toggle_flight),
            respawn: input.keyboard.actions.respawn,
            vertical_up: input.keyboard.actions.vertical_up,
            vertical_down: input.keyboard.actions.vertical_down,
        };
        self.player.update(
            &player_input,
            self.camera.direction,
            self.camera.right,
            &self.world,
            dt,
        );

        self.camera.update_look_target(self.player.position, dt);
        self.frame += 1;
    }

    /// Rebuild the projection after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.update_projection(width, height);
    }

    /// True once after each (re)generation; the caller rebuilds its staged
    /// world geometry and the flag clears.
    pub fn take_geometry_dirty(&mut self) -> bool {
        std::mem::take(&mut self.geometry_dirty)
    }

    /// The current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player.
    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    /// The camera.
    pub fn camera(&self) -> &FollowCameraController {
        &self.camera
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// View matrix for this frame.
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Projection matrix for the current viewport.
    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix()
    }

    /// Model matrix for the player cube.
    pub fn player_model_matrix(&self) -> Mat4 {
        self.player.model_matrix()
    }

    /// Model matrix for world geometry (identity; platforms are staged in
    /// world space).
    pub fn world_model_matrix(&self) -> Mat4 {
        World::model_matrix()
    }

    /// Serializable view of the session for logging and comparisons.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            frame: self.frame,
            player_position: self.player.position,
            vertical_velocity: self.player.vertical_velocity,
            is_falling: self.player.is_falling,
            jump_count: self.player.jump_count,
            checkpoint: self.player.checkpoint,
            platform_count: self.world.platform_count(),
            summit_height: self.world.summit_height(),
        }
    }
}

/// Point-in-time state of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub frame: u64,
    pub player_position: Vec3,
    pub vertical_velocity: f32,
    pub is_falling: bool,
    pub jump_count: u32,
    pub checkpoint: Vec3,
    pub platform_count: usize,
    pub summit_height: f32,
}
