//! Headless Simulation Driver
//!
//! Run with: `cargo run --bin jump_sim`
//!
//! Drives a seeded session through a scripted input tape - hold W, sweep
//! the cursor, toggle flight mid-run - and prints the final session
//! snapshot as JSON. Stands in for the window shell during development:
//! same update pipeline and geometry staging, fixed frame delta instead of
//! a vsync clock, no GPU.
//!
//! Set `RUST_LOG=debug` to see per-event simulation logs (landings,
//! checkpoints, respawns).

use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use jump_engine::game::GameSession;
use jump_engine::input::{InputState, KeyCode};
use jump_engine::render::{self, MeshTemplate};

/// Frames to simulate.
const FRAMES: u32 = 900;

/// Scripted frame delta (60 Hz).
const FRAME_DT: f32 = 1.0 / 60.0;

/// Session seed. Change for a different level.
const SEED: u64 = 7;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut session = GameSession::with_seed(SEED);
    session.resize(1600, 900);

    let template = MeshTemplate::unit_cube();
    let player_mesh = render::build_player_geometry(&template, session.player().size);
    tracing::info!(vertices = player_mesh.vertex_count(), "staged player geometry");

    let mut input = InputState::new();
    input.keyboard.handle_key(KeyCode::W, true);

    let start = Instant::now();
    for frame in 0..FRAMES {
        // Slow cursor sweep to exercise the free-look path.
        input.cursor.set_position(frame as f32 * 0.5, 180.0);

        // A short free-fly hop in the middle of the run.
        if frame == 300 || frame == 420 {
            input.keyboard.handle_key(KeyCode::Q, true);
        } else {
            input.keyboard.handle_key(KeyCode::Q, false);
        }

        session.update(&input, FRAME_DT);

        if session.take_geometry_dirty() {
            let mesh = render::build_world_geometry(session.world(), &template);
            tracing::info!(vertices = mesh.vertex_count(), "staged world geometry");
        }
    }
    let elapsed = start.elapsed();
    tracing::info!(frames = FRAMES, ?elapsed, "run complete");

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
