//! Render Staging Module
//!
//! CPU-side geometry only. The simulation core does not touch a graphics
//! API; it stages world-space vertex data that an external uploader copies
//! into GPU buffers and draws. This module owns the mesh template contract,
//! per-platform instancing, and the interleaved vertex layout.

pub mod mesh;

pub use mesh::{
    GeometryError, Mesh, MeshTemplate, Vertex, build_player_geometry, build_world_geometry,
};
