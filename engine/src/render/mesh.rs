//! Mesh Staging
//!
//! The world and the player are both instances of one cube template: each
//! platform scales the template by its half-extent and translates it to its
//! position, and all platform instances are concatenated into a single
//! world mesh. The player mesh is scaled only; its model matrix positions
//! it at draw time.
//!
//! Templates arrive as parallel vertex/normal arrays (the loader contract).
//! A mismatch is a fatal construction error - the simulation assumes
//! geometry it was handed is well-formed.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use static_assertions::const_assert_eq;
use thiserror::Error;

use crate::world::{Platform, World};

/// Interleaved vertex as a GPU uploader consumes it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

// Uploaders size their buffers from this layout.
const_assert_eq!(std::mem::size_of::<Vertex>(), 24);

/// Errors constructing a mesh template from loader output.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The loader's parallel arrays disagree in length.
    #[error("template has {vertices} vertices but {normals} normals")]
    ParallelArrayMismatch { vertices: usize, normals: usize },
    /// The loader produced no geometry at all.
    #[error("template has no vertices")]
    EmptyTemplate,
}

/// A base mesh as parallel position/normal arrays.
#[derive(Debug, Clone)]
pub struct MeshTemplate {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
}

impl MeshTemplate {
    /// Build a template from loader output, validating the parallel-array
    /// contract.
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>) -> Result<Self, GeometryError> {
        if positions.is_empty() {
            return Err(GeometryError::EmptyTemplate);
        }
        if positions.len() != normals.len() {
            return Err(GeometryError::ParallelArrayMismatch {
                vertices: positions.len(),
                normals: normals.len(),
            });
        }
        Ok(Self { positions, normals })
    }

    /// Built-in cube spanning `[-1, 1]` on each axis: 6 faces, 36 vertices,
    /// per-face normals, counter-clockwise winding seen from outside.
    /// Scaling it by a half-extent yields exactly that bounding box.
    pub fn unit_cube() -> Self {
        const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
            (
                [1.0, 0.0, 0.0],
                [
                    [1.0, -1.0, -1.0],
                    [1.0, 1.0, -1.0],
                    [1.0, 1.0, 1.0],
                    [1.0, -1.0, 1.0],
                ],
            ),
            (
                [-1.0, 0.0, 0.0],
                [
                    [-1.0, -1.0, 1.0],
                    [-1.0, 1.0, 1.0],
                    [-1.0, 1.0, -1.0],
                    [-1.0, -1.0, -1.0],
                ],
            ),
            (
                [0.0, 1.0, 0.0],
                [
                    [-1.0, 1.0, -1.0],
                    [-1.0, 1.0, 1.0],
                    [1.0, 1.0, 1.0],
                    [1.0, 1.0, -1.0],
                ],
            ),
            (
                [0.0, -1.0, 0.0],
                [
                    [-1.0, -1.0, -1.0],
                    [1.0, -1.0, -1.0],
                    [1.0, -1.0, 1.0],
                    [-1.0, -1.0, 1.0],
                ],
            ),
            (
                [0.0, 0.0, 1.0],
                [
                    [-1.0, -1.0, 1.0],
                    [1.0, -1.0, 1.0],
                    [1.0, 1.0, 1.0],
                    [-1.0, 1.0, 1.0],
                ],
            ),
            (
                [0.0, 0.0, -1.0],
                [
                    [1.0, -1.0, -1.0],
                    [-1.0, -1.0, -1.0],
                    [-1.0, 1.0, -1.0],
                    [1.0, 1.0, -1.0],
                ],
            ),
        ];

        let mut positions = Vec::with_capacity(36);
        let mut normals = Vec::with_capacity(36);
        for (normal, corners) in FACES {
            let n = Vec3::from(normal);
            for index in [0, 1, 2, 0, 2, 3] {
                positions.push(Vec3::from(corners[index]));
                normals.push(n);
            }
        }
        Self { positions, normals }
    }

    /// Number of vertices in the template.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the template holds no vertices. Unreachable through `new`.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Template vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Template vertex normals, parallel to `positions`.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }
}

/// Staged world-space geometry: parallel arrays like the template, ready
/// for upload as two buffers or interleaved as one.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl Mesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Interleave into the uploader's vertex layout.
    pub fn interleaved(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(position, normal)| Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
            })
            .collect()
    }

    /// Append one template instance, scaled then translated. Normals are
    /// copied as-is: instances only scale and translate, and the template
    /// normals are per-face unit vectors.
    fn append_instance(&mut self, template: &MeshTemplate, scale: Vec3, offset: Vec3) {
        self.positions
            .extend(template.positions().iter().map(|&v| v * scale + offset));
        self.normals.extend_from_slice(template.normals());
    }
}

/// Stage every platform of the world as one concatenated mesh.
pub fn build_world_geometry(world: &World, template: &MeshTemplate) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.positions
        .reserve(world.platform_count() * template.len());
    mesh.normals.reserve(world.platform_count() * template.len());
    for platform in world.platforms() {
        mesh.append_instance(template, platform.half_extent, platform.position);
    }
    mesh
}

/// Stage the player cube, scaled to its half-extent and centered at the
/// origin; the player's model matrix places it per frame.
pub fn build_player_geometry(template: &MeshTemplate, size: Vec3) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.append_instance(template, size, Vec3::ZERO);
    mesh
}
