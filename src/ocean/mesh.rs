//! Ocean grid mesh: displaced positions, UVs and a two-triangles-per-cell index buffer.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::displacement::DisplacementEvaluator;
use crate::error::{OceanError, Result};
use crate::params::{GridSpec, WaveParameterSet};

/// Interleaved vertex for GPU upload (position + normal + UV)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Tangent frame placeholder handed to the renderer alongside normals
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tangent {
    pub direction: Vec3,
    pub flip_y: bool,
}

/// Attributes of a single vertex, looked up by linear index
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    /// Zero until normals have been derived
    pub normal: Vec3,
    pub uv: Vec2,
}

/// Mesh arrays for one animation step, rebuilt from scratch every step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    /// Vertex colors (unused, always empty)
    pub colors: Vec<[u8; 4]>,
    /// Triangle list, three entries per triangle
    pub indices: Vec<u32>,
    /// Tangents (unused, always empty)
    pub tangents: Vec<Tangent>,
}

impl MeshBuffer {
    /// Empty every array, keeping allocations
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();
        self.colors.clear();
        self.indices.clear();
        self.tangents.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex(&self, index: usize) -> Result<MeshVertex> {
        let len = self.positions.len();
        let position = *self
            .positions
            .get(index)
            .ok_or(OceanError::VertexIndexOutOfRange { index, len })?;
        Ok(MeshVertex {
            position,
            normal: self.normals.get(index).copied().unwrap_or(Vec3::ZERO),
            uv: self.uvs.get(index).copied().unwrap_or(Vec2::ZERO),
        })
    }

    /// Check buffer invariants: whole triangles, indices in range, and
    /// normals/UVs (when present) parallel to positions
    pub fn validate(&self) -> Result<()> {
        let len = self.positions.len();
        if self.indices.len() % 3 != 0 {
            return Err(OceanError::PartialTriangle(self.indices.len()));
        }
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= len) {
            return Err(OceanError::VertexIndexOutOfRange {
                index: bad as usize,
                len,
            });
        }
        for (buffer, parallel) in [("normals", self.normals.len()), ("uvs", self.uvs.len())] {
            if parallel != 0 && parallel != len {
                return Err(OceanError::BufferLengthMismatch {
                    buffer,
                    len: parallel,
                    expected: len,
                });
            }
        }
        Ok(())
    }

    /// Interleave positions, normals and UVs for a vertex buffer upload
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(idx, p)| Vertex {
                position: p.to_array(),
                normal: self.normals.get(idx).copied().unwrap_or(Vec3::ZERO).to_array(),
                uv: self.uvs.get(idx).copied().unwrap_or(Vec2::ZERO).to_array(),
            })
            .collect()
    }

    /// Lowest and highest displaced Z, `None` for an empty mesh
    pub fn height_range(&self) -> Option<(f32, f32)> {
        self.positions.iter().fold(None, |range, p| match range {
            None => Some((p.z, p.z)),
            Some((lo, hi)) => Some((lo.min(p.z), hi.max(p.z))),
        })
    }
}

/// Builds the displaced grid mesh for a grid spec
#[derive(Debug, Clone)]
pub struct GridMeshBuilder {
    grid: GridSpec,
}

impl GridMeshBuilder {
    pub fn new(grid: GridSpec) -> Self {
        Self { grid }
    }

    /// Build a fresh mesh (normals left empty)
    pub fn build(&self, time: f32, waves: &WaveParameterSet) -> MeshBuffer {
        let mut mesh = MeshBuffer::default();
        self.build_into(&mut mesh, time, waves);
        mesh
    }

    /// Rebuild `mesh` in place, reusing its allocations
    ///
    /// Every array is cleared first; normals stay empty until derived.
    pub fn build_into(&self, mesh: &mut MeshBuffer, time: f32, waves: &WaveParameterSet) {
        mesh.clear();
        let (nx, ny) = (self.grid.nx(), self.grid.ny());
        let evaluator = DisplacementEvaluator::new(waves, time);

        self.displace(&evaluator, &mut mesh.positions);

        mesh.uvs.reserve(self.grid.vertex_count());
        mesh.indices.reserve(self.grid.index_count());
        for j in 0..ny {
            for i in 0..nx {
                let (u, v) = self.grid.uv(i, j);
                mesh.uvs.push(Vec2::new(u, v));

                if i < nx - 1 && j < ny - 1 {
                    // Vertex count fits u32, checked by GridSpec
                    let ij = (nx * j + i) as u32;
                    let i1j = ij + 1;
                    let ij1 = (nx * (j + 1) + i) as u32;
                    let i1j1 = ij1 + 1;

                    // Counter-clockwise seen from +Z: normals point up on a flat grid
                    mesh.indices.extend_from_slice(&[ij, ij1, i1j, i1j, ij1, i1j1]);
                }
            }
        }

        log::debug!(
            "rebuilt {}x{} ocean grid at t={:.3}s: {} vertices, {} triangles",
            nx,
            ny,
            time,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    #[cfg(feature = "parallel")]
    fn displace(&self, evaluator: &DisplacementEvaluator, positions: &mut Vec<Vec3>) {
        let nx = self.grid.nx();
        (0..self.grid.vertex_count())
            .into_par_iter()
            .map(|idx| evaluator.evaluate((idx % nx) as f32, (idx / nx) as f32))
            .collect_into_vec(positions);
    }

    #[cfg(not(feature = "parallel"))]
    fn displace(&self, evaluator: &DisplacementEvaluator, positions: &mut Vec<Vec3>) {
        positions.reserve(self.grid.vertex_count());
        for j in 0..self.grid.ny() {
            for i in 0..self.grid.nx() {
                positions.push(evaluator.evaluate(i as f32, j as f32));
            }
        }
    }
}
