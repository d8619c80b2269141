//! Frame driver: advance the clock, rebuild the grid, derive normals, hand off to the sink.

use std::time::Instant;

use super::clock::Clock;
use super::mesh::{GridMeshBuilder, MeshBuffer};
use super::normals::derive_normals;
use crate::error::Result;
use crate::params::{GridSpec, OceanConfig, WaveParameterSet};
use crate::rendering::MeshSink;

/// Ocean surface with its wave parameters, clock and render sink
pub struct OceanSystem<S: MeshSink> {
    config: OceanConfig,
    waves: WaveParameterSet,
    clock: Clock,
    mesh: MeshBuffer,
    sink: S,
    /// Grid whose topology the sink currently holds
    committed_grid: Option<GridSpec>,
}

impl<S: MeshSink> OceanSystem<S> {
    /// Create new ocean system; nothing is sent to the sink until `start` or `step`
    pub fn new(config: OceanConfig, waves: WaveParameterSet, sink: S) -> Self {
        Self {
            config,
            waves,
            clock: Clock::new(),
            mesh: MeshBuffer::default(),
            sink,
            committed_grid: None,
        }
    }

    pub fn config(&self) -> &OceanConfig {
        &self.config
    }

    pub fn waves(&self) -> &WaveParameterSet {
        &self.waves
    }

    /// Wave edits made here show up on the next rebuild
    pub fn waves_mut(&mut self) -> &mut WaveParameterSet {
        &mut self.waves
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Use `grid` from the next rebuild on; a different grid forces a commit
    pub fn set_grid(&mut self, grid: GridSpec) {
        self.config.grid = grid;
    }

    /// Build the mesh at the current time and commit it
    pub fn start(&mut self) -> Result<&MeshBuffer> {
        self.rebuild()?;
        self.commit()?;
        Ok(&self.mesh)
    }

    /// Advance by `dt_s`, rebuild, and send the new vertex attributes
    ///
    /// Commits instead of updating when the sink holds no mesh yet or the
    /// grid changed since the last commit.
    pub fn step(&mut self, dt_s: f32) -> Result<&MeshBuffer> {
        self.clock.advance(dt_s)?;
        self.rebuild()?;

        match self.committed_grid {
            Some(grid) if grid == self.config.grid => self.sink.update(&self.mesh)?,
            Some(grid) => {
                log::warn!(
                    "grid changed from {}x{} to {}x{}, recommitting mesh",
                    grid.nx(),
                    grid.ny(),
                    self.config.grid.nx(),
                    self.config.grid.ny()
                );
                self.commit()?;
            }
            None => self.commit()?,
        }
        Ok(&self.mesh)
    }

    fn rebuild(&mut self) -> Result<()> {
        let started = Instant::now();
        let time_s = self.clock.elapsed();

        GridMeshBuilder::new(self.config.grid).build_into(&mut self.mesh, time_s, &self.waves);
        derive_normals(
            &self.mesh.positions,
            &self.mesh.indices,
            &mut self.mesh.normals,
            &self.config.normals,
        )?;

        log::trace!(
            "ocean rebuild at t={:.3}s took {:?}",
            time_s,
            started.elapsed()
        );
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.sink
            .commit(&self.mesh, self.config.generate_collision)?;
        self.committed_grid = Some(self.config.grid);
        log::info!(
            "committed ocean mesh: {} vertices, {} triangles, collision={}",
            self.mesh.vertex_count(),
            self.mesh.triangle_count(),
            self.config.generate_collision
        );
        Ok(())
    }
}
