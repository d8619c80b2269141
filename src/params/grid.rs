//! Grid resolution and extents for the ocean surface.

use crate::error::{OceanError, Result};

/// Regular vertex grid, row-major: vertex `(i, j)` lives at `nx * j + i`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Vertex count along X (at least 2)
    nx: usize,

    /// Vertex count along Y (at least 2)
    ny: usize,

    /// World extent along X. Carried for callers; positions stay in grid units.
    wx: f32,

    /// World extent along Y. Carried for callers; positions stay in grid units.
    wy: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            nx: 100,
            ny: 100,
            wx: 100.0,
            wy: 100.0,
        }
    }
}

impl GridSpec {
    /// Validate vertex counts (≥ 2 per axis, total must fit `u32` indices)
    pub fn new(nx: usize, ny: usize, wx: f32, wy: f32) -> Result<Self> {
        if nx < 2 {
            return Err(OceanError::GridTooSmall { axis: 'x', count: nx });
        }
        if ny < 2 {
            return Err(OceanError::GridTooSmall { axis: 'y', count: ny });
        }
        match nx.checked_mul(ny) {
            Some(total) if u32::try_from(total).is_ok() => {}
            _ => return Err(OceanError::GridTooLarge { nx, ny }),
        }
        for (field, value) in [("wx", wx), ("wy", wy)] {
            if !value.is_finite() {
                return Err(OceanError::NonFiniteParameter { field, value });
            }
        }
        Ok(Self { nx, ny, wx, wy })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn extent(&self) -> (f32, f32) {
        (self.wx, self.wy)
    }

    pub fn vertex_count(&self) -> usize {
        self.nx * self.ny
    }

    /// Two triangles per interior cell
    pub fn triangle_count(&self) -> usize {
        2 * (self.nx - 1) * (self.ny - 1)
    }

    pub fn index_count(&self) -> usize {
        3 * self.triangle_count()
    }

    /// Linear index of vertex `(i, j)`
    pub fn linear_index(&self, i: usize, j: usize) -> Result<u32> {
        if i >= self.nx || j >= self.ny {
            return Err(OceanError::GridCellOutOfRange {
                i,
                j,
                nx: self.nx,
                ny: self.ny,
            });
        }
        // Total vertex count was checked against u32 in `new`
        Ok((self.nx * j + i) as u32)
    }

    /// Texture coordinate of vertex `(i, j)` in `[0, 1]²`
    pub fn uv(&self, i: usize, j: usize) -> (f32, f32) {
        (
            i as f32 / (self.nx - 1) as f32,
            j as f32 / (self.ny - 1) as f32,
        )
    }
}
