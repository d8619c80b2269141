//! Error taxonomy for wave editing, mesh construction and sink hand-off.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, OceanError>;

/// Failures surfaced to callers instead of clamping or producing NaN
#[derive(Debug, Error)]
pub enum OceanError {
    #[error("wave index {index} out of range (wave count {len})")]
    WaveIndexOutOfRange { index: usize, len: usize },

    #[error("vertex index {index} out of range (vertex count {len})")]
    VertexIndexOutOfRange { index: usize, len: usize },

    #[error("index buffer length {0} is not a multiple of 3")]
    PartialTriangle(usize),

    #[error("{buffer} has {len} entries but the mesh has {expected} vertices")]
    BufferLengthMismatch {
        buffer: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("grid cell ({i}, {j}) out of range for a {nx}x{ny} grid")]
    GridCellOutOfRange {
        i: usize,
        j: usize,
        nx: usize,
        ny: usize,
    },

    #[error("wavelength must not be zero")]
    ZeroWavelength,

    #[error("wavelength {wavelength} with speed {speed} gives non-finite wave terms")]
    DegenerateWave { wavelength: f32, speed: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFiniteParameter { field: &'static str, value: f32 },

    #[error("grid needs at least 2 vertices along {axis}, got {count}")]
    GridTooSmall { axis: char, count: usize },

    #[error("a {nx}x{ny} grid does not fit a 32-bit index buffer")]
    GridTooLarge { nx: usize, ny: usize },

    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f32),

    #[error("failed to write snapshot {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("mesh sink failed to {operation}: {source}")]
    Sink {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
