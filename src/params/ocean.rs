//! Ocean rebuild configuration: grid, normal derivation and frame stepping.

use super::grid::GridSpec;
use crate::ocean::NormalOptions;

/// Per-rebuild configuration of the ocean surface
#[derive(Debug, Clone, PartialEq)]
pub struct OceanConfig {
    /// Grid resolution and extents used for every rebuild
    pub grid: GridSpec,

    /// How vertex normals are derived after each rebuild
    pub normals: NormalOptions,

    /// Ask the renderer to build collision data on mesh creation
    pub generate_collision: bool,

    /// Fixed animation step for drivers without their own clock (seconds)
    pub time_step_s: f32,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            normals: NormalOptions::default(),
            generate_collision: true,
            time_step_s: 1.0 / 60.0,
        }
    }
}
