//! Parameter definitions with documented semantics and validated setters.
//!
//! - Wave definitions and the editable wave set
//! - Grid resolution
//! - Rebuild configuration with the ocean's default constants

mod grid;
mod ocean;
mod waves;

// Re-export all types
pub use grid::GridSpec;
pub use ocean::OceanConfig;
pub use waves::{WaveAlgorithm, WaveDefinition, WaveField, WaveParameterSet};
