//! Oceanmesh library - Animated wave-displaced grid meshes with derived normals

pub mod cli;
pub mod error;
pub mod ocean;
pub mod params;
pub mod rendering;

pub use error::{OceanError, Result};
