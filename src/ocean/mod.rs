//! Ocean surface: wave displacement, grid meshing and normal derivation.

mod clock;
mod displacement;
mod mesh;
mod normals;
mod system;

// Re-export public types
pub use clock::Clock;
pub use displacement::{evaluate, DisplacementEvaluator};
pub use mesh::{GridMeshBuilder, MeshBuffer, MeshVertex, Tangent, Vertex};
pub use normals::{derive_normals, face_perpendicular, FaceWeighting, NormalMode, NormalOptions};
pub use system::OceanSystem;
