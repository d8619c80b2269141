//! Renderer hand-off: the mesh sink seam plus PNG snapshots of the surface.

use std::path::Path;

use glam::Vec3;
use image::{ImageBuffer, Luma, Rgb};

use crate::error::{OceanError, Result};
use crate::ocean::MeshBuffer;
use crate::params::GridSpec;

/// Receives rebuilt meshes
///
/// `commit` creates the renderable section (topology included). `update`
/// resends vertex attributes only: positions, normals, uvs, colors and
/// tangents. The index buffer from the last commit stays in use.
pub trait MeshSink {
    fn commit(&mut self, mesh: &MeshBuffer, generate_collision: bool) -> Result<()>;

    fn update(&mut self, mesh: &MeshBuffer) -> Result<()>;
}

impl<S: MeshSink + ?Sized> MeshSink for &mut S {
    fn commit(&mut self, mesh: &MeshBuffer, generate_collision: bool) -> Result<()> {
        (**self).commit(mesh, generate_collision)
    }

    fn update(&mut self, mesh: &MeshBuffer) -> Result<()> {
        (**self).update(mesh)
    }
}

/// In-memory sink that keeps what a renderer would have received
#[derive(Debug, Default)]
pub struct MeshRecorder {
    pub commits: usize,
    pub updates: usize,
    pub generate_collision: bool,
    /// Topology from the last commit
    pub indices: Vec<u32>,
    /// Vertex attributes from the last commit or update
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl MeshSink for MeshRecorder {
    fn commit(&mut self, mesh: &MeshBuffer, generate_collision: bool) -> Result<()> {
        self.commits += 1;
        self.generate_collision = generate_collision;
        self.indices.clone_from(&mesh.indices);
        self.positions.clone_from(&mesh.positions);
        self.normals.clone_from(&mesh.normals);
        Ok(())
    }

    fn update(&mut self, mesh: &MeshBuffer) -> Result<()> {
        if self.commits == 0 {
            return Err(OceanError::Sink {
                operation: "update",
                source: "no mesh section has been committed".into(),
            });
        }
        if mesh.vertex_count() != self.positions.len() {
            return Err(OceanError::Sink {
                operation: "update",
                source: format!(
                    "vertex count changed from {} to {} without a commit",
                    self.positions.len(),
                    mesh.vertex_count()
                )
                .into(),
            });
        }
        self.updates += 1;
        self.positions.clone_from(&mesh.positions);
        self.normals.clone_from(&mesh.normals);
        Ok(())
    }
}

/// Write displaced heights as a 16-bit grayscale PNG, one pixel per vertex
///
/// Heights are stretched over the mesh's own range; a flat mesh is mid-gray.
pub fn export_heightmap(mesh: &MeshBuffer, grid: &GridSpec, path: &Path) -> Result<()> {
    check_vertex_count("positions", mesh.positions.len(), grid)?;
    let (lo, hi) = mesh.height_range().unwrap_or((0.0, 0.0));
    let span = hi - lo;

    let image = ImageBuffer::from_fn(grid.nx() as u32, grid.ny() as u32, |x, y| {
        let z = mesh.positions[vertex_at(grid, x, y)].z;
        let t = if span > 0.0 { (z - lo) / span } else { 0.5 };
        Luma([(t * u16::MAX as f32).round() as u16])
    });

    save(image, path)?;
    log::info!(
        "wrote {}x{} heightmap to {} (z in [{:.3}, {:.3}])",
        grid.nx(),
        grid.ny(),
        path.display(),
        lo,
        hi
    );
    Ok(())
}

/// Write vertex normals as an RGB PNG, components remapped from [-1, 1]
pub fn export_normal_map(mesh: &MeshBuffer, grid: &GridSpec, path: &Path) -> Result<()> {
    check_vertex_count("normals", mesh.normals.len(), grid)?;

    let image = ImageBuffer::from_fn(grid.nx() as u32, grid.ny() as u32, |x, y| {
        let n = mesh.normals[vertex_at(grid, x, y)].clamp(Vec3::NEG_ONE, Vec3::ONE);
        let rgb = (n * 0.5 + Vec3::splat(0.5)) * 255.0;
        Rgb([rgb.x.round() as u8, rgb.y.round() as u8, rgb.z.round() as u8])
    });

    save(image, path)?;
    log::info!("wrote {}x{} normal map to {}", grid.nx(), grid.ny(), path.display());
    Ok(())
}

fn vertex_at(grid: &GridSpec, x: u32, y: u32) -> usize {
    grid.nx() * y as usize + x as usize
}

fn check_vertex_count(buffer: &'static str, len: usize, grid: &GridSpec) -> Result<()> {
    if len == grid.vertex_count() {
        Ok(())
    } else {
        Err(OceanError::BufferLengthMismatch {
            buffer,
            len,
            expected: grid.vertex_count(),
        })
    }
}

fn save<P>(image: ImageBuffer<P, Vec<P::Subpixel>>, path: &Path) -> Result<()>
where
    P: image::PixelWithColorType,
    [P::Subpixel]: image::EncodableLayout,
{
    image.save(path).map_err(|source| OceanError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}
