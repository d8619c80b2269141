//! Per-vertex normals derived from triangle faces.

use glam::Vec3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{OceanError, Result};

/// How triangles are read from the position/index buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalMode {
    /// Walk the index buffer; faces sharing a vertex are averaged
    #[default]
    Smooth,

    /// Ignore indices; each consecutive position triple is its own face
    Flat,
}

/// Contribution of each face to the vertices it touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceWeighting {
    /// Unnormalized cross product: larger triangles pull harder
    #[default]
    Area,

    /// Unit-length face normal: every face counts once
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalOptions {
    pub mode: NormalMode,
    pub weighting: FaceWeighting,
    /// Scale every final normal to unit length (zero stays zero)
    pub normalize: bool,
}

impl Default for NormalOptions {
    fn default() -> Self {
        Self {
            mode: NormalMode::Smooth,
            weighting: FaceWeighting::Area,
            normalize: true,
        }
    }
}

/// Face-perpendicular of triangle `(p1, p2, p3)`: `(p3 - p1) x (p2 - p1)`
///
/// Magnitude is twice the triangle area unless weighting is `Equal`.
pub fn face_perpendicular(p1: Vec3, p2: Vec3, p3: Vec3, weighting: FaceWeighting) -> Vec3 {
    let perp = (p3 - p1).cross(p2 - p1);
    match weighting {
        FaceWeighting::Area => perp,
        FaceWeighting::Equal => perp.normalize_or_zero(),
    }
}

/// Recompute `normals` from `positions` (and `indices` in smooth mode)
///
/// With fewer than 3 positions this is a no-op and `normals` is left as is.
/// Otherwise `normals` is resized to `positions.len()`. An index that does not
/// address a position fails before `normals` is touched.
pub fn derive_normals(
    positions: &[Vec3],
    indices: &[u32],
    normals: &mut Vec<Vec3>,
    options: &NormalOptions,
) -> Result<()> {
    if positions.len() < 3 {
        return Ok(());
    }

    if options.mode == NormalMode::Smooth {
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(OceanError::VertexIndexOutOfRange {
                index: bad as usize,
                len: positions.len(),
            });
        }
    }

    normals.clear();
    normals.resize(positions.len(), Vec3::ZERO);

    match options.mode {
        NormalMode::Smooth => accumulate_smooth(positions, indices, normals, options.weighting),
        NormalMode::Flat => assign_flat(positions, normals, options.weighting),
    }

    if options.normalize {
        normalize_all(normals);
    }
    Ok(())
}

/// Trailing indices that do not form a full triangle are ignored
fn accumulate_smooth(
    positions: &[Vec3],
    indices: &[u32],
    normals: &mut [Vec3],
    weighting: FaceWeighting,
) {
    for tri in indices.chunks_exact(3) {
        let [i1, i2, i3] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let perp = face_perpendicular(positions[i1], positions[i2], positions[i3], weighting);
        normals[i1] += perp;
        normals[i2] += perp;
        normals[i3] += perp;
    }
}

fn assign_flat(positions: &[Vec3], normals: &mut [Vec3], weighting: FaceWeighting) {
    for (tri, out) in positions.chunks_exact(3).zip(normals.chunks_exact_mut(3)) {
        let perp = face_perpendicular(tri[0], tri[1], tri[2], weighting);
        out.fill(perp);
    }
}

#[cfg(feature = "parallel")]
fn normalize_all(normals: &mut [Vec3]) {
    normals
        .par_iter_mut()
        .for_each(|n| *n = n.normalize_or_zero());
}

#[cfg(not(feature = "parallel"))]
fn normalize_all(normals: &mut [Vec3]) {
    for n in normals.iter_mut() {
        *n = n.normalize_or_zero();
    }
}
