//! Wave displacement kernel: grid coordinate + time -> displaced surface point.

use glam::{Vec2, Vec3};

use crate::params::{WaveAlgorithm, WaveDefinition, WaveParameterSet};

/// Per-wave terms that stay constant for a whole rebuild
#[derive(Debug, Clone, Copy)]
struct WaveTerms {
    amplitude: f32,
    sharpness: f32,
    frequency: f32,
    /// `time * 2 * speed / wavelength`
    time_phase: f32,
    raw_direction: Vec2,
    unit_direction: Vec2,
}

impl WaveTerms {
    fn new(wave: &WaveDefinition, time: f32) -> Self {
        Self {
            amplitude: wave.amplitude(),
            sharpness: wave.sharpness(),
            frequency: wave.frequency(),
            time_phase: time * wave.phase_speed(),
            raw_direction: wave.direction(),
            // Zero-length directions yield a zero vector, not NaN
            unit_direction: wave.direction().normalize_or_zero(),
        }
    }
}

/// Evaluates the selected wave algorithm at a fixed point in time
///
/// Built once per rebuild so the per-wave divisions and normalizations are
/// not repeated for every vertex.
#[derive(Debug, Clone)]
pub struct DisplacementEvaluator {
    algorithm: WaveAlgorithm,
    terms: Vec<WaveTerms>,
}

impl DisplacementEvaluator {
    pub fn new(waves: &WaveParameterSet, time: f32) -> Self {
        Self {
            algorithm: waves.algorithm(),
            terms: waves.iter().map(|w| WaveTerms::new(w, time)).collect(),
        }
    }

    /// Displaced position of grid vertex `(grid_x, grid_y)`
    ///
    /// An empty wave set yields the undisplaced point `(grid_x, grid_y, 0)`.
    pub fn evaluate(&self, grid_x: f32, grid_y: f32) -> Vec3 {
        match self.algorithm {
            WaveAlgorithm::SummationOfSines => self.sum_of_sines(grid_x, grid_y),
            WaveAlgorithm::Gerstner => self.gerstner(grid_x, grid_y),
        }
    }

    /// Vertical-only displacement; X and Y stay at the grid coordinate
    ///
    /// A wave whose phase overflows contributes nothing.
    fn sum_of_sines(&self, x: f32, y: f32) -> Vec3 {
        let z = self.terms.iter().fold(0.0, |z, t| {
            let along = t.unit_direction.x * x + t.unit_direction.y * y;
            let phase = along * t.frequency + t.time_phase;
            if phase.is_finite() {
                z + t.amplitude * phase.sin()
            } else {
                z
            }
        });
        Vec3::new(x, y, z)
    }

    /// Trochoidal displacement
    ///
    /// The phase projects onto the raw direction while the horizontal offset
    /// uses the normalized one. Both must stay as they are to reproduce
    /// existing wave presets. A wave whose phase overflows is skipped.
    fn gerstner(&self, x: f32, y: f32) -> Vec3 {
        let mut point = Vec3::new(x, y, 0.0);
        for t in &self.terms {
            let along = t.raw_direction.x * x + t.raw_direction.y * y;
            let phase = t.frequency * along + t.time_phase;
            if !phase.is_finite() {
                continue;
            }
            let (sin, cos) = phase.sin_cos();
            let lateral = t.sharpness * t.amplitude;

            point.x += lateral * t.unit_direction.x * cos;
            point.y += lateral * t.unit_direction.y * cos;
            point.z += t.amplitude * sin;
        }
        point
    }
}

/// One-shot evaluation of `waves` at grid vertex `(grid_x, grid_y)` and `time`
pub fn evaluate(grid_x: f32, grid_y: f32, time: f32, waves: &WaveParameterSet) -> Vec3 {
    DisplacementEvaluator::new(waves, time).evaluate(grid_x, grid_y)
}
