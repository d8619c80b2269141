//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::Vec2;

use crate::error::Result;
use crate::ocean::{FaceWeighting, NormalMode, NormalOptions};
use crate::params::{GridSpec, OceanConfig, WaveAlgorithm, WaveDefinition, WaveParameterSet};

/// Wave algorithm as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Summation of sines (vertical displacement only)
    Sines,
    /// Gerstner trochoidal waves
    Gerstner,
}

impl From<AlgorithmArg> for WaveAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sines => WaveAlgorithm::SummationOfSines,
            AlgorithmArg::Gerstner => WaveAlgorithm::Gerstner,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "oceanmesh")]
#[command(about = "Animate a wave-displaced ocean grid and derive its normals", long_about = None)]
pub struct Args {
    /// Grid vertex count along X
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    pub nx: usize,

    /// Grid vertex count along Y
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    pub ny: usize,

    /// World extent along X
    #[arg(long, value_name = "UNITS", default_value_t = 100.0)]
    pub extent_x: f32,

    /// World extent along Y
    #[arg(long, value_name = "UNITS", default_value_t = 100.0)]
    pub extent_y: f32,

    /// Number of animation steps after the initial build
    #[arg(long, value_name = "COUNT", default_value_t = 60)]
    pub frames: usize,

    /// Time step per frame (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Displacement algorithm
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Sines)]
    pub algorithm: AlgorithmArg,

    /// Add a wave: AMPLITUDE,WAVELENGTH,SPEED,SHARPNESS,DIR_X,DIR_Y (repeatable)
    #[arg(long = "wave", value_name = "A,L,S,Q,DX,DY", value_parser = parse_wave)]
    pub waves: Vec<WaveDefinition>,

    /// Treat consecutive position triples as independent flat triangles
    #[arg(long)]
    pub flat: bool,

    /// Weight every face equally instead of by area
    #[arg(long)]
    pub equal_weight: bool,

    /// Keep accumulated normals unnormalized
    #[arg(long)]
    pub no_normalize: bool,

    /// Do not request collision data on mesh creation
    #[arg(long)]
    pub no_collision: bool,

    /// Write the final surface heights to a 16-bit grayscale PNG
    #[arg(long, value_name = "PATH")]
    pub heightmap: Option<PathBuf>,

    /// Write the final vertex normals to an RGB PNG
    #[arg(long, value_name = "PATH")]
    pub normal_map: Option<PathBuf>,
}

impl Args {
    /// Build the rebuild configuration from grid and normal flags
    pub fn ocean_config(&self) -> Result<OceanConfig> {
        Ok(OceanConfig {
            grid: GridSpec::new(self.nx, self.ny, self.extent_x, self.extent_y)?,
            normals: NormalOptions {
                mode: if self.flat {
                    NormalMode::Flat
                } else {
                    NormalMode::Smooth
                },
                weighting: if self.equal_weight {
                    FaceWeighting::Equal
                } else {
                    FaceWeighting::Area
                },
                normalize: !self.no_normalize,
            },
            generate_collision: !self.no_collision,
            time_step_s: self.dt,
        })
    }

    /// Waves from `--wave`, or the single default wave when none were given
    pub fn wave_set(&self) -> WaveParameterSet {
        let mut set = if self.waves.is_empty() {
            WaveParameterSet::single_default()
        } else {
            let mut set = WaveParameterSet::default();
            for wave in &self.waves {
                set.push(*wave);
            }
            set
        };
        set.set_algorithm(self.algorithm.into());
        set
    }
}

/// Parse `AMPLITUDE,WAVELENGTH,SPEED,SHARPNESS,DIR_X,DIR_Y`
fn parse_wave(s: &str) -> std::result::Result<WaveDefinition, String> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| format!("invalid number '{}': {}", part.trim(), e))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let [amplitude, wavelength, speed, sharpness, dx, dy] = values[..] else {
        return Err(format!("expected 6 comma-separated values, got {}", values.len()));
    };
    WaveDefinition::new(wavelength, amplitude, speed, sharpness, Vec2::new(dx, dy))
        .map_err(|e| e.to_string())
}
