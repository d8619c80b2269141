//! Oceanmesh - Animated ocean surface from summed sine or Gerstner waves
//!
//! Builds the displaced grid, steps it through time, and reports what a
//! renderer would have received.

use anyhow::Context;
use clap::Parser;
use log::info;

use oceanmesh::cli::Args;
use oceanmesh::ocean::OceanSystem;
use oceanmesh::rendering::{export_heightmap, export_normal_map, MeshRecorder};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.ocean_config().context("invalid grid arguments")?;
    let waves = args.wave_set();
    let dt = config.time_step_s;

    info!(
        "{}x{} grid, {} wave(s), {:?}, {} frame(s) at dt={:.4}s",
        config.grid.nx(),
        config.grid.ny(),
        waves.len(),
        waves.algorithm(),
        args.frames,
        dt
    );

    let mut ocean = OceanSystem::new(config, waves, MeshRecorder::default());
    ocean.start().context("initial mesh build failed")?;
    for frame in 0..args.frames {
        ocean
            .step(dt)
            .with_context(|| format!("frame {} failed", frame))?;
    }

    let mesh = ocean.mesh();
    mesh.validate().context("rebuilt mesh is inconsistent")?;
    let (lo, hi) = mesh.height_range().unwrap_or((0.0, 0.0));
    info!(
        "t={:.3}s: {} vertices, {} triangles, z in [{:.4}, {:.4}]",
        ocean.clock().elapsed(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        lo,
        hi
    );
    info!(
        "sink received {} commit(s), {} update(s)",
        ocean.sink().commits,
        ocean.sink().updates
    );

    let grid = ocean.config().grid;
    if let Some(path) = &args.heightmap {
        export_heightmap(mesh, &grid, path)
            .with_context(|| format!("writing heightmap {}", path.display()))?;
    }
    if let Some(path) = &args.normal_map {
        export_normal_map(mesh, &grid, path)
            .with_context(|| format!("writing normal map {}", path.display()))?;
    }

    Ok(())
}
