use glam::{Vec2, Vec3};

use oceanmesh::ocean::{evaluate, OceanSystem};
use oceanmesh::params::{GridSpec, OceanConfig, WaveAlgorithm, WaveDefinition, WaveParameterSet};
use oceanmesh::rendering::{MeshRecorder, MeshSink};
use oceanmesh::{OceanError, Result};

/// Sink that fails on demand, standing in for a renderer that went away
#[derive(Default)]
struct FlakySink {
    fail_updates: bool,
    updates: usize,
}

impl MeshSink for FlakySink {
    fn commit(&mut self, _mesh: &oceanmesh::ocean::MeshBuffer, _collision: bool) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, _mesh: &oceanmesh::ocean::MeshBuffer) -> Result<()> {
        if self.fail_updates {
            return Err(OceanError::Sink {
                operation: "update",
                source: "device lost".into(),
            });
        }
        self.updates += 1;
        Ok(())
    }
}

fn config(nx: usize, ny: usize) -> OceanConfig {
    OceanConfig {
        grid: GridSpec::new(nx, ny, nx as f32, ny as f32).unwrap(),
        ..OceanConfig::default()
    }
}

fn swell(algorithm: WaveAlgorithm) -> WaveParameterSet {
    let mut waves = WaveParameterSet::new(algorithm);
    waves.push(WaveDefinition::new(10.0, 0.6, 2.0, 0.8, Vec2::new(1.0, 0.3)).unwrap());
    waves.push(WaveDefinition::new(4.0, 0.15, -1.0, 0.5, Vec2::new(-0.2, 1.0)).unwrap());
    waves
}

#[test]
fn test_pipeline_matches_direct_evaluation() {
    let mut ocean = OceanSystem::new(
        config(9, 7),
        swell(WaveAlgorithm::Gerstner),
        MeshRecorder::default(),
    );
    ocean.start().unwrap();
    for _ in 0..5 {
        ocean.step(0.05).unwrap();
    }

    let t = ocean.clock().elapsed();
    let grid = ocean.config().grid;
    let mesh = ocean.mesh();
    for j in 0..grid.ny() {
        for i in 0..grid.nx() {
            let idx = grid.linear_index(i, j).unwrap() as usize;
            let expected = evaluate(i as f32, j as f32, t, ocean.waves());
            assert_eq!(mesh.vertex(idx).unwrap().position, expected);
        }
    }
}

#[test]
fn test_topology_stable_across_updates() {
    let mut ocean = OceanSystem::new(
        config(12, 12),
        swell(WaveAlgorithm::SummationOfSines),
        MeshRecorder::default(),
    );
    let committed = ocean.start().unwrap().indices.clone();
    for _ in 0..10 {
        let mesh = ocean.step(1.0 / 30.0).unwrap();
        assert_eq!(mesh.indices, committed);
        assert_eq!(mesh.normals.len(), mesh.positions.len());
    }
    assert_eq!(ocean.sink().commits, 1);
    assert_eq!(ocean.sink().updates, 10);
}

#[test]
fn test_surface_moves_over_time() {
    let mut ocean = OceanSystem::new(
        config(6, 6),
        swell(WaveAlgorithm::SummationOfSines),
        MeshRecorder::default(),
    );
    let first = ocean.start().unwrap().positions.clone();
    let later = ocean.step(0.5).unwrap();
    assert_ne!(first, later.positions);
    // Sines only move vertices vertically
    for (a, b) in first.iter().zip(&later.positions) {
        assert_eq!((a.x, a.y), (b.x, b.y));
    }
}

#[test]
fn test_removing_every_wave_flattens_surface() {
    let mut ocean = OceanSystem::new(
        config(5, 5),
        swell(WaveAlgorithm::Gerstner),
        MeshRecorder::default(),
    );
    ocean.start().unwrap();
    while !ocean.waves().is_empty() {
        ocean.waves_mut().remove(0).unwrap();
    }
    assert!(ocean.waves_mut().remove(0).is_err());

    let mesh = ocean.step(0.1).unwrap();
    for (idx, p) in mesh.positions.iter().enumerate() {
        assert_eq!(*p, Vec3::new((idx % 5) as f32, (idx / 5) as f32, 0.0));
    }
    assert!(mesh.normals.iter().all(|n| (*n - Vec3::Z).length() < 1e-6));
}

#[test]
fn test_sink_errors_propagate() {
    let mut ocean = OceanSystem::new(
        config(3, 3),
        swell(WaveAlgorithm::Gerstner),
        FlakySink::default(),
    );
    ocean.start().unwrap();
    ocean.step(0.1).unwrap();

    let mut sink = ocean.into_sink();
    assert_eq!(sink.updates, 1);
    sink.fail_updates = true;

    let mut ocean = OceanSystem::new(config(3, 3), swell(WaveAlgorithm::Gerstner), sink);
    ocean.start().unwrap();
    let err = ocean.step(0.1).unwrap_err();
    assert!(matches!(err, OceanError::Sink { operation: "update", .. }));
    assert!(err.to_string().contains("device lost"));
}
