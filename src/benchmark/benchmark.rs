use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::CentralGravity;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec3, System};

/// Parameters shared by all benchmark systems.
fn bench_params(step_count: usize) -> Parameters {
    Parameters {
        G: 1.0,
        central_mass: 1000.0,
        dt: 0.001,
        step_count,
    }
}

/// Build a deterministic ring of `n` bodies on circular orbits
/// (no rand needed, runs are repeatable)
fn ring_system(n: usize, params: &Parameters) -> System {
    let radius = 5.0;
    let v_circ = (params.G * params.central_mass / radius).sqrt();

    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let angle = std::f64::consts::TAU * i as f64 / n as f64;
        bodies.push(Body {
            name: format!("body-{i}"),
            x: NVec3::new(radius * angle.cos(), radius * angle.sin(), 0.0),
            v: NVec3::new(-v_circ * angle.sin(), v_circ * angle.cos(), 0.0),
            m: 1.0,
        });
    }

    System { bodies, t: 0.0 }
}

pub fn bench_force() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let params = bench_params(1);
        let sys = ring_system(n, &params);
        let gravity = CentralGravity {
            G: params.G,
            central_mass: params.central_mass,
        };

        // Warm up
        let mut sink = 0.0;
        for b in &sys.bodies {
            sink += gravity.force_on(b).expect("ring bodies are off-origin").norm();
        }

        // Time one full force sweep over the system
        let t0 = Instant::now();
        for b in &sys.bodies {
            sink += gravity.force_on(b).expect("ring bodies are off-origin").norm();
        }
        let dt_force = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force sweep = {dt_force:10.8} s (checksum {sink:.3e})");
    }
}

pub fn bench_engine() {
    // Full runs: fixed step count, growing body count
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 1000;

    for n in ns {
        let params = bench_params(steps);
        let system = ring_system(n, &params);
        let gravity = CentralGravity {
            G: params.G,
            central_mass: params.central_mass,
        };
        let scenario = Scenario {
            parameters: params,
            system,
            gravity,
        };

        let mut engine = Engine::new(scenario);

        let t0 = Instant::now();
        engine.run().expect("ring scenario is singularity-free");
        let dt_run = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, steps = {steps}, run = {dt_run:8.6} s, recorded = {}",
            engine.trajectories().iter().map(|tr| tr.len()).sum::<usize>()
        );
    }
}
