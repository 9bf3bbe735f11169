use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{ForceSet, REST_SPEED};
use crate::simulation::integrator::physics_step;
use crate::simulation::params::{Parameters, Track};
use crate::simulation::states::SimulationState;

/// Time raw physics steps for a range of step sizes.
/// The launch is replayed from t = 0 whenever the carts come to rest,
/// so every batch times steps with motion in them.
pub fn bench_step() {
    let hs = [0.001, 0.002, 0.005, 0.01, 0.02];
    let steps = 200_000;
    let track = Track::default();
    let forces = ForceSet::standard();

    for h in hs {
        let mut params = Parameters::default();
        params.set_h(h);
        let start = SimulationState::initial(&params, &track);
        let mut state = start.clone();

        // Warm up
        for _ in 0..1000 {
            physics_step(&mut state, &forces, &params, &track);
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            physics_step(&mut state, &forces, &params, &track);
            if state.v1.abs() < REST_SPEED && state.v2.abs() < REST_SPEED {
                state = start.clone();
            }
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!("h = {:5.3}, {:8} steps in {:8.6} s, {:12.0} steps/s", h, steps, elapsed, steps as f64 / elapsed);
    }
}

/// Time `Engine::tick` at each animation speed over the same wall-clock span.
/// Paste output directly into a spreadsheet
pub fn bench_tick() {
    println!("speed,ticks,samples,ms");

    let frame_dt = 1.0 / 60.0;
    let ticks = 600; // ten seconds of frames

    for speed in [0.25, 1.0, 2.0, 4.0] {
        let mut engine = Engine::default();
        engine.set_animation_speed(speed);
        engine.start();

        let t0 = Instant::now();
        let mut samples = 0;
        for _ in 0..ticks {
            samples += engine.tick(frame_dt).len();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{},{},{:.6}", speed, ticks, samples, ms);
    }
}
