//! Build a ready-to-run simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`:
//! - an `Engine` with clamped parameters and the requested animation speed
//! - headless run settings (`frame_dt`, `t_end`)
//!
//! `run_headless` drives the engine with a fixed frame time the same way
//! a render loop would, without any window.

use tracing::info;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;

/// Outcome of a headless run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: usize, // invocations of the engine
    pub steps: usize, // physics steps taken
    pub t: f64, // simulated time reached
    pub auto_stopped: bool, // true if the carts came to rest before t_end
}

pub struct Scenario {
    pub engine: Engine,
    pub frame_dt: f64,
    pub t_end: f64,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig, clamped on the way in
        let mut engine = Engine::new(cfg.parameters.to_parameters());
        engine.set_animation_speed(cfg.engine.animation_speed);

        let frame_dt = if cfg.engine.frame_dt.is_finite() && cfg.engine.frame_dt > 0.0 {
            cfg.engine.frame_dt
        } else {
            1.0 / 60.0
        };

        Self {
            engine,
            frame_dt,
            t_end: if cfg.engine.t_end.is_finite() { cfg.engine.t_end.max(0.0) } else { 60.0 },
        }
    }

    /// Start a fresh run and tick until the carts come to rest or `t_end` passes
    pub fn run_headless(&mut self) -> RunSummary {
        self.engine.start();

        let mut ticks = 0;
        let mut steps = 0;
        while self.engine.is_running() && self.engine.state().t < self.t_end {
            steps += self.engine.tick(self.frame_dt).len();
            ticks += 1;
        }

        let auto_stopped = !self.engine.is_running();
        self.engine.pause();

        let summary = RunSummary {
            ticks,
            steps,
            t: self.engine.state().t,
            auto_stopped,
        };
        info!(?summary, "headless run finished");
        summary
    }
}
