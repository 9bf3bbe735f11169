//! Fixed-step time integration for the two-cart system
//!
//! `physics_step` advances the state by exactly one step `h` using
//! semi-implicit Euler (velocity first, then position with the new
//! velocity), followed by collision resolution.
//!
//! `FixedStepIntegrator` owns the state and replays as many fixed steps as
//! the caller's elapsed wall-clock time allows. Animation speed scales the
//! visual time fed into the accumulator and nothing else: `h` and every
//! physical constant stay the same, so the produced samples do not depend
//! on frame rate or speed.

use tracing::{debug, info, warn};

use super::collision::CollisionResolver;
use super::energy::Energies;
use super::forces::{BodyForces, ForceSet};
use super::params::{Parameters, Track};
use super::states::{Sample, SimulationState};

/// Longest wall-clock gap accepted per invocation, s
pub const MAX_FRAME_DT: f64 = 0.05;
/// Upper bound on physics steps replayed by one invocation
pub const MAX_STEPS_PER_TICK: usize = 2000;
pub const ANIMATION_SPEED_RANGE: (f64, f64) = (0.25, 4.0);

/// Kinetic energy below which a step can count as quiet, J
pub const QUIET_KINETIC: f64 = 1e-4;
/// Slack on the separation test between the carts, m
pub const QUIET_GAP: f64 = 1e-6;
/// Quiet steps in a row that end a run
pub const QUIET_STEPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Advance the state by one fixed step `params.h()`.
///
/// Forces are evaluated on the state at the start of the step, velocities
/// are kicked with them, positions drift with the kicked velocities, and
/// then walls and contact are resolved. Friction work is booked at the
/// step's average speed.
pub fn physics_step(state: &mut SimulationState, forces: &ForceSet, params: &Parameters, track: &Track) {
    let h = params.h();

    let mut f = BodyForces::default();
    forces.accumulate_forces(&*state, params, track, &mut f);
    if f.held1 {
        state.v1 = 0.0;
    }

    let (v1_old, v2_old) = (state.v1, state.v2);

    // Kick, then drift with the new velocity
    state.v1 += f.f1 / params.m1() * h;
    state.x1 += state.v1 * h;
    state.v2 += f.f2 / params.m2() * h;
    state.x2 += state.v2 * h;

    state.e_friction += friction_work(f.friction1, v1_old, state.v1, h);
    state.e_friction += friction_work(f.friction2, v2_old, state.v2, h);

    CollisionResolver::resolve(state, params, track);

    state.t += h;
}

/// Work done against friction over one step
fn friction_work(friction: f64, v_old: f64, v_new: f64, h: f64) -> f64 {
    friction.abs() * 0.5 * (v_old + v_new).abs() * h
}

/// A step is quiet when both carts are nearly still, cart 1 is clear of the
/// spring and the carts are apart
pub fn is_quiet(state: &SimulationState, params: &Parameters, track: &Track) -> bool {
    let kinetic = Energies::of(state, params, track).kinetic_total();
    let clear_of_spring = state.x1 >= track.spring_len;
    let separated = state.x1 + track.w1 <= state.x2 + QUIET_GAP;
    kinetic < QUIET_KINETIC && clear_of_spring && separated
}

pub fn clamp_animation_speed(speed: f64) -> f64 {
    speed.clamp(ANIMATION_SPEED_RANGE.0, ANIMATION_SPEED_RANGE.1)
}

pub struct FixedStepIntegrator {
    state: SimulationState,
    forces: ForceSet,
    run_state: RunState,
    accumulator: f64, // visual time not yet replayed, s
}

impl FixedStepIntegrator {
    pub fn new(state: SimulationState) -> Self {
        Self {
            state,
            forces: ForceSet::standard(),
            run_state: RunState::Stopped,
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Replace the state, e.g. on reset. Stops the run.
    pub fn load(&mut self, state: SimulationState) {
        self.state = state;
        self.run_state = RunState::Stopped;
        self.accumulator = 0.0;
    }

    /// Reposition cart 1 before a run has started
    pub fn place_cart1(&mut self, x1: f64) {
        self.state.x1 = x1;
    }

    /// Stopped -> Running, with an empty accumulator
    pub fn start(&mut self) {
        self.run_state = RunState::Running;
        self.accumulator = 0.0;
    }

    /// Running -> Stopped
    pub fn stop(&mut self) {
        self.run_state = RunState::Stopped;
    }

    /// Feed `elapsed` seconds of wall-clock time and replay the fixed steps
    /// they cover at `animation_speed`. Returns one sample per step, in order.
    ///
    /// `elapsed` is clamped to [0, MAX_FRAME_DT] (non-finite counts as 0),
    /// the speed to ANIMATION_SPEED_RANGE. At most MAX_STEPS_PER_TICK steps run;
    /// any remainder stays in the accumulator. The run stops right after the
    /// step that completes the quiet streak.
    pub fn tick(&mut self, elapsed: f64, animation_speed: f64, params: &Parameters, track: &Track) -> Vec<Sample> {
        if self.run_state != RunState::Running {
            return Vec::new();
        }

        let frame_dt = if elapsed.is_finite() { elapsed.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += frame_dt * clamp_animation_speed(animation_speed);

        let h = params.h();
        let mut samples = Vec::new();
        while self.accumulator >= h && samples.len() < MAX_STEPS_PER_TICK {
            physics_step(&mut self.state, &self.forces, params, track);
            self.accumulator -= h;
            samples.push(Sample::capture(&self.state, params, track));

            if is_quiet(&self.state, params, track) {
                self.state.quiet_streak += 1;
            } else {
                self.state.quiet_streak = 0;
            }
            if self.state.quiet_streak >= QUIET_STEPS {
                self.run_state = RunState::Stopped;
                info!(t = self.state.t, "carts at rest, auto-stop");
                break;
            }
        }

        if samples.len() >= MAX_STEPS_PER_TICK {
            warn!(backlog = self.accumulator, "step cap reached, deferring remaining time");
        }
        debug!(steps = samples.len(), t = self.state.t, "tick");
        samples
    }
}
