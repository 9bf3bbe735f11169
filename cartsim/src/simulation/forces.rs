//! Force contributors for the two-cart track
//!
//! Defines the `ForceTerm` trait and the two terms acting on the carts:
//! the Hookean launch spring (cart 1 only) and Coulomb friction with
//! static hold for cart 1. `ForceSet` sums the active terms.

use super::params::{Parameters, Track};
use super::states::SimulationState;

/// Below this speed a cart counts as resting
pub const REST_SPEED: f64 = 1e-6;

/// Net forces for one step, plus the friction part kept separately
/// so the integrator can book the work it does
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyForces {
    pub f1: f64, // net force on cart 1, N
    pub f2: f64, // net force on cart 2, N
    pub friction1: f64, // kinetic friction on cart 1, already included in f1
    pub friction2: f64, // kinetic friction on cart 2, already included in f2
    pub held1: bool, // static friction holds cart 1 in place this step
}

/// Trait for force sources acting on the carts.
/// Implementations add their contribution into `out`.
pub trait ForceTerm {
    fn apply(&self, state: &SimulationState, params: &Parameters, track: &Track, out: &mut BodyForces);
}

/// Collection of force terms
/// Contributions of every term are summed per cart
pub struct ForceSet {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Spring plus Coulomb friction, the model used by every run
    pub fn standard() -> Self {
        Self::new().with(LaunchSpring).with(CoulombFriction)
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute the net forces for the current state into `out`.
    /// A static hold on cart 1 overrides everything else acting on it.
    pub fn accumulate_forces(&self, state: &SimulationState, params: &Parameters, track: &Track, out: &mut BodyForces) {
        *out = BodyForces::default();
        for term in &self.terms {
            term.apply(state, params, track, out);
        }
        if out.held1 {
            out.f1 = 0.0;
            out.friction1 = 0.0;
        }
    }
}

/// Force the compressed spring exerts on cart 1, always pointing away from the wall
pub fn spring_force(x1: f64, params: &Parameters, track: &Track) -> f64 {
    params.k() * track.compression(x1)
}

/// Hookean spring fixed to the left wall
pub struct LaunchSpring;

impl ForceTerm for LaunchSpring {
    fn apply(&self, state: &SimulationState, params: &Parameters, track: &Track, out: &mut BodyForces) {
        out.f1 += spring_force(state.x1, params, track);
    }
}

/// Coulomb friction on both carts.
///
/// A moving cart feels `-mu m g sign(v)`, capped at the force that would
/// just bring it to rest within one step so friction never reverses motion.
/// A resting cart 1 is held when the spring cannot beat static friction;
/// otherwise the spring acts alone for that step. Cart 2 has no hold.
pub struct CoulombFriction;

impl CoulombFriction {
    fn sliding(m: f64, v: f64, params: &Parameters) -> f64 {
        let coulomb = params.mu() * m * params.g();
        let stopping = m * v.abs() / params.h();
        -coulomb.min(stopping) * v.signum()
    }
}

impl ForceTerm for CoulombFriction {
    fn apply(&self, state: &SimulationState, params: &Parameters, track: &Track, out: &mut BodyForces) {
        if state.v1.abs() > REST_SPEED {
            let f = Self::sliding(params.m1(), state.v1, params);
            out.f1 += f;
            out.friction1 = f;
        } else {
            let threshold = params.mu() * params.m1() * params.g();
            if spring_force(state.x1, params, track).abs() <= threshold {
                out.held1 = true;
            }
        }

        if state.v2.abs() > REST_SPEED {
            let f = Self::sliding(params.m2(), state.v2, params);
            out.f2 += f;
            out.friction2 = f;
        }
    }
}
