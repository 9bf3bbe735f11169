//! Core state types for the two-cart simulation.
//!
//! - `SimulationState`: the live, mutable state owned by the integrator
//! - `Sample`: an immutable snapshot recorded after every physics step

use super::energy::Energies;
use super::params::{Parameters, Track};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub t: f64, // simulated time, s
    pub x1: f64, // left edge of cart 1, m
    pub v1: f64, // velocity of cart 1, m/s (positive = rightward)
    pub x2: f64, // left edge of cart 2, m
    pub v2: f64, // velocity of cart 2, m/s
    pub e_friction: f64, // cumulative friction dissipation, J
    pub e_collision: f64, // cumulative collision loss, J
    pub quiet_streak: u32, // consecutive quiet steps, drives auto-stop
}

impl SimulationState {
    /// State at t = 0: cart 1 compressed against the spring by `x0`,
    /// cart 2 parked at its start mark, everything at rest
    pub fn initial(params: &Parameters, track: &Track) -> Self {
        Self {
            t: 0.0,
            x1: track.x1_start(params.x0()),
            v1: 0.0,
            x2: track.x2_start,
            v2: 0.0,
            e_friction: 0.0,
            e_collision: 0.0,
            quiet_streak: 0,
        }
    }
}

/// One recorded point of the time series. Never mutated once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub x1: f64,
    pub v1: f64,
    pub x2: f64,
    pub v2: f64,
    pub k1: f64, // kinetic energy of cart 1
    pub k2: f64, // kinetic energy of cart 2
    pub us: f64, // elastic potential energy of the spring
    pub emec: f64, // k1 + k2 + us
    pub ediss: f64, // friction + collision losses
    pub p: f64, // total momentum
}

impl Sample {
    pub fn capture(state: &SimulationState, params: &Parameters, track: &Track) -> Self {
        let en = Energies::of(state, params, track);
        Self {
            t: state.t,
            x1: state.x1,
            v1: state.v1,
            x2: state.x2,
            v2: state.v2,
            k1: en.k1,
            k2: en.k2,
            us: en.us,
            emec: en.emec,
            ediss: en.ediss,
            p: en.p,
        }
    }

    /// Mechanical plus dissipated energy
    pub fn total_energy(&self) -> f64 {
        self.emec + self.ediss
    }
}
