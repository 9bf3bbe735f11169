//! Energy and momentum bookkeeping
//!
//! Everything here is recomputed from the current state; the only
//! accumulated terms are the two dissipation counters carried by
//! `SimulationState`.

use super::params::{Parameters, Track};
use super::states::SimulationState;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Energies {
    pub k1: f64, // 0.5 m1 v1^2
    pub k2: f64, // 0.5 m2 v2^2
    pub us: f64, // 0.5 k c^2 while the spring is compressed
    pub emec: f64, // k1 + k2 + us
    pub ediss: f64, // e_friction + e_collision
    pub etot: f64, // emec + ediss
    pub p: f64, // m1 v1 + m2 v2
}

impl Energies {
    pub fn of(state: &SimulationState, params: &Parameters, track: &Track) -> Self {
        let k1 = kinetic(params.m1(), state.v1);
        let k2 = kinetic(params.m2(), state.v2);
        let us = spring_potential(params.k(), track.compression(state.x1));
        let emec = k1 + k2 + us;
        let ediss = state.e_friction + state.e_collision;
        Self {
            k1,
            k2,
            us,
            emec,
            ediss,
            etot: emec + ediss,
            p: params.m1() * state.v1 + params.m2() * state.v2,
        }
    }

    /// Kinetic energy of both carts
    pub fn kinetic_total(&self) -> f64 {
        self.k1 + self.k2
    }
}

pub fn kinetic(m: f64, v: f64) -> f64 {
    0.5 * m * v * v
}

pub fn spring_potential(k: f64, compression: f64) -> f64 {
    0.5 * k * compression * compression
}
