//! Wall bounces and cart-cart contact.
//!
//! Runs after motion has been integrated for the step. Both checks use
//! plain overlap tests on the stepped positions (no time-of-impact search):
//!
//! 1. Walls: a cart past a wall is put back on it and its velocity is
//!    reflected and scaled by the restitution coefficient `e`.
//! 2. Contact: overlapping, approaching carts are pushed apart by half the
//!    overlap each and receive the 1D restitution impulse. Once the carts
//!    overlap they always count as approaching, so an overlap left by
//!    discrete stepping is corrected on the step it shows up.
//!
//! Kinetic energy lost in a cart-cart contact is added to `e_collision`;
//! it is never subtracted. Wall bounces only change position and velocity.

use tracing::debug;

use super::energy::kinetic;
use super::params::{Parameters, Track};
use super::states::SimulationState;

/// Cart 1 never rests closer than this to the left wall
pub const X1_FLOOR: f64 = 0.02;

/// What happened during one resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionReport {
    pub left_wall: bool, // cart 1 hit the left wall
    pub right_wall: bool, // cart 2 hit the right wall
    pub contact: bool, // carts collided with each other
    pub energy_lost: f64, // kinetic energy removed by contact this pass, J
}

pub struct CollisionResolver;

impl CollisionResolver {
    /// Resolve walls, then contact, then re-apply the position limits.
    /// Updates `state` in place, including `e_collision`.
    pub fn resolve(state: &mut SimulationState, params: &Parameters, track: &Track) -> CollisionReport {
        let mut report = CollisionReport::default();
        Self::reflect_walls(state, params, track, &mut report);
        Self::resolve_contact(state, params, track, &mut report);

        // the contact push may have moved cart 2 into the wall again;
        // cart 1 backs off with it so the carts never end a step overlapping
        let x2_max = track.length - track.w2;
        if state.x2 > x2_max {
            state.x2 = x2_max;
            state.x1 = state.x1.min(state.x2 - track.w1);
        }
        if state.x1 < X1_FLOOR {
            state.x1 = X1_FLOOR;
        }

        state.e_collision += report.energy_lost;
        report
    }

    /// Post-collision velocities for a 1D impact with restitution `e`.
    /// Conserves momentum; `e = 1` swaps equal-mass velocities, `e = 0`
    /// leaves both carts at the common velocity.
    pub fn restitution_velocities(m1: f64, m2: f64, v1: f64, v2: f64, e: f64) -> (f64, f64) {
        let m = m1 + m2;
        let p = m1 * v1 + m2 * v2;
        let v_rel = v1 - v2;
        let v1f = (p - m2 * e * v_rel) / m;
        let v2f = (p + m1 * e * v_rel) / m;
        (v1f, v2f)
    }

    /// Carts touch when the right edge of cart 1 is past the left edge of cart 2
    pub fn in_contact(state: &SimulationState, track: &Track) -> bool {
        state.x1 + track.w1 > state.x2
    }

    /// Separated carts approach when cart 1 is faster than cart 2;
    /// overlapping carts are always treated as approaching
    pub fn approaching(state: &SimulationState, track: &Track) -> bool {
        if state.x1 + track.w1 <= state.x2 {
            state.v1 > state.v2
        } else {
            true
        }
    }

    // helpers ==============================================================================

    fn reflect_walls(state: &mut SimulationState, params: &Parameters, track: &Track, report: &mut CollisionReport) {
        let e = params.e();

        if state.x1 < 0.0 {
            state.x1 = 0.0;
            state.v1 = state.v1.abs() * e;
            report.left_wall = true;
        }

        if state.x2 + track.w2 > track.length {
            state.x2 = track.length - track.w2;
            state.v2 = -state.v2.abs() * e;
            report.right_wall = true;
        }
    }

    fn resolve_contact(state: &mut SimulationState, params: &Parameters, track: &Track, report: &mut CollisionReport) {
        if !(Self::in_contact(state, track) && Self::approaching(state, track)) {
            return;
        }

        let overlap = state.x1 + track.w1 - state.x2;
        let push = overlap / 2.0;
        state.x1 -= push;
        state.x2 += push;

        let (m1, m2) = (params.m1(), params.m2());
        let before = kinetic(m1, state.v1) + kinetic(m2, state.v2);
        let (v1f, v2f) = Self::restitution_velocities(m1, m2, state.v1, state.v2, params.e());
        debug!(t = state.t, v1 = state.v1, v2 = state.v2, v1f, v2f, "cart contact");
        state.v1 = v1f;
        state.v2 = v2f;
        let after = kinetic(m1, v1f) + kinetic(m2, v2f);

        report.contact = true;
        let lost = before - after;
        if lost > 0.0 {
            report.energy_lost += lost;
        }
    }
}
