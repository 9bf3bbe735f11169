//! Physical and numerical parameters for a run
//!
//! `Parameters` holds the validated constants of one run:
//! - body masses, spring stiffness, friction and restitution coefficients,
//! - gravity and the fixed physical step `h`,
//! - the initial spring compression `x0`
//!
//! `Track` holds the fixed geometry (track length, spring length, cart widths).
//!
//! Every write goes through a clamping setter: out-of-range input is clamped,
//! non-finite input keeps the previous value.

use tracing::warn;

pub const M_RANGE: (f64, f64) = (0.05, 50.0);
pub const K_RANGE: (f64, f64) = (0.0, 1.0e4);
pub const MU_RANGE: (f64, f64) = (0.0, 1.0);
pub const E_RANGE: (f64, f64) = (0.0, 1.0);
pub const G_RANGE: (f64, f64) = (0.0, 30.0);
pub const H_RANGE: (f64, f64) = (0.001, 0.02);
pub const X0_RANGE: (f64, f64) = (0.01, 0.45);

/// Fixed track geometry, meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub length: f64, // L, right wall position
    pub spring_len: f64, // natural length of the spring, measured from the left wall
    pub w1: f64, // width of cart 1
    pub w2: f64, // width of cart 2
    pub x2_start: f64, // left edge of cart 2 after a reset
}

impl Default for Track {
    fn default() -> Self {
        Self {
            length: 9.0,
            spring_len: 0.3,
            w1: 0.4,
            w2: 0.4,
            x2_start: 6.0,
        }
    }
}

impl Track {
    /// Left edge of cart 1 for an initial compression `x0`.
    /// The spring is never compressed past 95% of its length.
    pub fn x1_start(&self, x0: f64) -> f64 {
        self.spring_len - x0.min(self.spring_len * 0.95)
    }

    /// Spring compression at position `x1`, zero once cart 1 is clear of it
    pub fn compression(&self, x1: f64) -> f64 {
        if x1 < self.spring_len {
            self.spring_len - x1
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    m1: f64, // mass of cart 1, kg
    m2: f64, // mass of cart 2, kg
    k: f64, // spring stiffness, N/m
    mu: f64, // kinetic and static friction coefficient
    e: f64, // restitution coefficient
    g: f64, // gravity, m/s^2
    h: f64, // physical step, s
    x0: f64, // initial spring compression, m
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            m1: 0.5,
            m2: 0.5,
            k: 80.0,
            mu: 0.05,
            e: 0.85,
            g: 9.81,
            h: 0.005,
            x0: 0.2,
        }
    }
}

impl Parameters {
    /// Build a parameter set, clamping each value into its valid range.
    /// Non-finite values fall back to the defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn new(m1: f64, m2: f64, k: f64, mu: f64, e: f64, g: f64, h: f64, x0: f64) -> Self {
        let mut p = Self::default();
        p.set_m1(m1);
        p.set_m2(m2);
        p.set_k(k);
        p.set_mu(mu);
        p.set_e(e);
        p.set_g(g);
        p.set_h(h);
        p.set_x0(x0);
        p
    }

    pub fn m1(&self) -> f64 { self.m1 }
    pub fn m2(&self) -> f64 { self.m2 }
    pub fn k(&self) -> f64 { self.k }
    pub fn mu(&self) -> f64 { self.mu }
    pub fn e(&self) -> f64 { self.e }
    pub fn g(&self) -> f64 { self.g }
    pub fn h(&self) -> f64 { self.h }
    pub fn x0(&self) -> f64 { self.x0 }

    /// Combined mass, never below 0.1 kg thanks to the mass floor
    pub fn total_mass(&self) -> f64 {
        self.m1 + self.m2
    }

    pub fn set_m1(&mut self, value: f64) -> f64 {
        self.m1 = clamp_or_keep("m1", value, self.m1, M_RANGE);
        self.m1
    }

    pub fn set_m2(&mut self, value: f64) -> f64 {
        self.m2 = clamp_or_keep("m2", value, self.m2, M_RANGE);
        self.m2
    }

    pub fn set_k(&mut self, value: f64) -> f64 {
        self.k = clamp_or_keep("k", value, self.k, K_RANGE);
        self.k
    }

    pub fn set_mu(&mut self, value: f64) -> f64 {
        self.mu = clamp_or_keep("mu", value, self.mu, MU_RANGE);
        self.mu
    }

    pub fn set_e(&mut self, value: f64) -> f64 {
        self.e = clamp_or_keep("e", value, self.e, E_RANGE);
        self.e
    }

    pub fn set_g(&mut self, value: f64) -> f64 {
        self.g = clamp_or_keep("g", value, self.g, G_RANGE);
        self.g
    }

    pub fn set_h(&mut self, value: f64) -> f64 {
        self.h = clamp_or_keep("h", value, self.h, H_RANGE);
        self.h
    }

    pub fn set_x0(&mut self, value: f64) -> f64 {
        self.x0 = clamp_or_keep("x0", value, self.x0, X0_RANGE);
        self.x0
    }
}

/// Clamp `value` into `range`, or keep `previous` when `value` is NaN or infinite
pub fn clamp_or_keep(name: &str, value: f64, previous: f64, range: (f64, f64)) -> f64 {
    if !value.is_finite() {
        warn!(parameter = name, value, previous, "rejected non-finite input");
        return previous;
    }
    value.clamp(range.0, range.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_to_range() {
        let mut p = Parameters::default();
        assert_eq!(p.set_m1(0.0), 0.05);
        assert_eq!(p.set_m2(1000.0), 50.0);
        assert_eq!(p.set_k(-5.0), 0.0);
        assert_eq!(p.set_h(1.0), 0.02);
        assert_eq!(p.set_x0(0.0), 0.01);
    }

    #[test]
    fn non_finite_keeps_previous() {
        let mut p = Parameters::default();
        p.set_mu(0.3);
        assert_eq!(p.set_mu(f64::NAN), 0.3);
        assert_eq!(p.set_g(f64::INFINITY), 9.81);
    }

    #[test]
    fn start_position_caps_compression() {
        let track = Track::default();
        assert!((track.x1_start(0.2) - 0.1).abs() < 1e-12);
        // 0.45 exceeds 95% of the 0.3 m spring
        assert!((track.x1_start(0.45) - 0.015).abs() < 1e-12);
    }
}
