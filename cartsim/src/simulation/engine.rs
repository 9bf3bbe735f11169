//! Control surface consumed by a UI or a headless runner
//!
//! `Engine` ties the active parameters, the integrator, and the recorded
//! series together. Parameters are staged: setters always write the
//! staged copy. It becomes active at the next `start`/`reset`, or at once
//! while the engine is stopped at t = 0. A paused run keeps its
//! parameters through `resume`.

use tracing::info;

use crate::export::csv_export::to_csv;

use super::energy::Energies;
use super::integrator::{FixedStepIntegrator, ANIMATION_SPEED_RANGE};
use super::params::{clamp_or_keep, Parameters, Track};
use super::series::{TimeSeriesBuffer, DISPLAY_CAPACITY};
use super::states::{Sample, SimulationState};

pub struct Engine {
    params: Parameters, // constants of the current run
    staged: Parameters, // latest accepted input, applied before a run begins
    track: Track,
    integrator: FixedStepIntegrator,
    series: TimeSeriesBuffer,
    animation_speed: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}

impl Engine {
    pub fn new(params: Parameters) -> Self {
        let track = Track::default();
        let state = SimulationState::initial(&params, &track);
        Self {
            staged: params.clone(),
            params,
            track,
            integrator: FixedStepIntegrator::new(state),
            series: TimeSeriesBuffer::default(),
            animation_speed: 1.0,
        }
    }

    // control ==============================================================================

    /// Begin a fresh run from the initial conditions
    pub fn start(&mut self) {
        self.reset();
        self.integrator.start();
        info!(h = self.params.h(), x0 = self.params.x0(), "run started");
    }

    /// Continue a paused run where it left off
    pub fn resume(&mut self) {
        if self.integrator.is_running() {
            return;
        }
        self.integrator.start();
        info!(t = self.integrator.state().t, "run resumed");
    }

    pub fn pause(&mut self) {
        if self.integrator.is_running() {
            self.integrator.stop();
            info!(t = self.integrator.state().t, "run paused");
        }
    }

    /// Stop and return to t = 0: initial positions from `x0`, carts at rest,
    /// no dissipated energy, empty series
    pub fn reset(&mut self) {
        self.params = self.staged.clone();
        self.integrator.load(SimulationState::initial(&self.params, &self.track));
        self.series.clear();
        info!("engine reset");
    }

    /// Advance by `elapsed` seconds of wall-clock time. The new samples are
    /// appended to the series and also returned.
    pub fn tick(&mut self, elapsed: f64) -> Vec<Sample> {
        let samples = self.integrator.tick(elapsed, self.animation_speed, &self.params, &self.track);
        self.series.extend(samples.iter().copied());
        samples
    }

    // parameter input ======================================================================

    pub fn set_m1(&mut self, value: f64) -> f64 {
        let v = self.staged.set_m1(value);
        self.apply_if_stopped();
        v
    }

    pub fn set_m2(&mut self, value: f64) -> f64 {
        let v = self.staged.set_m2(value);
        self.apply_if_stopped();
        v
    }

    pub fn set_k(&mut self, value: f64) -> f64 {
        let v = self.staged.set_k(value);
        self.apply_if_stopped();
        v
    }

    pub fn set_mu(&mut self, value: f64) -> f64 {
        let v = self.staged.set_mu(value);
        self.apply_if_stopped();
        v
    }

    pub fn set_e(&mut self, value: f64) -> f64 {
        let v = self.staged.set_e(value);
        self.apply_if_stopped();
        v
    }

    pub fn set_g(&mut self, value: f64) -> f64 {
        let v = self.staged.set_g(value);
        self.apply_if_stopped();
        v
    }

    pub fn set_h(&mut self, value: f64) -> f64 {
        let v = self.staged.set_h(value);
        self.apply_if_stopped();
        v
    }

    /// Initial compression. Before the first step of a run it also moves cart 1.
    pub fn set_x0(&mut self, value: f64) -> f64 {
        let v = self.staged.set_x0(value);
        if self.apply_if_stopped() {
            self.integrator.place_cart1(self.track.x1_start(v));
        }
        v
    }

    /// Visual speed multiplier in [0.25, 4]; only changes how many steps a tick replays
    pub fn set_animation_speed(&mut self, value: f64) -> f64 {
        self.animation_speed = clamp_or_keep("animation_speed", value, self.animation_speed, ANIMATION_SPEED_RANGE);
        self.animation_speed
    }

    /// Activate the staged set if no run is under way. Returns true if it did.
    fn apply_if_stopped(&mut self) -> bool {
        let idle = !self.integrator.is_running() && self.integrator.state().t == 0.0;
        if idle {
            self.params = self.staged.clone();
        }
        idle
    }

    // read access ==========================================================================

    pub fn is_running(&self) -> bool {
        self.integrator.is_running()
    }

    pub fn state(&self) -> &SimulationState {
        self.integrator.state()
    }

    /// Parameters of the current run
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Parameters the next run will use
    pub fn staged_parameters(&self) -> &Parameters {
        &self.staged
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn animation_speed(&self) -> f64 {
        self.animation_speed
    }

    pub fn energies(&self) -> Energies {
        Energies::of(self.integrator.state(), &self.params, &self.track)
    }

    pub fn series(&self) -> &TimeSeriesBuffer {
        &self.series
    }

    /// Owned copy of every retained sample
    pub fn snapshot(&self) -> Vec<Sample> {
        self.series.snapshot()
    }

    /// Owned copy of the most recent samples, sized for plotting
    pub fn display_series(&self) -> Vec<Sample> {
        self.series.display_window(DISPLAY_CAPACITY)
    }

    /// Export text of the full retained series
    pub fn export_csv(&self) -> String {
        to_csv(&self.series.snapshot())
    }
}
