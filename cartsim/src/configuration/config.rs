//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – animation speed and headless run settings
//! - [`ParametersConfig`] – physical constants and the integration step
//! - [`OutputConfig`]     – where the series export goes
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field is optional; missing fields take the classroom defaults.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   animation_speed: 1.0    # visual speed, 0.25..4, never changes the physics
//!   frame_dt: 0.0166667     # wall-clock seconds fed per tick when headless
//!   t_end: 60.0             # stop a headless run at this simulated time
//!
//! parameters:
//!   m1: 0.5                 # kg
//!   m2: 0.5                 # kg
//!   k: 80.0                 # N/m
//!   x0: 0.2                 # initial spring compression, m
//!   mu: 0.05                # friction coefficient
//!   e: 0.85                 # restitution coefficient
//!   g: 9.81                 # m/s^2
//!   h: 0.005                # physical step, s
//!
//! output:
//!   csv: "run.csv"
//! ```
//!
//! Values are clamped into their valid ranges when the scenario is built,
//! see [`crate::simulation::params`].

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CartsimError;
use crate::simulation::params::Parameters;

/// Engine-level configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub animation_speed: f64, // visual speed multiplier
    pub frame_dt: f64, // wall-clock seconds per tick for headless runs
    pub t_end: f64, // simulated-time limit for headless runs
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            animation_speed: 1.0,
            frame_dt: 1.0 / 60.0,
            t_end: 60.0,
        }
    }
}

/// Physical constants and integration step for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub m1: f64, // mass of cart 1
    pub m2: f64, // mass of cart 2
    pub k: f64, // spring stiffness
    pub x0: f64, // initial compression
    pub mu: f64, // friction coefficient
    pub e: f64, // restitution coefficient
    pub g: f64, // gravity
    pub h: f64, // physical step
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            m1: p.m1(),
            m2: p.m2(),
            k: p.k(),
            x0: p.x0(),
            mu: p.mu(),
            e: p.e(),
            g: p.g(),
            h: p.h(),
        }
    }
}

impl ParametersConfig {
    /// Clamp into a runtime parameter set
    pub fn to_parameters(&self) -> Parameters {
        Parameters::new(self.m1, self.m2, self.k, self.mu, self.e, self.g, self.h, self.x0)
    }
}

/// Export destination
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub csv: Option<PathBuf>, // defaults to the standard export file name
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub output: OutputConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, CartsimError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, CartsimError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
