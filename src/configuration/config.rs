//! Configuration types for loading a monitored scenario from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ThresholdConfig`]  – removal bounds (distance limits, perihelion cutoff)
//! - [`MonitorConfig`]    – cadences and event-log capacity
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! thresholds:
//!   min_distance_from_sun_squared: 0.0016  # (0.04 AU)^2
//!   max_distance_from_sun_squared: 900.0   # (30 AU)^2
//!   max_perihelion_distance: 11.0          # wide-orbit cutoff
//!
//! monitor:
//!   fast_interval: 100        # removal scan every N steps
//!   slow_interval: 10000      # energy sample every N steps
//!   event_capacity: 500       # per-category event log size
//!   min_steps_per_orbit: 20.0 # warn when period / dt drops below this
//!
//! parameters:
//!   t_end: 1000.0             # total simulation time
//!   h0: 0.02                  # fixed step size
//!   eps2: 0.0                 # softening epsilon^2
//!   G: 39.47841760435743      # gravitational constant (yr, AU, Msun)
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]    # first body is the central body
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 1.0
//!   - x: [ 5.2, 0.0, 0.0 ]
//!     v: [ 0.0, 2.75, 0.0 ]
//!     m: 0.000954792
//! ```
//!
//! The thresholds are set once before the run begins and are read-only
//! thereafter; the monitor maps this configuration into its runtime types.

use serde::Deserialize;

/// Removal bounds for the threshold policy
/// Distances are supplied squared; the perihelion cutoff is not
#[derive(Deserialize, Debug, Clone)]
pub struct ThresholdConfig {
    pub min_distance_from_sun_squared: f64, // inner bound, squared
    pub max_distance_from_sun_squared: f64, // outer bound, squared
    pub max_perihelion_distance: f64, // wide-orbit cutoff
}

/// Cadences and sizing for the monitor
#[derive(Deserialize, Debug, Clone)]
pub struct MonitorConfig {
    #[serde(default = "default_fast_interval")]
    pub fast_interval: u64, // removal scan cadence, in steps

    #[serde(default = "default_slow_interval")]
    pub slow_interval: u64, // energy diagnostics cadence, in steps

    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize, // per-category event log capacity

    #[serde(default = "default_min_steps_per_orbit")]
    pub min_steps_per_orbit: f64, // early-warning floor for period / dt
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            fast_interval: default_fast_interval(),
            slow_interval: default_slow_interval(),
            event_capacity: default_event_capacity(),
            min_steps_per_orbit: default_min_steps_per_orbit(),
        }
    }
}

fn default_fast_interval() -> u64 {
    100
}

fn default_slow_interval() -> u64 {
    10_000
}

fn default_event_capacity() -> usize {
    500
}

fn default_min_steps_per_orbit() -> f64 {
    20.0
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,  // time end
    pub h0: f64,     // time step size
    pub eps2: f64,   // softening - prevent singular forces at very small separations
    pub G: f64,      // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub thresholds: ThresholdConfig, // Removal bounds for the threshold policy

    #[serde(default)]
    pub monitor: MonitorConfig, // Cadences and event-log sizing

    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // Initial bodies; the first is the central body
}
