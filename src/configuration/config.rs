//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – run parameters, every field optional
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The two-body scenario shipped in `scenarios/two_body.yaml`:
//!
//! ```yaml
//! t0: 0.0                   # initial time
//!
//! parameters:
//!   iteration_time: 0.5     # total simulated time
//!   dt: 5.0e-7              # fixed step size
//!   record_interval: 0.001  # simulated time between snapshots
//!   zero_momentum: false    # shift into the zero-momentum frame first
//!   verbose: true           # report progress
//!
//! bodies:
//!   - x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 100.0
//!   - x: [1.0, 0.0, 0.0]
//!     v: [0.0, 10.0, 0.0]
//!     m: 1.0
//! ```
//!
//! Omitted parameters take the defaults of
//! [`Parameters`](crate::simulation::params::Parameters).

use serde::Deserialize;

/// Run parameters as they appear in YAML. `None` means "use the default".
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    pub iteration_time: Option<f64>,  // integration time range
    pub dt: Option<f64>,              // time step size
    pub record_interval: Option<f64>, // period for recording the system
    pub zero_momentum: Option<bool>,  // transfer into the zero-momentum frame
    pub verbose: Option<bool>,        // progress output
    pub progress_width: Option<usize>, // progress bar width
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub x: [f64; 3], // Initial position
    pub v: [f64; 3], // Initial velocity
    pub m: f64,      // Mass of the body, expected positive
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub t0: f64, // Initial simulated time
    #[serde(default)]
    pub parameters: ParametersConfig, // Run parameters
    pub bodies: Vec<BodyConfig>, // Bodies defining the initial state of the system
}
