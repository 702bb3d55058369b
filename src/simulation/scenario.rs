//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - initial positions and velocities as (3, N) arrays
//! - the mass vector and the initial time

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::driver::simulate_with_progress;
use crate::simulation::params::Parameters;
use crate::simulation::progress::ProgressSink;
use crate::simulation::states::{History, NMat3xN, NVecN};

/// Initial conditions plus run parameters, ready to hand to the driver
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub r: NMat3xN,
    pub v: NMat3xN,
    pub mass: NVecN,
    pub t0: f64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        if cfg.bodies.is_empty() {
            return Err(Error::InvalidParam("scenario has no bodies".to_string()));
        }

        // Bodies: one column per `BodyConfig`
        let n = cfg.bodies.len();
        let r = NMat3xN::from_fn(n, |k, i| cfg.bodies[i].x[k]);
        let v = NMat3xN::from_fn(n, |k, i| cfg.bodies[i].v[k]);
        let mass = NVecN::from_iterator(n, cfg.bodies.iter().map(|b: &BodyConfig| b.m));

        // Parameters (runtime) from ParametersConfig, defaults for gaps
        let p_cfg = cfg.parameters;
        let defaults = Parameters::default();
        let parameters = Parameters {
            iteration_time: p_cfg.iteration_time.unwrap_or(defaults.iteration_time),
            dt: p_cfg.dt.unwrap_or(defaults.dt),
            record_interval: p_cfg.record_interval.unwrap_or(defaults.record_interval),
            zero_momentum: p_cfg.zero_momentum.unwrap_or(defaults.zero_momentum),
            verbose: p_cfg.verbose.unwrap_or(defaults.verbose),
            progress_width: p_cfg.progress_width.unwrap_or(defaults.progress_width),
        };

        Ok(Self {
            parameters,
            r,
            v,
            mass,
            t0: cfg.t0,
        })
    }

    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        Self::build_scenario(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_yaml_reader(BufReader::new(file))
    }

    pub fn n(&self) -> usize {
        self.mass.len()
    }

    /// Run the scenario to completion, reporting progress to `progress`
    pub fn run(&self, progress: &mut dyn ProgressSink) -> Result<History> {
        simulate_with_progress(
            self.r.clone(),
            self.v.clone(),
            self.t0,
            &self.mass,
            &self.parameters,
            progress,
        )
    }
}
