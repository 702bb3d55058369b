//! Numerical parameters for one simulation run
//!
//! `Parameters` holds runtime settings:
//! - total integration time and fixed step size,
//! - recording cadence,
//! - whether to shift into the zero-momentum frame first,
//! - progress reporting switch and bar width

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub iteration_time: f64,  // integration time range
    pub dt: f64,              // step size
    pub record_interval: f64, // simulated time between recorded snapshots
    pub zero_momentum: bool,  // transform velocities to the zero-momentum frame before stepping
    pub verbose: bool,        // report progress
    pub progress_width: usize, // display width handed to the progress sink
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            iteration_time: 1.0,
            dt: 0.0005,
            record_interval: 0.01,
            zero_momentum: true,
            verbose: true,
            progress_width: 25,
        }
    }
}
