//! Simulation driver: owns the time loop and the recorded history
//!
//! One call runs the whole integration synchronously on the calling thread.
//! The driver is the single owner of the live [`SystemState`]; the mass
//! matrix is computed once up front and only read afterwards.

use super::forces::gravity_force;
use super::geometry::get_mass_matrix;
use super::kinematics::{calc_acceleration, zero_momentum_frame};
use super::params::Parameters;
use super::progress::{LogProgress, NoProgress, ProgressSink};
use super::integrator::round_value;
use super::states::{History, NMat3xN, NVecN, SystemState};
use crate::error::{Error, Result};

/// Minimum advance in completed fraction between two progress notifications
const PROGRESS_STEP: f64 = 0.001;

/// Upper bound on history entries reserved before the first step
const MAX_RESERVED_RECORDS: usize = 1 << 16;

/// Number of whole steps of size `dt` that fit in `iteration_time`
///
/// Any fractional remainder below one step is dropped. Non-positive or
/// non-finite inputs give zero steps.
pub fn step_count(iteration_time: f64, dt: f64) -> usize {
    if !(dt > 0.0 && iteration_time > 0.0) {
        return 0;
    }
    let steps = (iteration_time / dt).floor();
    if steps.is_finite() {
        steps as usize
    } else {
        0
    }
}

/// History entries to reserve up front for a run of `n_iterations` steps
/// Capped at [`MAX_RESERVED_RECORDS`]; longer histories grow on demand.
fn reserved_records(params: &Parameters, n_iterations: usize) -> usize {
    let expected = if params.record_interval > 0.0 {
        (params.iteration_time / params.record_interval).min(n_iterations as f64) as usize
    } else {
        n_iterations
    };
    expected.saturating_add(1).min(MAX_RESERVED_RECORDS)
}

/// Check that positions, velocities and masses describe the same particles
fn check_shapes(r: &NMat3xN, v: &NMat3xN, mass: &NVecN) -> Result<()> {
    if r.ncols() != v.ncols() || r.ncols() != mass.len() {
        return Err(Error::ShapeMismatch(format!(
            "positions have {} particles, velocities have {}, masses have {}",
            r.ncols(),
            v.ncols(),
            mass.len()
        )));
    }
    Ok(())
}

/// Integrate the ensemble from `(r, v)` at time `t` and record its history
///
/// Progress goes to the `log` facade when `params.verbose` is set.
/// See [`simulate_with_progress`].
pub fn simulate(
    r: NMat3xN,
    v: NMat3xN,
    t: f64,
    mass: &NVecN,
    params: &Parameters,
) -> Result<History> {
    if params.verbose {
        simulate_with_progress(r, v, t, mass, params, &mut LogProgress)
    } else {
        simulate_with_progress(r, v, t, mass, params, &mut NoProgress)
    }
}

/// Integrate the ensemble and report progress to `progress`
///
/// The initial state is always history entry 0. After every step the
/// elapsed time since the last recorded sample is compared against
/// `record_interval - dt/4`; once reached, the recorded-time marker moves on
/// by exactly one `record_interval`, so the recorded times sit on a uniform
/// grid even though the step times do not.
///
/// Fails only when the particle counts of `r`, `v` and `mass` disagree.
/// Degenerate step sizes or durations run zero steps and return the single
/// initial entry.
pub fn simulate_with_progress(
    r: NMat3xN,
    v: NMat3xN,
    t: f64,
    mass: &NVecN,
    params: &Parameters,
    progress: &mut dyn ProgressSink,
) -> Result<History> {
    check_shapes(&r, &v, mass)?;

    let dt = params.dt;
    let record_interval = params.record_interval;

    let v = if params.zero_momentum {
        zero_momentum_frame(&v, mass)
    } else {
        v
    };
    let mass_matrix = get_mass_matrix(mass);
    let a = calc_acceleration(&gravity_force(&r, &mass_matrix), mass);

    let mut state = SystemState { r, v, a, t };

    let n_iterations = step_count(params.iteration_time, dt);
    if n_iterations == 0 {
        log::warn!(
            "no integration steps for iteration_time = {}, dt = {}; returning the initial state only",
            params.iteration_time,
            dt
        );
    }
    log::info!(
        "simulating {} particles: {} steps of dt = {}, recording every {}",
        state.n(),
        n_iterations,
        dt,
        record_interval
    );

    let mut history = History::with_capacity(reserved_records(params, n_iterations));
    history.record(&state.r, &state.v, state.t);

    let threshold = record_interval - dt / 4.0;
    let mut last_add_time = state.t;
    let mut last_fraction = 0.0;

    for i in 0..n_iterations {
        state.advance(dt, &mass_matrix, mass);

        if state.t - last_add_time >= threshold {
            last_add_time = round_value(last_add_time + record_interval);
            history.record(&state.r, &state.v, last_add_time);
            log::debug!("recorded step {} at t = {}", i + 1, last_add_time);
        }

        if params.verbose {
            let fraction = (i + 1) as f64 / n_iterations as f64;
            if fraction > last_fraction + PROGRESS_STEP {
                progress.report(fraction, Some(params.progress_width));
                last_fraction = fraction;
            }
        }
    }

    if params.verbose {
        progress.finish();
    }
    log::info!(
        "simulation finished at t = {} with {} recorded snapshots",
        state.t,
        history.len()
    );

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(iteration_time: f64, dt: f64, record_interval: f64) -> Parameters {
        Parameters {
            iteration_time,
            dt,
            record_interval,
            ..Parameters::default()
        }
    }

    #[test]
    fn reservation_follows_recording_cadence() {
        let p = params(0.5, 0.0005, 0.1);
        assert_eq!(reserved_records(&p, step_count(p.iteration_time, p.dt)), 6);

        let every_step = params(0.01, 0.001, 0.0);
        assert_eq!(reserved_records(&every_step, 10), 11);
    }

    #[test]
    fn reservation_is_capped_for_huge_runs() {
        let p = params(1e17, 1.0, 1.0);
        let n = step_count(p.iteration_time, p.dt);
        assert!(n > MAX_RESERVED_RECORDS);
        assert_eq!(reserved_records(&p, n), MAX_RESERVED_RECORDS);

        let every_step = params(1e17, 1.0, 0.0);
        assert_eq!(reserved_records(&every_step, usize::MAX), MAX_RESERVED_RECORDS);
    }
}
