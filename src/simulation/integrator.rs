//! Fixed-step time integrator for the N-body system
//!
//! Velocity (Störmer) Verlet: one force evaluation per step, position drift
//! with the old acceleration followed by two half kicks around the force
//! update.

use super::forces::gravity_force;
use super::kinematics::calc_acceleration;
use super::states::{NMatN, NVecN, SystemState};

/// Decimal grid that simulated time is snapped to after every step
pub const TIME_PRECISION: f64 = 1e-10;
const TIME_SCALE: f64 = 1e10;

/// Round `val` to the nearest multiple of [`TIME_PRECISION`]
/// Keeps accumulated step times comparable against the recording grid
pub fn round_value(val: f64) -> f64 {
    (val * TIME_SCALE).round() * TIME_PRECISION
}

impl SystemState {
    /// Advance this state by one step of size `dt`, in place
    /// `self.a` must hold the acceleration at `self.r` on entry and holds
    /// the acceleration at the new positions on return.
    pub fn advance(&mut self, dt: f64, mass_matrix: &NMatN, mass: &NVecN) {
        let half_dt = 0.5 * dt; // half step dt/2

        // Drift: r_n+1 = r_n + dt v_n + (dt^2 / 2) a_n
        self.r += &self.v * dt + &self.a * (half_dt * dt);

        // First kick with the old acceleration: v_n+1/2 = v_n + (dt/2) a_n
        self.v += &self.a * half_dt;

        // a_n+1 from r_n+1
        self.a = calc_acceleration(&gravity_force(&self.r, mass_matrix), mass);

        // Second kick: v_n+1 = v_n+1/2 + (dt/2) a_n+1
        self.v += &self.a * half_dt;

        // t_n+1 = t_n + dt, snapped to the time grid
        self.t = round_value(self.t + dt);
    }
}

/// Single integration step as a pure state transition
/// Takes the state by value and returns the advanced state; identical
/// inputs give bit-identical outputs.
pub fn integration_step(
    mut state: SystemState,
    dt: f64,
    mass_matrix: &NMatN,
    mass: &NVecN,
) -> SystemState {
    state.advance(dt, mass_matrix, mass);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_value_snaps_to_grid() {
        assert_eq!(round_value(0.1 + 0.2), round_value(0.3));
        assert_eq!(round_value(1.0), 1.0);
        assert!((round_value(0.123_456_789_012_34) - 0.123_456_789_0).abs() < 1e-15);
    }

    #[test]
    fn round_value_handles_negative_time() {
        assert_eq!(round_value(-0.1 - 0.2), round_value(-0.3));
    }
}
