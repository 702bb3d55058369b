//! Conserved-quantity diagnostics over states and recorded histories

use super::forces::gravity_potential;
use super::geometry::get_mass_matrix;
use super::kinematics::kinetic_energy;
use super::states::{History, NMat3xN, NMatN, NVecN};

pub use super::kinematics::total_momentum;

pub fn total_kinetic_energy(v: &NMat3xN, mass: &NVecN) -> f64 {
    kinetic_energy(v, mass).sum()
}

/// Potential energy with every unordered pair counted once
pub fn total_potential_energy(r: &NMat3xN, mass_matrix: &NMatN) -> f64 {
    0.5 * gravity_potential(r, mass_matrix).sum()
}

pub fn total_energy(r: &NMat3xN, v: &NMat3xN, mass_matrix: &NMatN, mass: &NVecN) -> f64 {
    total_kinetic_energy(v, mass) + total_potential_energy(r, mass_matrix)
}

/// Total energy of every recorded snapshot, in recording order
pub fn energy_history(history: &History, mass: &NVecN) -> Vec<f64> {
    let mass_matrix = get_mass_matrix(mass);
    history
        .iter()
        .map(|s| total_energy(s.r, s.v, &mass_matrix, mass))
        .collect()
}

/// Largest relative deviation from the first energy, `max |E_k - E_0| / |E_0|`
///
/// Zero for an empty series, NaN once any energy is NaN. When `E_0` is
/// exactly zero there is no scale to divide by and the absolute deviation
/// `max |E_k|` is returned instead.
pub fn relative_energy_drift(energies: &[f64]) -> f64 {
    let Some(&e0) = energies.first() else {
        return 0.0;
    };
    let scale = if e0 == 0.0 { 1.0 } else { e0.abs() };
    energies
        .iter()
        .map(|e| (e - e0).abs() / scale)
        .fold(0.0, |worst: f64, d| {
            if d.is_nan() || worst.is_nan() {
                f64::NAN
            } else {
                worst.max(d)
            }
        })
}
