//! Pairwise Newtonian gravity for the n-body engine
//!
//! Direct O(N^2) evaluation with the gravitational constant fixed at 1 and
//! no softening. Both terms evaluate the raw formula on every pair and then
//! overwrite the self-pair entries with zero: on the diagonal the distance is
//! zero and the formula yields NaN. Off the diagonal nothing is guarded, so
//! two distinct particles sharing a position produce non-finite values that
//! flow on into the trajectory.

use super::geometry::calc_diff;
use super::states::{NMat3xN, NMatN, PairTensor3};

/// Force exerted on particle i by particle j, stored at `F[(k, i, j)]`
///
/// `F(:, i, j) = -M(i, j) * (r_i - r_j) / |r_i - r_j|^3`
///
/// Antisymmetric under swapping i and j; the diagonal is exactly zero.
pub fn gravity_force(r: &NMat3xN, mass_matrix: &NMatN) -> PairTensor3 {
    let diff = calc_diff(r);
    let dist_square = diff.squared_norms();

    // M / |d|^3
    let common = mass_matrix.component_div(&dist_square.map(|d2| d2 * d2.sqrt()));

    let mut force = PairTensor3 {
        components: [0, 1, 2].map(|k| -common.component_mul(&diff.components[k])),
    };
    force.zero_diagonal();
    force
}

/// Pairwise potential energy `U(i, j) = -M(i, j) / |r_i - r_j|`
///
/// Symmetric, each unordered pair appears twice; the diagonal is zero.
pub fn gravity_potential(r: &NMat3xN, mass_matrix: &NMatN) -> NMatN {
    let dist = calc_diff(r).squared_norms().map(f64::sqrt);

    let mut potential = -mass_matrix.component_div(&dist);
    potential.fill_diagonal(0.0);
    potential
}
