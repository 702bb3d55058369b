//! Pairwise geometry and mass products shared by the force and energy terms

use super::states::{NMat3xN, NMatN, NVecN, PairTensor3};

/// Outer product of the mass vector with itself: `M[(i, j)] = m_i * m_j`
/// Computed once per run; symmetric with `M[(i, i)] = m_i^2`
pub fn get_mass_matrix(mass: &NVecN) -> NMatN {
    let n = mass.len();
    NMatN::from_fn(n, n, |i, j| mass[i] * mass[j])
}

/// Signed coordinate differences between all pairs
/// `D[(k, i, j)] = r[(k, i)] - r[(k, j)]`, antisymmetric in (i, j) with a
/// zero diagonal
pub fn calc_diff(r: &NMat3xN) -> PairTensor3 {
    let n = r.ncols();
    let components = [0, 1, 2].map(|k| NMatN::from_fn(n, n, |i, j| r[(k, i)] - r[(k, j)]));
    PairTensor3 { components }
}
