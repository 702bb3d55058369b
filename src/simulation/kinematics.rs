//! Reductions from pairwise forces to per-particle kinematics

use super::states::{NMat3xN, NVec3, NVecN, PairTensor3};

/// Net force on each particle divided by its mass, shape (3, N)
pub fn calc_acceleration(force: &PairTensor3, mass: &NVecN) -> NMat3xN {
    let mut a = force.sum_over_sources();
    for (mut col, &m) in a.column_iter_mut().zip(mass.iter()) {
        col /= m;
    }
    a
}

/// Per-particle kinetic energy `0.5 * m_i * |v_i|^2`
pub fn kinetic_energy(v: &NMat3xN, mass: &NVecN) -> NVecN {
    NVecN::from_fn(v.ncols(), |i, _| 0.5 * mass[i] * v.column(i).norm_squared())
}

/// Total momentum `sum(m_i v_i)`
pub fn total_momentum(v: &NMat3xN, mass: &NVecN) -> NVec3 {
    v.column_iter()
        .zip(mass.iter())
        .fold(NVec3::zeros(), |acc, (vi, &m)| acc + vi * m)
}

/// Velocities shifted into the frame where the total momentum is zero
///
/// Subtracts the centre-of-mass velocity `sum(m_i v_i) / sum(m_i)` from every
/// particle. The input is left untouched.
pub fn zero_momentum_frame(v: &NMat3xN, mass: &NVecN) -> NMat3xN {
    let v_com = total_momentum(v, mass) / mass.sum();

    let mut out = v.clone();
    for mut col in out.column_iter_mut() {
        col -= v_com;
    }
    out
}
