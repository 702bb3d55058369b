//! Core state types for the N-body simulation.
//!
//! Per-particle quantities are stored column-wise: an `NMat3xN` has one
//! column per particle and one row per spatial axis, so `r.column(i)` is the
//! position of particle `i`. Defines:
//! - `SystemState` the live (r, v, a, t) tuple advanced by the integrator
//! - `PairTensor3` the (3, N, N) tensor of pairwise quantities
//! - `History` the recorded trajectory returned by the driver

use nalgebra::{DMatrix, DVector, Matrix3xX, Vector3};

use crate::error::{Error, Result};

pub type NVec3 = Vector3<f64>;
pub type NVecN = DVector<f64>;
pub type NMatN = DMatrix<f64>;
pub type NMat3xN = Matrix3xX<f64>;

/// Build a (3, N) array from its three coordinate rows.
/// Fails with [`Error::ShapeMismatch`] unless all rows have the same length.
pub fn from_rows(x: &[f64], y: &[f64], z: &[f64]) -> Result<NMat3xN> {
    let n = x.len();
    if y.len() != n || z.len() != n {
        return Err(Error::ShapeMismatch(format!(
            "coordinate rows have lengths {}, {}, {}",
            x.len(),
            y.len(),
            z.len()
        )));
    }
    Ok(NMat3xN::from_fn(n, |k, i| match k {
        0 => x[i],
        1 => y[i],
        _ => z[i],
    }))
}

/// Rank-3 tensor of shape (3, N, N), stored as one N×N matrix per axis.
/// Entry `(k, i, j)` lives at `components[k][(i, j)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairTensor3 {
    pub components: [NMatN; 3],
}

impl PairTensor3 {
    /// Number of particles N.
    pub fn n(&self) -> usize {
        self.components[0].nrows()
    }

    /// Spatial vector stored at pair (i, j).
    pub fn pair(&self, i: usize, j: usize) -> NVec3 {
        NVec3::new(
            self.components[0][(i, j)],
            self.components[1][(i, j)],
            self.components[2][(i, j)],
        )
    }

    /// Sum of squared components along the spatial axis, shape (N, N).
    pub fn squared_norms(&self) -> NMatN {
        let [x, y, z] = &self.components;
        x.component_mul(x) + y.component_mul(y) + z.component_mul(z)
    }

    /// Sum over the last (source particle) axis, shape (3, N).
    pub fn sum_over_sources(&self) -> NMat3xN {
        let sums = [0, 1, 2].map(|k| self.components[k].column_sum());
        NMat3xN::from_fn(self.n(), |k, i| sums[k][i])
    }

    /// Overwrite every self-pair entry (i, i) with zero.
    pub fn zero_diagonal(&mut self) {
        for c in self.components.iter_mut() {
            c.fill_diagonal(0.0);
        }
    }
}

/// The single live simulation state: positions, velocities, accelerations
/// (each (3, N)) and the simulated time.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemState {
    pub r: NMat3xN, // positions
    pub v: NMat3xN, // velocities
    pub a: NMat3xN, // accelerations
    pub t: f64,     // time
}

impl SystemState {
    /// Number of particles.
    pub fn n(&self) -> usize {
        self.r.ncols()
    }
}

/// One recorded sample of the trajectory.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub r: &'a NMat3xN,
    pub v: &'a NMat3xN,
    pub t: f64,
}

/// Recorded trajectory. The three sequences are index-aligned and always
/// have the same length; entries are only ever appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    positions: Vec<NMat3xN>,
    velocities: Vec<NMat3xN>,
    times: Vec<f64>,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            times: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, r: &NMat3xN, v: &NMat3xN, t: f64) {
        self.positions.push(r.clone());
        self.velocities.push(v.clone());
        self.times.push(t);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn positions(&self) -> &[NMat3xN] {
        &self.positions
    }

    pub fn velocities(&self) -> &[NMat3xN] {
        &self.velocities
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn get(&self, index: usize) -> Option<Snapshot<'_>> {
        Some(Snapshot {
            r: self.positions.get(index)?,
            v: self.velocities.get(index)?,
            t: *self.times.get(index)?,
        })
    }

    pub fn last(&self) -> Option<Snapshot<'_>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = Snapshot<'_>> + '_ {
        self.positions
            .iter()
            .zip(&self.velocities)
            .zip(&self.times)
            .map(|((r, v), &t)| Snapshot { r, v, t })
    }

    /// Split into `(history_r, history_v, history_t)`.
    pub fn into_parts(self) -> (Vec<NMat3xN>, Vec<NMat3xN>, Vec<f64>) {
        (self.positions, self.velocities, self.times)
    }
}
