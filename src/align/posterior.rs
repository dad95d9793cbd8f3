//!
//! Posterior calculation from the result of Forward/Backward.
//!
//! - **Path posterior** (for each lattice cell)
//!     `A[t][n] = F[t][n] B[t][n] / S` where `S` is the total product
//!     mass over all cells, so the whole matrix sums to exactly 1.
//!     `F B` counts the match probability of the cell twice and paths
//!     differ in length, so normalizing by `S` (rather than by `Z`
//!     alone) is what makes the mass-conservation guarantee hold.
//!
//! - **Aligned targets** (for each source frame and class)
//!     the projection of the path posterior back to the alphabet,
//!     `aligned[t][c] = \sum_n A[t][n] target[n][c]`, row-normalized;
//!     this is the soft training target of CTC alignment.
//!
use super::backward::backward;
use super::forward::forward;
use super::lattice::MatchLattice;
use super::params::{AlignParams, CostNorm};
use super::table::AlignResult;
use crate::error::AlignError;
use crate::prob::Prob;
use itertools::izip;
use log::trace;
use ndarray::{Array2, ArrayView2};

/// Struct for storing `AlignResult` for forward and backward.
///
#[derive(Debug, Clone)]
pub struct AlignOutput {
    /// AlignResult for forward run
    pub forward: AlignResult,
    /// AlignResult for backward run
    pub backward: AlignResult,
    /// number of target frames N (tables carry it only when T > 0)
    n_targets: usize,
}

///
/// Run forward and backward for one (source, target) pair.
///
/// This is the whole alignment engine; validation of the output buffer
/// is the caller's job (`single` / `batch`).
///
pub fn run(
    source: &ArrayView2<f64>,
    target: &ArrayView2<f64>,
    params: &AlignParams,
) -> Result<AlignOutput, AlignError> {
    let lattice = MatchLattice::from_probs(source, target, params)?;
    trace!(
        "align run: T={} N={} A={}",
        lattice.n_source(),
        lattice.n_target(),
        source.ncols()
    );
    let forward = forward(&lattice);
    let backward = backward(&lattice);
    Ok(AlignOutput {
        forward,
        backward,
        n_targets: lattice.n_target(),
    })
}

/// Accessors
impl AlignOutput {
    /// number of source frames T
    pub fn n_frames(&self) -> usize {
        self.forward.n_frames()
    }
    /// number of target frames N
    pub fn n_targets(&self) -> usize {
        self.n_targets
    }
    /// total path mass `Z = F[T-1][N-1]`
    pub fn to_full_prob_forward(&self) -> Prob {
        self.forward.last_prob()
    }
    /// total path mass `Z = B[0][0]`
    pub fn to_full_prob_backward(&self) -> Prob {
        self.backward.first_prob()
    }
    ///
    /// Calculate the path posterior matrix.
    ///
    /// Fails with `NumericalDegeneracy` when no monotonic path carries
    /// mass (Z = 0) or an intermediate value is non-finite.
    ///
    pub fn to_posterior(&self) -> Result<Posterior, AlignError> {
        let t_len = self.n_frames();
        let n_len = self.n_targets();
        if t_len == 0 || n_len == 0 {
            return Ok(Posterior {
                mat: Array2::zeros((t_len, n_len)),
            });
        }
        let z = self.to_full_prob_forward();
        if z.is_zero() || !z.is_valid() {
            return Err(AlignError::NumericalDegeneracy);
        }
        // S = sum of F[t][n] B[t][n] over all cells
        let total: Prob = izip!(&self.forward.tables, &self.backward.tables)
            .map(|(ft, bt)| -> Prob { izip!(&ft.probs, &bt.probs).map(|(&f, &b)| f * b).sum() })
            .sum();
        if total.is_zero() || !total.is_valid() {
            return Err(AlignError::NumericalDegeneracy);
        }
        let mut mat = Array2::zeros((t_len, n_len));
        for (t, (ft, bt)) in izip!(&self.forward.tables, &self.backward.tables).enumerate() {
            for n in 0..n_len {
                mat[[t, n]] = ((ft[n] * bt[n]) / total).to_value();
            }
        }
        Ok(Posterior { mat })
    }
    ///
    /// Derive the scalar cost `-log Z` of this alignment,
    /// normalized as `params.cost_norm` requests.
    ///
    /// An empty pair (T=0 or N=0) has Z=1, i.e. zero cost.
    ///
    pub fn to_cost(&self, params: &AlignParams) -> Result<f64, AlignError> {
        let t_len = self.n_frames();
        if t_len == 0 || self.n_targets() == 0 {
            return Ok(0.0);
        }
        let z = self.to_full_prob_forward();
        if z.is_zero() || !z.is_valid() {
            return Err(AlignError::NumericalDegeneracy);
        }
        let cost = -z.to_log_value();
        match params.cost_norm {
            CostNorm::Total => Ok(cost),
            CostNorm::PerFrame => Ok(cost / t_len as f64),
        }
    }
}

///
/// T x N path posterior matrix, in linear domain.
///
/// Total mass is 1 (not per-row); rows of the *projection*
/// (`to_aligned_targets`) are row-stochastic instead.
///
#[derive(Debug, Clone)]
pub struct Posterior {
    pub mat: Array2<f64>,
}

impl Posterior {
    /// sum of all entries (1.0 up to float tolerance, 0.0 when empty)
    pub fn total_mass(&self) -> f64 {
        self.mat.sum()
    }
    ///
    /// Project the path posterior back to class space:
    ///
    /// ```text
    /// aligned[t][c] = \sum_n A[t][n] * target[n][c]
    /// ```
    ///
    /// each row normalized to sum to 1 (rows with no mass stay zero).
    ///
    pub fn to_aligned_targets(&self, target: &ArrayView2<f64>) -> Array2<f64> {
        let t_len = self.mat.nrows();
        let n_len = self.mat.ncols();
        let n_classes = target.ncols();
        let mut aligned = Array2::zeros((t_len, n_classes));
        for t in 0..t_len {
            for n in 0..n_len {
                let w = self.mat[[t, n]];
                for c in 0..n_classes {
                    aligned[[t, c]] += w * target[[n, c]];
                }
            }
            let total: f64 = aligned.row(t).sum();
            if total > 1e-9 {
                for c in 0..n_classes {
                    aligned[[t, c]] /= total;
                }
            }
        }
        aligned
    }
}
