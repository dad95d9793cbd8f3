//!
//! Match lattice definitions
//!
//! The lattice stores, for each (source frame, target frame) pair, the
//! probability that the two emit a compatible symbol under independence:
//!
//! ```text
//! sim[t][n] = \sum_{c} source[t][c] * target[n][c]
//! ```
//!
use super::params::AlignParams;
use crate::error::AlignError;
use crate::prob::Prob;
use ndarray::{Array2, ArrayView2};

///
/// T x N matrix of pairwise match probabilities between source frames
/// and target frames
///
#[derive(Debug, Clone)]
pub struct MatchLattice {
    sim: Array2<Prob>,
}

impl MatchLattice {
    ///
    /// Build the lattice from two row-stochastic matrices.
    ///
    /// Each source row is floored by `params.prob_floor` and renormalized
    /// before taking dot products, so that a predicted distribution with
    /// hard zeros still gives every lattice cell positive mass.
    ///
    pub fn from_probs(
        source: &ArrayView2<f64>,
        target: &ArrayView2<f64>,
        params: &AlignParams,
    ) -> Result<MatchLattice, AlignError> {
        if source.ncols() != target.ncols() {
            return Err(AlignError::AlphabetMismatch {
                source: source.ncols(),
                target: target.ncols(),
            });
        }
        let t_len = source.nrows();
        let n_len = target.nrows();
        let mut sim = Array2::from_elem((t_len, n_len), Prob::zero());
        let mut floored = vec![0.0; source.ncols()];
        for t in 0..t_len {
            let mut total = 0.0;
            for (x, f) in source.row(t).iter().zip(floored.iter_mut()) {
                *f = x.max(params.prob_floor);
                total += *f;
            }
            for n in 0..n_len {
                let dot: f64 = floored
                    .iter()
                    .zip(target.row(n).iter())
                    .map(|(s, t)| s * t)
                    .sum();
                sim[[t, n]] = Prob::from_prob(dot / total);
            }
        }
        Ok(MatchLattice { sim })
    }
    /// number of source frames (T)
    pub fn n_source(&self) -> usize {
        self.sim.nrows()
    }
    /// number of target frames (N)
    pub fn n_target(&self) -> usize {
        self.sim.ncols()
    }
    /// match probability of the cell (t, n)
    pub fn sim(&self, t: usize, n: usize) -> Prob {
        self.sim[[t, n]]
    }
    ///
    /// Lattice with both axes reversed.
    ///
    /// The backward variable of the original lattice is the forward
    /// variable of the reversed one.
    ///
    pub fn reversed(&self) -> MatchLattice {
        let (t_len, n_len) = (self.n_source(), self.n_target());
        let sim = Array2::from_shape_fn((t_len, n_len), |(t, n)| {
            self.sim[[t_len - 1 - t, n_len - 1 - n]]
        });
        MatchLattice { sim }
    }
}

///
/// Check that every row of `m` is a probability distribution
/// (non-negative entries summing to 1)
///
pub fn is_row_stochastic(m: &ArrayView2<f64>) -> bool {
    (0..m.nrows()).all(|i| {
        let row = m.row(i);
        let total: f64 = row.iter().sum();
        row.iter().all(|&x| (0.0..=1.0).contains(&x)) && (total - 1.0).abs() < 1e-4
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::mocks::{mock_onehot, mock_uniform};
    use crate::prob::p;

    #[test]
    fn lattice_uniform() {
        // uniform x uniform: every dot product is 1/A
        let source = mock_uniform(3, 4);
        let target = mock_uniform(2, 4);
        let lat =
            MatchLattice::from_probs(&source.view(), &target.view(), &AlignParams::default())
                .unwrap();
        assert_eq!(lat.n_source(), 3);
        assert_eq!(lat.n_target(), 2);
        for t in 0..3 {
            for n in 0..2 {
                assert_abs_diff_eq!(lat.sim(t, n), p(0.25), epsilon = 1e-6);
            }
        }
    }
    #[test]
    fn lattice_onehot() {
        // one-hot labels match iff equal; floor keeps mismatches nonzero
        let source = mock_onehot(&[0, 1], 2);
        let target = mock_onehot(&[1], 2);
        let lat =
            MatchLattice::from_probs(&source.view(), &target.view(), &AlignParams::default())
                .unwrap();
        assert!(lat.sim(0, 0).to_value() < 1e-5);
        assert!(!lat.sim(0, 0).is_zero());
        assert_abs_diff_eq!(lat.sim(1, 0).to_value(), 1.0, epsilon = 1e-5);
    }
    #[test]
    fn lattice_alphabet_mismatch() {
        let source = mock_uniform(3, 4);
        let target = mock_uniform(2, 5);
        let e = MatchLattice::from_probs(&source.view(), &target.view(), &AlignParams::default());
        assert_eq!(
            e.unwrap_err(),
            AlignError::AlphabetMismatch {
                source: 4,
                target: 5
            }
        );
    }
    #[test]
    fn lattice_reversed() {
        let source = mock_onehot(&[0, 1, 1], 3);
        let target = mock_onehot(&[0, 1], 3);
        let lat =
            MatchLattice::from_probs(&source.view(), &target.view(), &AlignParams::default())
                .unwrap();
        let rev = lat.reversed();
        for t in 0..3 {
            for n in 0..2 {
                assert_eq!(rev.sim(t, n), lat.sim(2 - t, 1 - n));
            }
        }
    }
    #[test]
    fn row_stochastic_check() {
        let ok = mock_uniform(3, 4);
        assert!(is_row_stochastic(&ok.view()));
        let mut bad = mock_uniform(3, 4);
        bad[[1, 0]] = 0.5;
        assert!(!is_row_stochastic(&bad.view()));
    }
}
