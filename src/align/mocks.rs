//!
//! Mock probability matrices for testing
//!
use ndarray::Array2;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// `len x n_classes` matrix whose rows are the uniform distribution
///
pub fn mock_uniform(len: usize, n_classes: usize) -> Array2<f64> {
    Array2::from_elem((len, n_classes), 1.0 / n_classes as f64)
}

///
/// `len x n_classes` matrix of random row-stochastic rows,
/// reproducible from the seed
///
pub fn mock_random(len: usize, n_classes: usize, seed: u64) -> Array2<f64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut m = Array2::zeros((len, n_classes));
    for i in 0..len {
        let mut total = 0.0;
        for j in 0..n_classes {
            let x: f64 = rng.gen_range(0.01..1.0);
            m[[i, j]] = x;
            total += x;
        }
        for j in 0..n_classes {
            m[[i, j]] /= total;
        }
    }
    m
}

///
/// one-hot label matrix: row i is the indicator of `labels[i]`
///
pub fn mock_onehot(labels: &[usize], n_classes: usize) -> Array2<f64> {
    let mut m = Array2::zeros((labels.len(), n_classes));
    for (i, &label) in labels.iter().enumerate() {
        assert!(label < n_classes);
        m[[i, label]] = 1.0;
    }
    m
}

///
/// uniform matrix with row `zero_row` fully zeroed
/// (deliberately not row-stochastic, for degeneracy tests)
///
pub fn mock_zero_row(len: usize, n_classes: usize, zero_row: usize) -> Array2<f64> {
    let mut m = mock_uniform(len, n_classes);
    for j in 0..n_classes {
        m[[zero_row, j]] = 0.0;
    }
    m
}
