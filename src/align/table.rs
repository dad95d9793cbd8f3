//!
//! Table definitions
//!
//! ## AlignTable
//!
//! the path probability assigned to each target position, for one source
//! frame: one row `F[t][*]` (or `B[t][*]`) of the DP matrix
//!
use crate::prob::Prob;
use std::ops::{Index, IndexMut};

///
/// DP values of a single source frame, over all N target positions
///
#[derive(Debug, Clone, PartialEq)]
pub struct AlignTable {
    pub probs: Vec<Prob>,
}

impl AlignTable {
    pub fn new(n: usize, value: Prob) -> Self {
        AlignTable {
            probs: vec![value; n],
        }
    }
    pub fn zero(n: usize) -> Self {
        AlignTable::new(n, Prob::zero())
    }
    /// Get the number of target positions in the table
    pub fn n_targets(&self) -> usize {
        self.probs.len()
    }
    /// `max |t1[n] - t2[n]|` in linear domain
    pub fn diff(&self, other: &AlignTable) -> f64 {
        assert_eq!(self.n_targets(), other.n_targets());
        self.probs
            .iter()
            .zip(other.probs.iter())
            .map(|(a, b)| a.diff(*b))
            .fold(0.0, f64::max)
    }
}

impl Index<usize> for AlignTable {
    type Output = Prob;
    fn index(&self, n: usize) -> &Prob {
        &self.probs[n]
    }
}
impl IndexMut<usize> for AlignTable {
    fn index_mut(&mut self, n: usize) -> &mut Prob {
        &mut self.probs[n]
    }
}

impl std::fmt::Display for AlignTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (n, p) in self.probs.iter().enumerate() {
            writeln!(f, "{}\t{}", n, p)?;
        }
        Ok(())
    }
}

/// Struct that stores Forward/Backward algorithm result
/// for one (source, target) pair
///
/// the length of `AlignResult.tables` will be equal to the number of
/// source frames T; each table has N entries
#[derive(Debug, Clone)]
pub struct AlignResult {
    pub tables: Vec<AlignTable>,
}

impl AlignResult {
    /// The number of source frames that this result stores.
    pub fn n_frames(&self) -> usize {
        self.tables.len()
    }
    pub fn table(&self, t: usize) -> &AlignTable {
        &self.tables[t]
    }
    ///
    /// DP value of the terminal cell, i.e. `F[T-1][N-1]` for a forward
    /// result. `Prob::one()` if the lattice is empty (T=0 or N=0).
    ///
    pub fn last_prob(&self) -> Prob {
        self.tables
            .last()
            .and_then(|table| table.probs.last())
            .copied()
            .unwrap_or_else(Prob::one)
    }
    ///
    /// DP value of the starting cell, i.e. `B[0][0]` for a backward
    /// result. `Prob::one()` if the lattice is empty.
    ///
    pub fn first_prob(&self) -> Prob {
        self.tables
            .first()
            .and_then(|table| table.probs.first())
            .copied()
            .unwrap_or_else(Prob::one)
    }
}
