//!
//! Error definitions for alignment calculation
//!
//! All errors are returned synchronously to the caller; nothing is retried
//! internally. Validation runs before any output buffer is touched.
//!
///
/// Error type of `ctc_align_targets` / `ctc_align_targets_batch`
///
// `thiserror` cannot derive this enum: it unconditionally treats any field
// named `source` as the error source, and `AlphabetMismatch::source` is a
// plain `usize`, so `Display`/`Error` are implemented by hand instead.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignError {
    /// output buffer does not have the (rows, cols) implied by the inputs
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// source and target distributions are over different alphabets
    AlphabetMismatch { source: usize, target: usize },
    /// batch buffers disagree on the number of elements
    BatchSizeMismatch {
        sources: usize,
        targets: usize,
        costs: usize,
    },
    /// zero or non-finite total path probability
    ///
    /// Cannot happen with strictly positive row-stochastic inputs, but a
    /// target row of zeros (for example) kills every monotonic path.
    NumericalDegeneracy,
    /// one element of a batch failed; the rest of the cost buffer is
    /// unspecified after this is returned
    BatchElementFailure {
        index: usize,
        source: Box<AlignError>,
    },
}

impl std::fmt::Display for AlignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignError::ShapeMismatch { expected, actual } => write!(
                f,
                "shape mismatch: output is {:?}, expected {:?}",
                actual, expected
            ),
            AlignError::AlphabetMismatch { source, target } => write!(
                f,
                "alphabet mismatch: source width {} != target width {}",
                source, target
            ),
            AlignError::BatchSizeMismatch {
                sources,
                targets,
                costs,
            } => write!(
                f,
                "batch size mismatch: {} sources, {} targets, {} costs",
                sources, targets, costs
            ),
            AlignError::NumericalDegeneracy => write!(
                f,
                "numerical degeneracy: total path probability is zero or non-finite"
            ),
            AlignError::BatchElementFailure { index, source } => {
                write!(f, "batch element {} failed: {}", index, source)
            }
        }
    }
}

impl std::error::Error for AlignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlignError::BatchElementFailure { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl AlignError {
    ///
    /// Wrap an error as the failure of batch element `index`
    ///
    pub fn at_index(self, index: usize) -> AlignError {
        AlignError::BatchElementFailure {
            index,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = AlignError::AlphabetMismatch {
            source: 3,
            target: 5,
        };
        assert_eq!(
            e.to_string(),
            "alphabet mismatch: source width 3 != target width 5"
        );
        let e = e.at_index(2);
        assert_eq!(
            e.to_string(),
            "batch element 2 failed: alphabet mismatch: source width 3 != target width 5"
        );
    }
    #[test]
    fn error_eq() {
        let a = AlignError::NumericalDegeneracy.at_index(0);
        let b = AlignError::NumericalDegeneracy.at_index(0);
        let c = AlignError::NumericalDegeneracy.at_index(1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
