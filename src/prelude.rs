//!
//! globally-available parts
//!
pub use crate::align::params::{AlignParams, CostNorm};
pub use crate::align::{ctc_align_targets, ctc_align_targets_batch, ctc_aligned_targets};
pub use crate::error::AlignError;
pub use crate::prob::{lp, p, Prob};
pub use ndarray::{Array2, ArrayView2, ArrayViewMut2};
