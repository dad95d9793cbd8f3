//!
//! Batched alignment cost calculation
//!
//! Batch elements are independent, so they are evaluated on the rayon
//! pool and the costs are committed sequentially afterwards. On failure
//! the error names the smallest offending index and the cost buffer
//! contents are unspecified.
//!
use super::params::AlignParams;
use super::posterior::run;
use crate::error::AlignError;
use log::debug;
use ndarray::ArrayView2;
use rayon::prelude::*;

///
/// Compute the alignment cost `-log Z_i` (normalized per
/// `params.cost_norm`) of every (source, target) pair of the batch and
/// write them into `costs` in place.
///
/// Elements may differ in T, N and A; each pair only has to satisfy
/// the engine's constraints on its own. `costs` must be pre-allocated
/// to the batch length.
///
pub fn ctc_align_targets_batch(
    costs: &mut [f64],
    sources: &[ArrayView2<f64>],
    targets: &[ArrayView2<f64>],
    params: &AlignParams,
) -> Result<(), AlignError> {
    if sources.len() != targets.len() || costs.len() != sources.len() {
        return Err(AlignError::BatchSizeMismatch {
            sources: sources.len(),
            targets: targets.len(),
            costs: costs.len(),
        });
    }
    debug!("align_targets_batch: n={}", sources.len());
    let results: Vec<Result<f64, AlignError>> = sources
        .par_iter()
        .zip(targets.par_iter())
        .map(|(source, target)| {
            let o = run(source, target, params)?;
            o.to_cost(params)
        })
        .collect();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(cost) => costs[index] = cost,
            Err(e) => return Err(e.at_index(index)),
        }
    }
    Ok(())
}
