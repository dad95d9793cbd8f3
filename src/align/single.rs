//!
//! Single-example alignment entry points
//!
//! Both functions validate the caller-supplied output buffer before any
//! mutation and then overwrite it in place; the core allocates no output
//! containers of its own.
//!
use super::params::AlignParams;
use super::posterior::run;
use crate::error::AlignError;
use log::debug;
use ndarray::{ArrayView2, ArrayViewMut2};

///
/// Compute the T x N path posterior of one (source, target) pair and
/// write it into `output` (overwrite, not accumulate).
///
/// * `output`: pre-allocated T x N buffer, mutated in place
/// * `source`: T x A row-stochastic prediction matrix (read-only)
/// * `target`: N x A row-stochastic label matrix (read-only)
///
/// T=0 or N=0 is not an error; the (empty) output is left as-is.
///
pub fn ctc_align_targets(
    output: &mut ArrayViewMut2<f64>,
    source: &ArrayView2<f64>,
    target: &ArrayView2<f64>,
    params: &AlignParams,
) -> Result<(), AlignError> {
    let t_len = source.nrows();
    let n_len = target.nrows();
    validate_output(output, (t_len, n_len))?;
    validate_alphabet(source, target)?;
    if t_len == 0 || n_len == 0 {
        return Ok(());
    }
    let o = run(source, target, params)?;
    debug!(
        "align_targets: T={} N={} Z={}",
        t_len,
        n_len,
        o.to_full_prob_forward()
    );
    let posterior = o.to_posterior()?;
    output.assign(&posterior.mat);
    Ok(())
}

///
/// Compute the T x A aligned soft targets of one (source, target) pair
/// (the class-space projection of the path posterior, row-stochastic)
/// and write them into `output` in place.
///
pub fn ctc_aligned_targets(
    output: &mut ArrayViewMut2<f64>,
    source: &ArrayView2<f64>,
    target: &ArrayView2<f64>,
    params: &AlignParams,
) -> Result<(), AlignError> {
    let t_len = source.nrows();
    let n_len = target.nrows();
    validate_output(output, (t_len, source.ncols()))?;
    validate_alphabet(source, target)?;
    if t_len == 0 {
        return Ok(());
    }
    if n_len == 0 {
        output.fill(0.0);
        return Ok(());
    }
    let o = run(source, target, params)?;
    let posterior = o.to_posterior()?;
    output.assign(&posterior.to_aligned_targets(target));
    Ok(())
}

fn validate_output(
    output: &ArrayViewMut2<f64>,
    expected: (usize, usize),
) -> Result<(), AlignError> {
    let actual = (output.nrows(), output.ncols());
    if actual != expected {
        return Err(AlignError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

fn validate_alphabet(
    source: &ArrayView2<f64>,
    target: &ArrayView2<f64>,
) -> Result<(), AlignError> {
    if source.ncols() != target.ncols() {
        return Err(AlignError::AlphabetMismatch {
            source: source.ncols(),
            target: target.ncols(),
        });
    }
    Ok(())
}
