//!
//! test of forced alignment
//!
#[macro_use]
extern crate approx;

use ctcalign::align::mocks::{mock_onehot, mock_random, mock_uniform};
use ctcalign::align::posterior::run;
use ctcalign::prelude::*;
use test_case::test_case;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test_case(5, 3, 2 ; "short binary")]
#[test_case(20, 12, 5 ; "mid")]
#[test_case(3, 10, 4 ; "more targets than frames")]
fn mass_conservation(t: usize, n: usize, a: usize) {
    init();
    let params = AlignParams::default();
    for seed in 0..3 {
        let source = mock_random(t, a, seed);
        let target = mock_random(n, a, seed + 50);
        let mut output = Array2::zeros((t, n));
        ctc_align_targets(&mut output.view_mut(), &source.view(), &target.view(), &params)
            .unwrap();
        assert_abs_diff_eq!(output.sum(), 1.0, epsilon = 1e-5);
        assert!(output.iter().all(|&x| x.is_finite() && x >= 0.0));
    }
}

#[test]
fn degenerate_lengths_give_empty_result() {
    init();
    let params = AlignParams::default();
    for (t, n) in [(0, 4), (4, 0), (0, 0)] {
        let source = mock_uniform(t, 3);
        let target = mock_uniform(n, 3);
        let mut output = Array2::zeros((t, n));
        ctc_align_targets(&mut output.view_mut(), &source.view(), &target.view(), &params)
            .unwrap();
        assert_eq!(output.len(), 0);
    }
}

#[test]
fn shape_mismatch_leaves_output_untouched() {
    init();
    let source = mock_random(6, 3, 0);
    let target = mock_random(4, 3, 1);
    let mut output = Array2::from_elem((6, 5), 7.0);
    let e = ctc_align_targets(
        &mut output.view_mut(),
        &source.view(),
        &target.view(),
        &AlignParams::default(),
    );
    assert_eq!(
        e.unwrap_err(),
        AlignError::ShapeMismatch {
            expected: (6, 4),
            actual: (6, 5)
        }
    );
    assert!(output.iter().all(|&x| x == 7.0));
}

#[test]
fn alphabet_mismatch_is_rejected() {
    init();
    let source = mock_random(6, 3, 0);
    let target = mock_random(4, 4, 1);
    let mut output = Array2::zeros((6, 4));
    let e = ctc_align_targets(
        &mut output.view_mut(),
        &source.view(),
        &target.view(),
        &AlignParams::default(),
    );
    assert_eq!(
        e.unwrap_err(),
        AlignError::AlphabetMismatch {
            source: 3,
            target: 4
        }
    );
}

#[test]
fn alignment_is_deterministic() {
    init();
    let params = AlignParams::default();
    let source = mock_random(15, 6, 11);
    let target = mock_random(9, 6, 12);
    let mut out1 = Array2::zeros((15, 9));
    let mut out2 = Array2::zeros((15, 9));
    ctc_align_targets(&mut out1.view_mut(), &source.view(), &target.view(), &params).unwrap();
    ctc_align_targets(&mut out2.view_mut(), &source.view(), &target.view(), &params).unwrap();
    // bit-identical, not just close
    assert_eq!(out1, out2);
}

#[test]
fn trivial_lattice_is_fully_aligned() {
    init();
    let source = mock_onehot(&[0], 1);
    let target = mock_onehot(&[0], 1);
    let mut output = Array2::zeros((1, 1));
    ctc_align_targets(
        &mut output.view_mut(),
        &source.view(),
        &target.view(),
        &AlignParams::default(),
    )
    .unwrap();
    assert_abs_diff_eq!(output[[0, 0]], 1.0, epsilon = 1e-10);
}

#[test]
fn batch_fails_on_malformed_element_but_element_is_fine_alone() {
    init();
    let params = AlignParams::default();
    // element 0: alphabet mismatch, element 1: well-formed
    let bad_source = mock_random(4, 3, 0);
    let bad_target = mock_random(4, 5, 1);
    let good_source = mock_random(8, 4, 2);
    let good_target = mock_random(6, 4, 3);

    let sources = vec![bad_source.view(), good_source.view()];
    let targets = vec![bad_target.view(), good_target.view()];
    let mut costs = vec![f64::NAN; 2];
    let e = ctc_align_targets_batch(&mut costs, &sources, &targets, &params);
    match e.unwrap_err() {
        AlignError::BatchElementFailure { index, .. } => assert_eq!(index, 0),
        other => panic!("unexpected error {:?}", other),
    }

    // element 1 alone succeeds, and its cost equals the all-valid
    // singleton batch
    let o = run(&good_source.view(), &good_target.view(), &params).unwrap();
    let cost_single = o.to_cost(&params).unwrap();
    let mut costs = vec![0.0; 1];
    ctc_align_targets_batch(
        &mut costs,
        &[good_source.view()],
        &[good_target.view()],
        &params,
    )
    .unwrap();
    assert_abs_diff_eq!(costs[0], cost_single, epsilon = 1e-12);
}

#[test]
fn long_sequences_stay_finite() {
    init();
    let params = AlignParams::default();
    let source = mock_uniform(500, 10);
    let target = mock_uniform(500, 10);
    let o = run(&source.view(), &target.view(), &params).unwrap();
    let zf = o.to_full_prob_forward();
    let zb = o.to_full_prob_backward();
    assert!(zf.to_log_value().is_finite());
    assert!(!zf.is_zero());
    // forward and backward agree on the total path mass
    assert_abs_diff_eq!(zf.to_log_value(), zb.to_log_value(), epsilon = 1e-6);

    let post = o.to_posterior().unwrap();
    assert_abs_diff_eq!(post.total_mass(), 1.0, epsilon = 1e-5);
    // no cell collapsed to NaN/inf
    assert!(post.mat.iter().all(|&x| x.is_finite()));
}

#[test]
fn floored_source_still_aligns() {
    init();
    // hard zeros in the prediction are floored away, so one-hot vs
    // one-hot with disagreeing labels still has positive path mass
    let params = AlignParams::default();
    let source = mock_onehot(&[0, 0, 1], 2);
    let target = mock_onehot(&[1, 0], 2);
    let mut output = Array2::zeros((3, 2));
    ctc_align_targets(&mut output.view_mut(), &source.view(), &target.view(), &params).unwrap();
    assert_abs_diff_eq!(output.sum(), 1.0, epsilon = 1e-5);
}

#[test]
fn aligned_targets_projection() {
    init();
    // a perfectly confident diagonal pair reproduces the labels
    let params = AlignParams::default();
    let source = mock_onehot(&[0, 1, 2], 3);
    let target = mock_onehot(&[0, 1, 2], 3);
    let mut output = Array2::zeros((3, 3));
    ctc_aligned_targets(&mut output.view_mut(), &source.view(), &target.view(), &params)
        .unwrap();
    for t in 0..3 {
        // the dominant class of frame t is label t
        let best = (0..3).max_by(|&a, &b| output[[t, a]].partial_cmp(&output[[t, b]]).unwrap());
        assert_eq!(best, Some(t));
        assert_abs_diff_eq!(output.row(t).sum(), 1.0, epsilon = 1e-4);
    }
}
