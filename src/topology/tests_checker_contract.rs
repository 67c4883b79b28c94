// =========================================================================
// FALSIFY-TC: Topology checker contract (trazar topology)
//
// Each test tries to falsify one clause of the checker contract: the
// twelve validity rules, verdict ordering, purity, and the fail-fast
// behavior on malformed batches.
// =========================================================================

use super::*;
use crate::error::TrazarError;
use crate::primitives::{Matrix, ParamTensor};

fn batch_with(codes: Vec<i32>, sets: &[(usize, usize, i32)]) -> SequenceBatch {
    let s = codes.len();
    let codes = Matrix::from_vec(1, s, codes).expect("valid");
    let mut params = ParamTensor::from_vec(1, s, vec![-1; s * 16]).expect("valid");
    for &(step, slot_idx, value) in sets {
        params.set(0, step, slot_idx, value);
    }
    SequenceBatch::from_codes(&codes, params).expect("valid batch")
}

fn minimal_valid() -> SequenceBatch {
    batch_with(vec![4, 0, 3, -1, -1], &[(1, slot::X, 10), (1, slot::Y, 10)])
}

/// FALSIFY-TC-001: Idempotence: re-running the checker on the same
/// batch yields identical verdicts.
#[test]
fn falsify_tc_001_idempotent() {
    let batch = minimal_valid();
    let checker = TopologyChecker::new();
    let first = checker.check_batch(&batch);
    let second = checker.check_batch(&batch);
    assert_eq!(first, second, "FALSIFIED TC-001: verdicts changed on re-run");
}

/// FALSIFY-TC-002: A sequence whose first token is Extrude is invalid.
#[test]
fn falsify_tc_002_extrude_first() {
    let batch = batch_with(vec![5, 3, -1], &[(0, slot::EXTENT_ONE, 5)]);
    assert_eq!(
        TopologyChecker::new().check_batch(&batch),
        vec![true],
        "FALSIFIED TC-002: leading extrude accepted"
    );
}

/// FALSIFY-TC-003: An Extrude with no StartSketch anywhere earlier is
/// invalid.
#[test]
fn falsify_tc_003_extrude_before_sketch() {
    let batch = batch_with(
        vec![0, 5, 3, -1],
        &[(0, slot::X, 10), (0, slot::Y, 10), (1, slot::EXTENT_ONE, 5)],
    );
    assert_eq!(
        TopologyChecker::new().check_batch(&batch),
        vec![true],
        "FALSIFIED TC-003: unsketched extrude accepted"
    );
}

/// FALSIFY-TC-004: A StartSketch immediately followed by EOS (no
/// primitive between) is invalid.
#[test]
fn falsify_tc_004_empty_sketch() {
    let batch = batch_with(vec![4, 3, -1], &[(0, slot::SKETCH_SIZE, 4)]);
    assert_eq!(
        TopologyChecker::new().check_batch(&batch),
        vec![true],
        "FALSIFIED TC-004: empty sketch accepted"
    );
}

/// FALSIFY-TC-005: A sequence with no EOS token is invalid.
#[test]
fn falsify_tc_005_missing_eos() {
    let batch = batch_with(vec![4, 0, -1, -1], &[(1, slot::X, 10), (1, slot::Y, 10)]);
    assert_eq!(
        TopologyChecker::new().check_batch(&batch),
        vec![true],
        "FALSIFIED TC-005: unterminated sequence accepted"
    );
}

/// FALSIFY-TC-006: The minimal sketch-line-EOS program with valid line
/// parameters is fully valid.
#[test]
fn falsify_tc_006_minimal_valid_program() {
    assert_eq!(
        TopologyChecker::new().check_batch(&minimal_valid()),
        vec![false],
        "FALSIFIED TC-006: minimal valid program rejected"
    );
}

/// FALSIFY-TC-007: Injecting a live token after the EOS invalidates the
/// otherwise-valid program.
#[test]
fn falsify_tc_007_live_token_after_eos() {
    let batch = batch_with(
        vec![4, 0, 3, 0, -1],
        &[(1, slot::X, 10), (1, slot::Y, 10)],
    );
    assert_eq!(
        TopologyChecker::new().check_batch(&batch),
        vec![true],
        "FALSIFIED TC-007: live tail after EOS accepted"
    );
}

/// FALSIFY-TC-008: Circle radius 0 invalidates; radius 1 contributes no
/// violation.
#[test]
fn falsify_tc_008_circle_radius() {
    let zero = batch_with(vec![4, 2, 3], &[(1, slot::X, 8), (1, slot::RADIUS, 0)]);
    assert_eq!(
        TopologyChecker::new().check_batch(&zero),
        vec![true],
        "FALSIFIED TC-008: zero-radius circle accepted"
    );

    let one = batch_with(vec![4, 2, 3], &[(1, slot::X, 8), (1, slot::RADIUS, 1)]);
    let v = TopologyChecker::new().check_batch_detailed(&one);
    assert!(
        !v[0].contains(RuleViolations::BAD_CIRCLE),
        "FALSIFIED TC-008: unit-radius circle flagged"
    );
}

/// FALSIFY-TC-009: Two-sided extrude with missing second extent
/// invalidates; one-sided extrude never consults the second extent.
#[test]
fn falsify_tc_009_second_extent() {
    let base = [
        (1, slot::X, 10),
        (1, slot::Y, 10),
        (2, slot::EXTENT_ONE, 5),
        (2, slot::SKETCH_SIZE, 3),
        (2, slot::BOOLEAN_OP, NEW_BODY_OP),
    ];

    let mut two_sided = base.to_vec();
    two_sided.push((2, slot::EXTENT_TYPE, 2));
    let batch = batch_with(vec![4, 0, 5, 3], &two_sided);
    assert_eq!(
        TopologyChecker::new().check_batch(&batch),
        vec![true],
        "FALSIFIED TC-009: two-sided extrude without e2 accepted"
    );

    let mut one_sided = base.to_vec();
    one_sided.push((2, slot::EXTENT_TYPE, 0));
    let batch = batch_with(vec![4, 0, 5, 3], &one_sided);
    let v = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(
        !v[0].contains(RuleViolations::BAD_EXTRUDE),
        "FALSIFIED TC-009: one-sided extrude flagged for missing e2"
    );
}

/// FALSIFY-TC-010: The first extrude with a non-new-body op invalidates
/// the sequence regardless of later extrudes' op codes.
#[test]
fn falsify_tc_010_first_extrude_op() {
    let batch = batch_with(
        vec![4, 0, 5, 4, 0, 5, 3, -1],
        &[
            (1, slot::X, 10),
            (1, slot::Y, 10),
            (2, slot::EXTENT_ONE, 5),
            (2, slot::SKETCH_SIZE, 3),
            (2, slot::BOOLEAN_OP, 1),
            (4, slot::X, 20),
            (4, slot::Y, 20),
            (5, slot::EXTENT_ONE, 5),
            (5, slot::SKETCH_SIZE, 3),
            (5, slot::BOOLEAN_OP, NEW_BODY_OP),
        ],
    );
    assert_eq!(
        TopologyChecker::new().check_batch(&batch),
        vec![true],
        "FALSIFIED TC-010: non-new-body first extrude accepted"
    );
}

/// FALSIFY-TC-011: Any parameter outside [−1, 255] invalidates the
/// holding sequence.
#[test]
fn falsify_tc_011_param_range() {
    for bad in [256, -2, 1000] {
        let batch = batch_with(
            vec![4, 0, 3],
            &[(1, slot::X, 10), (1, slot::Y, 10), (0, slot::SKETCH_SIZE, bad)],
        );
        assert_eq!(
            TopologyChecker::new().check_batch(&batch),
            vec![true],
            "FALSIFIED TC-011: value {bad} accepted"
        );
    }
}

/// FALSIFY-TC-012: With max_total_len = 3, live content at index 3+
/// invalidates; an all-pad tail there does not.
#[test]
fn falsify_tc_012_max_len() {
    let live_tail = batch_with(
        vec![4, 0, 3, 0, -1],
        &[(1, slot::X, 10), (1, slot::Y, 10)],
    );
    let checker = TopologyChecker::new().with_max_total_len(3);
    let v = checker.check_batch_detailed(&live_tail);
    assert!(
        v[0].contains(RuleViolations::OVER_MAX_LEN),
        "FALSIFIED TC-012: live command past the cap accepted"
    );

    let pad_tail = batch_with(
        vec![4, 0, 3, -1, -1],
        &[(1, slot::X, 10), (1, slot::Y, 10)],
    );
    let v = checker.check_batch_detailed(&pad_tail);
    assert!(
        !v[0].contains(RuleViolations::OVER_MAX_LEN),
        "FALSIFIED TC-012: padded tail past the cap flagged"
    );
}

/// FALSIFY-TC-013: A batch-shape mismatch is a contract violation at
/// construction, never a verdict.
#[test]
fn falsify_tc_013_shape_mismatch_is_error() {
    let codes = Matrix::from_vec(1, 4, vec![4, 0, 3, -1]).expect("valid");
    let params = ParamTensor::from_vec(1, 5, vec![-1; 5 * 16]).expect("valid");
    let result = SequenceBatch::from_codes(&codes, params);
    assert!(
        matches!(result, Err(TrazarError::DimensionMismatch { .. })),
        "FALSIFIED TC-013: mismatched shapes produced a batch"
    );
}

mod tc_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn arb_batch() -> impl Strategy<Value = SequenceBatch> {
        (1usize..6, 1usize..12)
            .prop_flat_map(|(n, s)| {
                (
                    proptest::collection::vec(-1i32..=5, n * s),
                    proptest::collection::vec(-1i32..=255, n * s * 16),
                    Just(n),
                    Just(s),
                )
            })
            .prop_map(|(codes, params, n, s)| {
                let codes = Matrix::from_vec(n, s, codes).expect("sized to n*s");
                let params =
                    ParamTensor::from_vec(n, s, params).expect("sized to n*s*16");
                SequenceBatch::from_codes(&codes, params).expect("codes in vocab")
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Purity: same batch, same verdicts, under both policies.
        #[test]
        fn falsify_tc_prop_idempotent(batch in arb_batch()) {
            for policy in [CheckPolicy::RangeBased, CheckPolicy::Parametric] {
                let checker = TopologyChecker::new().with_policy(policy);
                prop_assert_eq!(
                    checker.check_batch(&batch),
                    checker.check_batch(&batch)
                );
            }
        }

        /// The boolean interface is exactly the detailed bitmask
        /// reduced to non-emptiness.
        #[test]
        fn falsify_tc_prop_bool_matches_detailed(batch in arb_batch()) {
            let checker = TopologyChecker::new();
            let bools = checker.check_batch(&batch);
            let detailed = checker.check_batch_detailed(&batch);
            prop_assert_eq!(bools.len(), detailed.len());
            for (b, d) in bools.iter().zip(&detailed) {
                prop_assert_eq!(*b, !d.is_empty());
            }
        }

        /// Verdict count always matches batch size.
        #[test]
        fn falsify_tc_prop_verdict_per_sequence(batch in arb_batch()) {
            let verdicts = TopologyChecker::new().check_batch(&batch);
            prop_assert_eq!(verdicts.len(), batch.n_sequences());
        }
    }
}
