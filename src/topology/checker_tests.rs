pub(crate) use super::*;
use crate::primitives::{Matrix, ParamTensor};

/// Single-sequence batch; `sets` is (step, slot, value) for sequence 0,
/// every other slot holding the pad sentinel.
fn batch_with(codes: Vec<i32>, sets: &[(usize, usize, i32)]) -> SequenceBatch {
    let s = codes.len();
    let codes = Matrix::from_vec(1, s, codes).expect("valid");
    let mut params = ParamTensor::from_vec(1, s, vec![-1; s * 16]).expect("valid");
    for &(step, slot_idx, value) in sets {
        params.set(0, step, slot_idx, value);
    }
    SequenceBatch::from_codes(&codes, params).expect("valid batch")
}

/// StartSketch, Line(10,10), Extrude(e1=5, s=3, op=new-body), EOS, pads.
fn sketch_extrude_program() -> SequenceBatch {
    batch_with(
        vec![4, 0, 5, 3, -1, -1],
        &[
            (1, slot::X, 10),
            (1, slot::Y, 10),
            (2, slot::EXTENT_ONE, 5),
            (2, slot::EXTENT_TYPE, 0),
            (2, slot::SKETCH_SIZE, 3),
            (2, slot::BOOLEAN_OP, NEW_BODY_OP),
        ],
    )
}

#[test]
fn test_defaults() {
    let checker = TopologyChecker::new();
    assert_eq!(checker.policy(), CheckPolicy::RangeBased);
    assert_eq!(checker.max_total_len(), 60);
}

#[test]
fn test_builder() {
    let checker = TopologyChecker::new()
        .with_policy(CheckPolicy::Parametric)
        .with_max_total_len(10);
    assert_eq!(checker.policy(), CheckPolicy::Parametric);
    assert_eq!(checker.max_total_len(), 10);
}

#[test]
fn test_valid_program_under_both_policies() {
    let batch = sketch_extrude_program();
    for policy in [CheckPolicy::RangeBased, CheckPolicy::Parametric] {
        let checker = TopologyChecker::new().with_policy(policy);
        assert_eq!(checker.check_batch(&batch), vec![false], "{policy:?}");
    }
}

#[test]
fn test_line_missing_endpoint_range_based() {
    // Endpoint y left as pad sentinel
    let batch = batch_with(vec![4, 0, 3, -1], &[(1, slot::X, 10)]);
    let v = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(v[0].contains(RuleViolations::BAD_LINE));
}

#[test]
fn test_line_policies_diverge_on_degenerate_endpoint() {
    // Endpoint equals reference point: fine for RangeBased (both
    // present), degenerate zero-length line for Parametric.
    let batch = batch_with(
        vec![4, 0, 3, -1],
        &[
            (1, slot::X, 5),
            (1, slot::Y, 5),
            (1, slot::ALPHA, 5),
            (1, slot::F, 5),
        ],
    );
    let range = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(!range[0].contains(RuleViolations::BAD_LINE));

    let parametric = TopologyChecker::new()
        .with_policy(CheckPolicy::Parametric)
        .check_batch_detailed(&batch);
    assert!(parametric[0].contains(RuleViolations::BAD_LINE));
}

#[test]
fn test_arc_policies_diverge() {
    // Sweep angle missing but end angle > start angle
    let batch = batch_with(
        vec![4, 1, 3, -1],
        &[(1, slot::X, 3), (1, slot::F, 1), (1, slot::RADIUS, 5)],
    );
    let range = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(range[0].contains(RuleViolations::BAD_ARC));

    let parametric = TopologyChecker::new()
        .with_policy(CheckPolicy::Parametric)
        .check_batch_detailed(&batch);
    assert!(!parametric[0].contains(RuleViolations::BAD_ARC));
}

#[test]
fn test_arc_end_angle_not_after_start() {
    // Positive sweep but t2 == t1: Parametric rejects, RangeBased accepts
    let batch = batch_with(
        vec![4, 1, 3, -1],
        &[
            (1, slot::X, 3),
            (1, slot::ALPHA, 9),
            (1, slot::F, 5),
            (1, slot::RADIUS, 5),
        ],
    );
    let range = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(!range[0].contains(RuleViolations::BAD_ARC));

    let parametric = TopologyChecker::new()
        .with_policy(CheckPolicy::Parametric)
        .check_batch_detailed(&batch);
    assert!(parametric[0].contains(RuleViolations::BAD_ARC));
}

#[test]
fn test_circle_radius_must_be_positive() {
    let zero = batch_with(vec![4, 2, 3, -1], &[(1, slot::X, 8), (1, slot::RADIUS, 0)]);
    let v = TopologyChecker::new().check_batch_detailed(&zero);
    assert!(v[0].contains(RuleViolations::BAD_CIRCLE));

    let one = batch_with(vec![4, 2, 3, -1], &[(1, slot::X, 8), (1, slot::RADIUS, 1)]);
    let v = TopologyChecker::new().check_batch_detailed(&one);
    assert!(!v[0].contains(RuleViolations::BAD_CIRCLE));
}

#[test]
fn test_extrude_extent_one_required() {
    let mut sets = vec![
        (1, slot::X, 10),
        (1, slot::Y, 10),
        (2, slot::SKETCH_SIZE, 3),
        (2, slot::BOOLEAN_OP, NEW_BODY_OP),
    ];
    sets.push((2, slot::EXTENT_ONE, 0));
    let batch = batch_with(vec![4, 0, 5, 3], &sets);
    let v = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(v[0].contains(RuleViolations::BAD_EXTRUDE));
}

#[test]
fn test_extrude_two_sided_needs_second_extent() {
    // extent-type 2 with extent2 still the pad sentinel
    let batch = batch_with(
        vec![4, 0, 5, 3],
        &[
            (1, slot::X, 10),
            (1, slot::Y, 10),
            (2, slot::EXTENT_ONE, 5),
            (2, slot::EXTENT_TYPE, 2),
            (2, slot::SKETCH_SIZE, 3),
            (2, slot::BOOLEAN_OP, NEW_BODY_OP),
        ],
    );
    let v = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(v[0].contains(RuleViolations::BAD_EXTRUDE));
}

#[test]
fn test_extrude_one_sided_ignores_second_extent() {
    let batch = sketch_extrude_program();
    let v = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(!v[0].contains(RuleViolations::BAD_EXTRUDE));
}

#[test]
fn test_sketch_size_check_is_range_based_only() {
    let batch = batch_with(
        vec![4, 0, 5, 3],
        &[
            (1, slot::X, 10),
            (1, slot::Y, 10),
            (2, slot::EXTENT_ONE, 5),
            (2, slot::BOOLEAN_OP, NEW_BODY_OP),
        ],
    );
    let range = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(range[0].contains(RuleViolations::BAD_EXTRUDE));

    let parametric = TopologyChecker::new()
        .with_policy(CheckPolicy::Parametric)
        .check_batch_detailed(&batch);
    assert!(!parametric[0].contains(RuleViolations::BAD_EXTRUDE));
}

#[test]
fn test_first_extrude_must_create_new_body() {
    let batch = batch_with(
        vec![4, 0, 5, 3],
        &[
            (1, slot::X, 10),
            (1, slot::Y, 10),
            (2, slot::EXTENT_ONE, 5),
            (2, slot::SKETCH_SIZE, 3),
            (2, slot::BOOLEAN_OP, 1),
        ],
    );
    let v = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(v[0].contains(RuleViolations::BAD_EXTRUDE));
}

#[test]
fn test_later_extrudes_may_use_any_boolean_op() {
    let batch = batch_with(
        vec![4, 0, 5, 4, 0, 5, 3, -1],
        &[
            (1, slot::X, 10),
            (1, slot::Y, 10),
            (2, slot::EXTENT_ONE, 5),
            (2, slot::SKETCH_SIZE, 3),
            (2, slot::BOOLEAN_OP, NEW_BODY_OP),
            (4, slot::X, 20),
            (4, slot::Y, 20),
            (5, slot::EXTENT_ONE, 5),
            (5, slot::SKETCH_SIZE, 3),
            (5, slot::BOOLEAN_OP, 2),
        ],
    );
    let v = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(!v[0].contains(RuleViolations::BAD_EXTRUDE));
}

#[test]
fn test_all_pad_params_rejected() {
    let batch = batch_with(vec![4, 2, 3, -1], &[]);
    let v = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(v[0].contains(RuleViolations::EMPTY_PARAMS));
}

#[test]
fn test_param_out_of_range() {
    let high = batch_with(vec![4, 0, 3], &[(1, slot::X, 256), (1, slot::Y, 10)]);
    let v = TopologyChecker::new().check_batch_detailed(&high);
    assert!(v[0].contains(RuleViolations::PARAM_OUT_OF_RANGE));

    let low = batch_with(vec![4, 0, 3], &[(1, slot::X, 10), (1, slot::Y, -2)]);
    let v = TopologyChecker::new().check_batch_detailed(&low);
    assert!(v[0].contains(RuleViolations::PARAM_OUT_OF_RANGE));
}

#[test]
fn test_boundary_values_are_in_range() {
    let batch = batch_with(vec![4, 0, 3], &[(1, slot::X, 255), (1, slot::Y, 0)]);
    let v = TopologyChecker::new().check_batch_detailed(&batch);
    assert!(!v[0].contains(RuleViolations::PARAM_OUT_OF_RANGE));
}

#[test]
fn test_verdict_order_matches_batch_order() {
    // Sequence 0 starts with Extrude (invalid), sequence 1 is fine.
    let codes = Matrix::from_vec(2, 4, vec![5, 3, -1, -1, 4, 0, 3, -1]).expect("valid");
    let mut params = ParamTensor::from_vec(2, 4, vec![-1; 2 * 4 * 16]).expect("valid");
    params.set(0, 0, slot::EXTENT_ONE, 5);
    params.set(1, 1, slot::X, 10);
    params.set(1, 1, slot::Y, 10);
    let batch = SequenceBatch::from_codes(&codes, params).expect("valid batch");

    let verdicts = TopologyChecker::new().check_batch(&batch);
    assert_eq!(verdicts, vec![true, false]);
}

#[test]
fn test_check_batch_is_detailed_reduction() {
    let batch = sketch_extrude_program();
    let checker = TopologyChecker::new();
    let bools = checker.check_batch(&batch);
    let detailed = checker.check_batch_detailed(&batch);
    assert_eq!(bools.len(), detailed.len());
    for (b, d) in bools.iter().zip(&detailed) {
        assert_eq!(*b, !d.is_empty());
    }
}

#[test]
fn test_free_function_uses_default_policy() {
    let batch = sketch_extrude_program();
    assert_eq!(check_batch(&batch, 60), vec![false]);
    // With the cap at 2, the Extrude at index 2 is over the line
    assert_eq!(check_batch(&batch, 2), vec![true]);
}

#[test]
fn test_report() {
    let report = BatchReport::from_verdicts(&[true, false, false, true, false]);
    assert_eq!(report.accepted(), 3);
    assert_eq!(report.rejected(), 2);
    assert_eq!(report.total(), 5);
    assert!((report.acceptance_ratio() - 0.6).abs() < 1e-6);
    assert_eq!(report.to_string(), "3 accepted / 2 rejected (60.0%)");
}

#[test]
fn test_report_empty() {
    let report = BatchReport::from_verdicts(&[]);
    assert_eq!(report.total(), 0);
    assert!((report.acceptance_ratio() - 0.0).abs() < 1e-6);
}
