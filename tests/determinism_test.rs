//! Determinism tests for the batched topology checker.
//!
//! The checker is specified as a pure function: same batch in, same
//! verdict vector out, with no hidden state and no dependence on the
//! rayon thread pool. These tests exercise that over randomly
//! generated batches with a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use trazar::prelude::*;

/// Builds a random batch of wire-coded sequences. Codes stay inside the
/// closed vocabulary so construction cannot fail; parameter values span
/// the legal range plus a sprinkling of out-of-range values to exercise
/// the range rule.
fn random_batch(rng: &mut StdRng, n: usize, s: usize) -> SequenceBatch {
    let codes: Vec<i32> = (0..n * s).map(|_| rng.gen_range(-1..=5)).collect();
    let params: Vec<i32> = (0..n * s * 16)
        .map(|_| {
            if rng.gen_ratio(1, 50) {
                rng.gen_range(256..1000)
            } else {
                rng.gen_range(-1..=255)
            }
        })
        .collect();
    let codes = Matrix::from_vec(n, s, codes).expect("sized to n*s");
    let params = ParamTensor::from_vec(n, s, params).expect("sized to n*s*16");
    SequenceBatch::from_codes(&codes, params).expect("codes in vocab")
}

/// Same batch checked twice produces identical verdicts.
#[test]
fn verdicts_are_reproducible_within_run() {
    let mut rng = StdRng::seed_from_u64(0xCAD5EED);
    for _ in 0..20 {
        let batch = random_batch(&mut rng, 16, 24);
        for policy in [CheckPolicy::RangeBased, CheckPolicy::Parametric] {
            let checker = TopologyChecker::new().with_policy(policy);
            assert_eq!(
                checker.check_batch(&batch),
                checker.check_batch(&batch),
                "verdicts drifted between runs under {policy:?}"
            );
            assert_eq!(
                checker.check_batch_detailed(&batch),
                checker.check_batch_detailed(&batch),
                "detailed verdicts drifted between runs under {policy:?}"
            );
        }
    }
}

/// Per-sequence verdicts do not depend on which other sequences share
/// the batch: checking a sequence alone gives the same answer as
/// checking it inside a larger batch.
#[test]
fn verdicts_are_independent_of_batch_neighbors() {
    let mut rng = StdRng::seed_from_u64(42);
    let batch = random_batch(&mut rng, 12, 20);
    let checker = TopologyChecker::new();
    let together = checker.check_batch(&batch);

    for seq in 0..batch.n_sequences() {
        let codes: Vec<i32> = batch.sequence(seq).iter().map(|c| c.code()).collect();
        let params: Vec<i32> = (0..batch.seq_len())
            .flat_map(|k| batch.params().step(seq, k).to_vec())
            .collect();
        let codes = Matrix::from_vec(1, batch.seq_len(), codes).expect("sized");
        let params = ParamTensor::from_vec(1, batch.seq_len(), params).expect("sized");
        let single = SequenceBatch::from_codes(&codes, params).expect("valid");
        assert_eq!(
            checker.check_batch(&single),
            vec![together[seq]],
            "sequence {seq} verdict depends on batch neighbors"
        );
    }
}

/// Verdict order matches input order, and the report tallies it.
#[test]
fn verdict_order_and_report() {
    let mut rng = StdRng::seed_from_u64(7);
    let batch = random_batch(&mut rng, 32, 16);
    let verdicts = check_batch(&batch, DEFAULT_MAX_TOTAL_LEN);
    assert_eq!(verdicts.len(), batch.n_sequences());

    let report = BatchReport::from_verdicts(&verdicts);
    assert_eq!(report.total(), 32);
    assert_eq!(report.rejected(), verdicts.iter().filter(|&&v| v).count());
}

/// A hand-built batch keeps the same verdicts when serialized through
/// JSON and checked again.
#[test]
fn verdicts_survive_serde_round_trip() {
    let codes = Matrix::from_vec(2, 4, vec![4, 0, 3, -1, 5, 3, -1, -1]).expect("valid");
    let mut params = ParamTensor::from_vec(2, 4, vec![-1; 2 * 4 * 16]).expect("valid");
    params.set(0, 1, slot::X, 10);
    params.set(0, 1, slot::Y, 10);
    params.set(1, 0, slot::EXTENT_ONE, 5);
    let batch = SequenceBatch::from_codes(&codes, params).expect("valid");

    let json = serde_json::to_string(&batch).expect("serializes");
    let restored: SequenceBatch = serde_json::from_str(&json).expect("deserializes");

    let checker = TopologyChecker::new();
    assert_eq!(checker.check_batch(&batch), checker.check_batch(&restored));
    assert_eq!(checker.check_batch(&batch), vec![false, true]);
}
