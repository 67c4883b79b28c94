//! Batched topology checker.

use rayon::prelude::*;

use crate::cad::{
    slot, Command, SequenceBatch, DEFAULT_MAX_TOTAL_LEN, MAX_PARAM, NEW_BODY_OP,
    PAD_VAL,
};
use crate::topology::scan::scan_sequence;
use crate::topology::{CheckPolicy, RuleViolations};

/// Validity checker for batches of CAD construction sequences.
///
/// A pure function object: same batch in, same verdicts out, no state
/// across calls. All rules are evaluated for every sequence and their
/// results OR-ed; a single failing rule rejects the sequence.
///
/// # Example
///
/// ```
/// use trazar::topology::{CheckPolicy, TopologyChecker};
///
/// let checker = TopologyChecker::new()
///     .with_policy(CheckPolicy::Parametric)
///     .with_max_total_len(60);
/// assert_eq!(checker.policy(), CheckPolicy::Parametric);
/// assert_eq!(checker.max_total_len(), 60);
/// ```
#[derive(Debug, Clone)]
pub struct TopologyChecker {
    policy: CheckPolicy,
    max_total_len: usize,
}

impl Default for TopologyChecker {
    fn default() -> Self {
        Self {
            policy: CheckPolicy::RangeBased,
            max_total_len: DEFAULT_MAX_TOTAL_LEN,
        }
    }
}

impl TopologyChecker {
    /// Create a checker with the default policy (`RangeBased`) and
    /// length cap (60).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select which rule-set variant to apply.
    #[must_use]
    pub fn with_policy(mut self, policy: CheckPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the cap on effective sequence length; live commands at or
    /// beyond this index invalidate a sequence regardless of the
    /// declared width S.
    #[must_use]
    pub fn with_max_total_len(mut self, max_total_len: usize) -> Self {
        self.max_total_len = max_total_len;
        self
    }

    /// The active rule-set variant.
    #[must_use]
    pub fn policy(&self) -> CheckPolicy {
        self.policy
    }

    /// The active length cap.
    #[must_use]
    pub fn max_total_len(&self) -> usize {
        self.max_total_len
    }

    /// Check every sequence in the batch, reporting which rules fired.
    ///
    /// Sequences are independent, so they are scanned in parallel; the
    /// output preserves batch order.
    #[must_use]
    pub fn check_batch_detailed(&self, batch: &SequenceBatch) -> Vec<RuleViolations> {
        (0..batch.n_sequences())
            .into_par_iter()
            .map(|seq| self.check_sequence(batch, seq))
            .collect()
    }

    /// Check every sequence in the batch; `true` = invalid.
    #[must_use]
    pub fn check_batch(&self, batch: &SequenceBatch) -> Vec<bool> {
        self.check_batch_detailed(batch)
            .into_iter()
            .map(|v| !v.is_empty())
            .collect()
    }

    fn check_sequence(&self, batch: &SequenceBatch, seq: usize) -> RuleViolations {
        scan_sequence(batch, seq, self.max_total_len) | self.numeric_checks(batch, seq)
    }

    /// The vectorizable rules (6–11): per-command parameter constraints
    /// and batch-wide range/emptiness reductions.
    fn numeric_checks(&self, batch: &SequenceBatch, seq: usize) -> RuleViolations {
        let mut violations = RuleViolations::NONE;
        let mut any_live_param = false;
        let mut first_extrude = true;

        for (k, &cmd) in batch.sequence(seq).iter().enumerate() {
            let p = batch.params().step(seq, k);

            if p.iter().any(|&v| !(PAD_VAL..=MAX_PARAM).contains(&v)) {
                violations |= RuleViolations::PARAM_OUT_OF_RANGE;
            }
            if p.iter().any(|&v| v != PAD_VAL) {
                any_live_param = true;
            }

            match cmd {
                Command::Line => {
                    let degenerate = match self.policy {
                        CheckPolicy::RangeBased => {
                            p[slot::X] == PAD_VAL || p[slot::Y] == PAD_VAL
                        }
                        CheckPolicy::Parametric => {
                            p[slot::X] == p[slot::ALPHA] && p[slot::Y] == p[slot::F]
                        }
                    };
                    if degenerate {
                        violations |= RuleViolations::BAD_LINE;
                    }
                }
                Command::Arc => {
                    let bad = match self.policy {
                        CheckPolicy::RangeBased => p[slot::ALPHA] <= 0,
                        CheckPolicy::Parametric => p[slot::RADIUS] <= p[slot::F],
                    };
                    if bad {
                        violations |= RuleViolations::BAD_ARC;
                    }
                }
                Command::Circle => {
                    if p[slot::RADIUS] <= 0 {
                        violations |= RuleViolations::BAD_CIRCLE;
                    }
                }
                Command::Extrude => {
                    if p[slot::EXTENT_ONE] <= 0 {
                        violations |= RuleViolations::BAD_EXTRUDE;
                    }
                    if p[slot::EXTENT_TYPE] > 0 && p[slot::EXTENT_TWO] <= 0 {
                        violations |= RuleViolations::BAD_EXTRUDE;
                    }
                    if self.policy.requires_sketch_size() && p[slot::SKETCH_SIZE] <= 0 {
                        violations |= RuleViolations::BAD_EXTRUDE;
                    }
                    if first_extrude {
                        if p[slot::BOOLEAN_OP] != NEW_BODY_OP {
                            violations |= RuleViolations::BAD_EXTRUDE;
                        }
                        first_extrude = false;
                    }
                }
                Command::StartSketch | Command::EndOfSequence | Command::Pad => {}
            }
        }

        if !any_live_param {
            violations |= RuleViolations::EMPTY_PARAMS;
        }
        violations
    }
}

/// Check a batch with the default policy and a caller-chosen length cap.
///
/// Convenience wrapper over [`TopologyChecker`]; `true` = invalid, in
/// batch order.
#[must_use]
pub fn check_batch(batch: &SequenceBatch, max_total_len: usize) -> Vec<bool> {
    TopologyChecker::new()
        .with_max_total_len(max_total_len)
        .check_batch(batch)
}

/// Summary of one checked batch.
///
/// # Example
///
/// ```
/// use trazar::topology::BatchReport;
///
/// let report = BatchReport::from_verdicts(&[false, true, false, false]);
/// assert_eq!(report.accepted(), 3);
/// assert_eq!(report.rejected(), 1);
/// assert!((report.acceptance_ratio() - 0.75).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    accepted: usize,
    rejected: usize,
}

impl BatchReport {
    /// Tally a verdict vector (`true` = rejected).
    #[must_use]
    pub fn from_verdicts(verdicts: &[bool]) -> Self {
        let rejected = verdicts.iter().filter(|&&v| v).count();
        Self {
            accepted: verdicts.len() - rejected,
            rejected,
        }
    }

    /// Sequences that passed every rule.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Sequences that violated at least one rule.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Total sequences tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.accepted + self.rejected
    }

    /// Fraction of the batch that passed; 0.0 for an empty batch.
    #[must_use]
    pub fn acceptance_ratio(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.accepted as f32 / self.total() as f32
        }
    }
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} accepted / {} rejected ({:.1}%)",
            self.accepted,
            self.rejected,
            self.acceptance_ratio() * 100.0
        )
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_checker_contract.rs"]
mod contract_tests;
