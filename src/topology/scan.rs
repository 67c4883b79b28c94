//! Per-sequence structural scan.
//!
//! One forward pass over a sequence produces the verdicts for every
//! rule that needs ordering information: extrude placement (rules 1–2),
//! sketch completeness (rule 3), termination (rules 4–5), and the
//! effective length cap (rule 12). The numeric per-command checks live
//! in the checker and need no traversal state.

use crate::cad::{Command, SequenceBatch, PAD_VAL};
use crate::topology::RuleViolations;

/// Sketch-window state while walking a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SketchState {
    /// No sketch window is open at this point.
    AwaitingSketch,
    /// A StartSketch opened a window; no primitive seen in it yet.
    OpenNoPrimitive,
    /// The open window contains at least one primitive.
    OpenHasPrimitive,
}

/// Runs the structural scan for one sequence.
///
/// The "extrude must follow a sketch" test is cumulative: once any
/// StartSketch has occurred, all later extrudes are permitted, whether
/// or not a window is currently open.
pub(crate) fn scan_sequence(
    batch: &SequenceBatch,
    seq: usize,
    max_total_len: usize,
) -> RuleViolations {
    let cmds = batch.sequence(seq);
    let mut violations = RuleViolations::NONE;

    if cmds[0] == Command::Extrude {
        violations |= RuleViolations::EXTRUDE_FIRST_TOKEN;
    }

    let mut state = SketchState::AwaitingSketch;
    let mut sketch_seen = false;
    let mut eos_at: Option<usize> = None;

    for (k, &cmd) in cmds.iter().enumerate() {
        if cmd == Command::StartSketch {
            if state == SketchState::OpenNoPrimitive {
                violations |= RuleViolations::EMPTY_SKETCH;
            }
            state = SketchState::OpenNoPrimitive;
            sketch_seen = true;
        } else if cmd.is_primitive() {
            if state == SketchState::OpenNoPrimitive {
                state = SketchState::OpenHasPrimitive;
            }
        } else {
            debug_assert!(cmd.is_boundary());
            if cmd == Command::Extrude && !sketch_seen {
                violations |= RuleViolations::EXTRUDE_BEFORE_SKETCH;
            }
            if cmd == Command::EndOfSequence && eos_at.is_none() {
                eos_at = Some(k);
            }
            if state == SketchState::OpenNoPrimitive {
                violations |= RuleViolations::EMPTY_SKETCH;
            }
            state = SketchState::AwaitingSketch;
        }
    }
    // Running off the end counts as a boundary for an open window.
    if state == SketchState::OpenNoPrimitive {
        violations |= RuleViolations::EMPTY_SKETCH;
    }

    match eos_at {
        None => violations |= RuleViolations::MISSING_EOS,
        Some(eos) => {
            // Everything strictly after the first EOS must be pad
            // command with pad parameters.
            for k in eos + 1..cmds.len() {
                let live_params =
                    batch.params().step(seq, k).iter().any(|&v| v != PAD_VAL);
                if cmds[k] != Command::Pad || live_params {
                    violations |= RuleViolations::CONTENT_AFTER_EOS;
                    break;
                }
            }
        }
    }

    for &cmd in cmds.iter().skip(max_total_len) {
        if cmd != Command::Pad {
            violations |= RuleViolations::OVER_MAX_LEN;
            break;
        }
    }

    violations
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
