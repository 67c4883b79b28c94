//! Per-sequence rule-violation bitmask.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// The set of rules a sequence violated, one bit per rule.
///
/// An empty set means the sequence is a valid program. The boolean
/// verdict the batch interface returns is just `!is_empty()`.
///
/// # Examples
///
/// ```
/// use trazar::topology::RuleViolations;
///
/// let v = RuleViolations::MISSING_EOS | RuleViolations::BAD_CIRCLE;
/// assert!(v.contains(RuleViolations::MISSING_EOS));
/// assert!(!v.contains(RuleViolations::BAD_LINE));
/// assert!(!v.is_empty());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct RuleViolations(u16);

impl RuleViolations {
    /// No rule fired.
    pub const NONE: Self = Self(0);
    /// Rule 1: the first time-step is an Extrude.
    pub const EXTRUDE_FIRST_TOKEN: Self = Self(1 << 0);
    /// Rule 2: an Extrude with no StartSketch anywhere earlier.
    pub const EXTRUDE_BEFORE_SKETCH: Self = Self(1 << 1);
    /// Rule 3: a StartSketch with no primitive before the next boundary.
    pub const EMPTY_SKETCH: Self = Self(1 << 2);
    /// Rule 4: no EndOfSequence token.
    pub const MISSING_EOS: Self = Self(1 << 3);
    /// Rule 5: live content after the first EndOfSequence.
    pub const CONTENT_AFTER_EOS: Self = Self(1 << 4);
    /// Rule 6: every parameter slot in the sequence is the pad sentinel.
    pub const EMPTY_PARAMS: Self = Self(1 << 5);
    /// Rule 7: an invalid Line primitive (policy-dependent).
    pub const BAD_LINE: Self = Self(1 << 6);
    /// Rule 8: a Circle with non-positive radius.
    pub const BAD_CIRCLE: Self = Self(1 << 7);
    /// Rule 9: an invalid Arc (policy-dependent).
    pub const BAD_ARC: Self = Self(1 << 8);
    /// Rule 10: bad extrude extents, sketch size, or boolean op.
    pub const BAD_EXTRUDE: Self = Self(1 << 9);
    /// Rule 11: a parameter value outside [−1, 255].
    pub const PARAM_OUT_OF_RANGE: Self = Self(1 << 10);
    /// Rule 12: a live command at or beyond the maximum length.
    pub const OVER_MAX_LEN: Self = Self(1 << 11);

    /// True when no rule fired (the sequence is valid).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every rule in `other` also fired here.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Adds the given rules to the set.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Raw bitmask, bit k = rule k+1.
    #[must_use]
    pub fn bits(self) -> u16 {
        self.0
    }
}

impl BitOr for RuleViolations {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RuleViolations {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for RuleViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "valid");
        }
        const NAMES: [(RuleViolations, &str); 12] = [
            (RuleViolations::EXTRUDE_FIRST_TOKEN, "extrude-first-token"),
            (RuleViolations::EXTRUDE_BEFORE_SKETCH, "extrude-before-sketch"),
            (RuleViolations::EMPTY_SKETCH, "empty-sketch"),
            (RuleViolations::MISSING_EOS, "missing-eos"),
            (RuleViolations::CONTENT_AFTER_EOS, "content-after-eos"),
            (RuleViolations::EMPTY_PARAMS, "empty-params"),
            (RuleViolations::BAD_LINE, "bad-line"),
            (RuleViolations::BAD_CIRCLE, "bad-circle"),
            (RuleViolations::BAD_ARC, "bad-arc"),
            (RuleViolations::BAD_EXTRUDE, "bad-extrude"),
            (RuleViolations::PARAM_OUT_OF_RANGE, "param-out-of-range"),
            (RuleViolations::OVER_MAX_LEN, "over-max-len"),
        ];
        let mut first = true;
        for (bit, name) in NAMES {
            if self.contains(bit) {
                if !first {
                    write!(f, "+")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}
