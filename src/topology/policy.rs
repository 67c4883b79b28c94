//! Rule-set policies.

use serde::{Deserialize, Serialize};

/// Which of the two supported rule-set variants to apply.
///
/// The variants differ in how Line, Arc, and Extrude parameters are
/// judged; they encode different modeling assumptions and are never
/// merged. A deployment picks exactly one.
///
/// | Rule | `RangeBased` | `Parametric` |
/// |---|---|---|
/// | Line | endpoint x/y must not be the pad sentinel | endpoint must differ from the reference point (no zero-length lines) |
/// | Arc | sweep angle (slot 2) must be > 0 | end angle (slot 4) must exceed start angle (slot 3) |
/// | Extrude | sketch size (slot 11) must be > 0 | sketch-size check omitted |
///
/// All other rules are shared between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckPolicy {
    /// Presence/orientation checks on raw quantized values (the
    /// default).
    #[default]
    RangeBased,
    /// Degeneracy checks on the parametric form of each primitive.
    Parametric,
}

impl CheckPolicy {
    /// True when this policy requires sketch size > 0 on extrudes.
    #[must_use]
    pub fn requires_sketch_size(self) -> bool {
        matches!(self, CheckPolicy::RangeBased)
    }
}
