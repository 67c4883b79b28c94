//! Topological validity checking for sketch-then-extrude programs.
//!
//! The checker applies twelve structural and numeric rules to every
//! sequence in a batch and reports one verdict per sequence (`true` =
//! invalid). Rules are independent and all evaluated; any single
//! failure rejects the sequence.
//!
//! # Quick Start
//!
//! ```
//! use trazar::prelude::*;
//!
//! // StartSketch, Line(10,10), EndOfSequence, Pad, Pad — a minimal valid program
//! let codes = Matrix::from_vec(1, 5, vec![4, 0, 3, -1, -1])?;
//! let mut params = ParamTensor::from_vec(1, 5, vec![-1; 5 * 16])?;
//! params.set(0, 1, slot::X, 10);
//! params.set(0, 1, slot::Y, 10);
//! let batch = SequenceBatch::from_codes(&codes, params)?;
//!
//! let checker = TopologyChecker::new();
//! assert_eq!(checker.check_batch(&batch), vec![false]);
//! # Ok::<(), trazar::error::TrazarError>(())
//! ```

mod checker;
mod policy;
mod rules;
mod scan;

pub use checker::{check_batch, BatchReport, TopologyChecker};
pub use policy::CheckPolicy;
pub use rules::RuleViolations;
