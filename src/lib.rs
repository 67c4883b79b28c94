//! Trazar: structural validity checking for generated CAD construction
//! sequences in pure Rust.
//!
//! Trazar takes batches of tokenized sketch-then-extrude programs —
//! fixed-length command streams with quantized 16-slot parameter
//! vectors — and checks them against a structural grammar, returning
//! one verdict per sequence (`true` = invalid). It is a syntactic and
//! semantic grammar checker over token arrays, not a CAD kernel: no
//! geometry is constructed and no manifoldness is verified.
//!
//! # Quick Start
//!
//! ```
//! use trazar::prelude::*;
//!
//! // One sequence of five steps: StartSketch, Line(10,10), EndOfSequence, Pad, Pad
//! let codes = Matrix::from_vec(1, 5, vec![4, 0, 3, -1, -1])?;
//! let mut params = ParamTensor::from_vec(1, 5, vec![-1; 5 * 16])?;
//! params.set(0, 1, slot::X, 10);
//! params.set(0, 1, slot::Y, 10);
//! let batch = SequenceBatch::from_codes(&codes, params)?;
//!
//! let checker = TopologyChecker::new().with_max_total_len(60);
//! let verdicts = checker.check_batch(&batch);
//! assert_eq!(verdicts, vec![false]); // a valid minimal program
//! # Ok::<(), trazar::error::TrazarError>(())
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Matrix and ParamTensor containers
//! - [`cad`]: command vocabulary, parameter-slot layout, sequence batches
//! - [`topology`]: the validity rules and the batched checker
//! - [`error`]: error types for contract violations

pub mod cad;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod topology;

pub use cad::{Command, SequenceBatch};
pub use error::{Result, TrazarError};
pub use topology::{
    check_batch, BatchReport, CheckPolicy, RuleViolations, TopologyChecker,
};
