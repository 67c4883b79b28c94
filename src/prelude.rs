//! Prelude for convenient imports of primary API types.
//!
//! ```
//! use trazar::prelude::*;
//! ```

pub use crate::cad::{slot, Command, SequenceBatch, DEFAULT_MAX_TOTAL_LEN, PAD_VAL};
pub use crate::error::{Result, TrazarError};
pub use crate::primitives::{Matrix, ParamTensor};
pub use crate::topology::{
    check_batch, BatchReport, CheckPolicy, RuleViolations, TopologyChecker,
};
