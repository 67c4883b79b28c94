//! CAD construction-sequence vocabulary and batch types.
//!
//! A sequence is a fixed-length stream of command tokens, each carrying
//! a 16-slot quantized parameter vector. The vocabulary and slot layout
//! are the wire format shared with the upstream encoder and must match
//! it exactly.

mod batch;
mod command;
mod slots;

pub use batch::SequenceBatch;
pub use command::Command;
pub use slots::{
    slot, DEFAULT_MAX_TOTAL_LEN, MAX_PARAM, NEW_BODY_OP, PAD_VAL, PARAM_WIDTH,
};
