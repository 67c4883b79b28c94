//! Validated batches of (command, parameter) sequences.

use serde::{Deserialize, Serialize};

use crate::cad::Command;
use crate::error::{Result, TrazarError};
use crate::primitives::{Matrix, ParamTensor};

/// A batch of N fixed-length sequences: an N×S command grid paired with
/// an N×S×16 parameter tensor.
///
/// Shape agreement between the two halves is enforced at construction;
/// the checker can then index freely without re-validating. Batches are
/// immutable inputs — the checker never mutates them.
///
/// # Examples
///
/// ```
/// use trazar::cad::SequenceBatch;
/// use trazar::primitives::{Matrix, ParamTensor};
///
/// // One sequence: StartSketch, Line, EndOfSequence, Pad, Pad
/// let codes = Matrix::from_vec(1, 5, vec![4, 0, 3, -1, -1])?;
/// let params = ParamTensor::from_vec(1, 5, vec![-1; 5 * 16])?;
/// let batch = SequenceBatch::from_codes(&codes, params)?;
/// assert_eq!(batch.n_sequences(), 1);
/// assert_eq!(batch.seq_len(), 5);
/// # Ok::<(), trazar::error::TrazarError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceBatch {
    commands: Matrix<Command>,
    params: ParamTensor,
}

impl SequenceBatch {
    /// Creates a batch from typed commands and parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the two shapes disagree on N or S, or if the
    /// sequence axis is empty.
    pub fn new(commands: Matrix<Command>, params: ParamTensor) -> Result<Self> {
        let (n, s) = commands.shape();
        let (pn, ps, _) = params.shape();
        if n != pn || s != ps {
            return Err(TrazarError::DimensionMismatch {
                expected: format!("{n}x{s} commands"),
                actual: format!("{pn}x{ps} params"),
            });
        }
        if s == 0 {
            return Err(TrazarError::EmptySequenceAxis);
        }
        Ok(Self { commands, params })
    }

    /// Creates a batch from raw wire codes, decoding each command.
    ///
    /// # Errors
    ///
    /// Returns an error on shape disagreement or any code outside the
    /// closed vocabulary.
    pub fn from_codes(codes: &Matrix<i32>, params: ParamTensor) -> Result<Self> {
        let (n, s) = codes.shape();
        let decoded = codes
            .as_slice()
            .iter()
            .map(|&c| Command::from_code(c))
            .collect::<Result<Vec<Command>>>()?;
        Self::new(Matrix::from_vec(n, s, decoded)?, params)
    }

    /// Number of sequences in the batch (N).
    #[must_use]
    pub fn n_sequences(&self) -> usize {
        self.commands.n_rows()
    }

    /// Length of every sequence (S).
    #[must_use]
    pub fn seq_len(&self) -> usize {
        self.commands.n_cols()
    }

    /// The command grid.
    #[must_use]
    pub fn commands(&self) -> &Matrix<Command> {
        &self.commands
    }

    /// The parameter tensor.
    #[must_use]
    pub fn params(&self) -> &ParamTensor {
        &self.params
    }

    /// One sequence's commands as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `seq` is out of bounds.
    #[must_use]
    pub fn sequence(&self, seq: usize) -> &[Command] {
        self.commands.row(seq)
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
