//! Quantized parameter tensor (N sequences × S steps × 16 slots).

use serde::{Deserialize, Serialize};

use crate::cad::PARAM_WIDTH;
use crate::error::{Result, TrazarError};

/// A 3D tensor of quantized parameters with fixed inner width 16.
///
/// One 16-slot parameter vector per time-step, stored contiguously in
/// row-major order. Unused slots hold the pad sentinel (−1).
///
/// # Examples
///
/// ```
/// use trazar::primitives::ParamTensor;
///
/// let t = ParamTensor::from_vec(1, 2, vec![-1; 2 * 16]).expect("length matches n * s * 16");
/// assert_eq!(t.shape(), (1, 2, 16));
/// assert_eq!(t.slot(0, 1, 4), -1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamTensor {
    data: Vec<i32>,
    n: usize,
    s: usize,
}

impl ParamTensor {
    /// Creates a tensor from a flat vector laid out as `[n][s][16]`.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match n * s * 16. A
    /// caller holding vectors of any other width fails here, never
    /// silently.
    pub fn from_vec(n: usize, s: usize, data: Vec<i32>) -> Result<Self> {
        if data.len() != n * s * PARAM_WIDTH {
            return Err(TrazarError::dimension_mismatch(
                "n * s * 16",
                n * s * PARAM_WIDTH,
                data.len(),
            ));
        }
        Ok(Self { data, n, s })
    }

    /// Returns the shape as (n, s, 16).
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n, self.s, PARAM_WIDTH)
    }

    /// Gets a single slot value.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn slot(&self, seq: usize, step: usize, slot: usize) -> i32 {
        assert!(slot < PARAM_WIDTH, "slot index out of range");
        self.data[(seq * self.s + step) * PARAM_WIDTH + slot]
    }

    /// Sets a single slot value.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, seq: usize, step: usize, slot: usize, value: i32) {
        assert!(slot < PARAM_WIDTH, "slot index out of range");
        self.data[(seq * self.s + step) * PARAM_WIDTH + slot] = value;
    }

    /// Returns one time-step's 16-slot parameter vector as a slice.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn step(&self, seq: usize, step: usize) -> &[i32] {
        let start = (seq * self.s + step) * PARAM_WIDTH;
        &self.data[start..start + PARAM_WIDTH]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }
}

#[cfg(test)]
#[path = "tensor_tests.rs"]
mod tests;
