//! Core data containers (Matrix, ParamTensor).
//!
//! These types carry the token and parameter arrays the checker
//! consumes. Storage is plain row-major `Vec`s; all shape checking
//! happens at construction.

mod matrix;
mod tensor;

pub use matrix::Matrix;
pub use tensor::ParamTensor;
