//! Error types for the statevector engine, gate library and algorithms.

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, QuantumError>;

/// Errors raised by engine, gate and algorithm operations.
///
/// Every failure is immediate: no operation produces a partial result.
#[derive(Error, Debug)]
pub enum QuantumError {
    /// Operator and state (or two states) have incompatible sizes.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A gate builder received a matrix of the wrong shape.
    #[error("invalid gate shape: expected 2x2 matrix, got {rows}x{cols}")]
    InvalidGateShape { rows: usize, cols: usize },

    /// Normalizing a vector whose norm is zero or not finite.
    #[error("cannot normalize a state with zero or non-finite norm")]
    DegenerateNormalization,

    #[error("basis index {index} out of range for dimension {dimension}")]
    BasisIndexOutOfRange { index: usize, dimension: usize },

    #[error("tensor product requires at least one state")]
    EmptyTensor,

    #[error("invalid qubit count: {0}")]
    InvalidQubitCount(String),

    /// A classical function returned something other than 0 or 1.
    #[error("classical function returned {output} for input {input}, expected 0 or 1")]
    InvalidClassicalOutput { input: usize, output: u8 },

    #[error("invalid bitstring: {0}")]
    InvalidBitstring(String),

    #[error("cannot sample from an empty, zero-weight or negative distribution")]
    EmptyDistribution,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl QuantumError {
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    pub fn qubit_count(msg: impl Into<String>) -> Self {
        Self::InvalidQubitCount(msg.into())
    }
}
