//! Error types for the volatility-breaks library.

use thiserror::Error;

/// Result type alias for break-detection operations.
pub type Result<T> = std::result::Result<T, BreakError>;

/// Errors that can occur during break detection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BreakError {
    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A price is zero, negative, or not finite.
    #[error("non-positive price {price} at index {index}")]
    NonPositivePrice { index: usize, price: f64 },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested segmentation cannot fit within the signal.
    #[error(
        "infeasible configuration: {n_breaks} breaks with minimum segment size \
         {min_segment_size} cannot partition a signal of length {signal_len}"
    )]
    InfeasibleConfig {
        n_breaks: usize,
        min_segment_size: usize,
        signal_len: usize,
    },

    /// Computation error (e.g., a violated internal invariant).
    #[error("computation error: {0}")]
    ComputationError(String),
}
