//! Error types for frame-alignment operations.

use thiserror::Error;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur during frame alignment.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Axis vector has zero or near-zero length.
    #[error("degenerate axis: length {length:e} is below {min_length:e}")]
    DegenerateAxis {
        /// Length of the supplied axis vector.
        length: f64,
        /// Minimum accepted length.
        min_length: f64,
    },

    /// Axis vector contains a non-finite component.
    #[error("axis has a non-finite component")]
    NonFiniteAxis,
}
