//! Error types for the Big-O walkthrough

use thiserror::Error;

/// Core errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BigOError {
    // Input errors
    #[error("Invalid input to {function}: expected {precondition}, got {value}")]
    InvalidInput {
        function: &'static str,
        precondition: &'static str,
        value: String,
    },

    #[error("Input kind mismatch: {function} expects {expected}")]
    InputKindMismatch {
        function: &'static str,
        expected: &'static str,
    },

    // Catalog errors
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    // Measurement errors
    #[error("Measurement unavailable: {0}")]
    MeasurementUnavailable(String),

    #[error("Insufficient samples: need {needed}, got {got}")]
    InsufficientSamples { needed: usize, got: usize },
}

impl BigOError {
    /// Shorthand for a negative size handed to a size-only function
    pub(crate) fn negative_size(function: &'static str, n: i64) -> Self {
        BigOError::InvalidInput {
            function,
            precondition: "a non-negative size",
            value: n.to_string(),
        }
    }
}

/// Result type for Big-O operations
pub type BigOResult<T> = Result<T, BigOError>;
