//! Error types for frequency-stability analysis
//!
//! Provides a unified error type for all stability-stats crates.

use thiserror::Error;

/// Core error type for stability analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a non-positive sample rate
    pub fn invalid_rate(rate: f64) -> Self {
        Self::InvalidParameter(format!("Sample rate {rate} must be positive"))
    }

    /// Create an error for a non-positive averaging time
    pub fn invalid_tau(tau: f64) -> Self {
        Self::InvalidParameter(format!("Averaging time {tau} must be positive"))
    }
}
