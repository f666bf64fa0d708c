// Error types for the eta formatter

use thiserror::Error;

/// Main error type for the eta crate
#[derive(Error, Debug)]
pub enum EtaError {
    /// The interval was below zero
    #[error("Negative interval: {0}s")]
    NegativeInterval(f64),

    /// NaN or infinite interval
    #[error("Non-finite interval: {0}")]
    NonFiniteInterval(f64),

    /// The interval does not fit in whole seconds
    #[error("Interval out of range: {0}s")]
    IntervalOutOfRange(f64),

    #[error("No time units allowed")]
    NoUnits,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging system errors
    #[error("Logging error: {0}")]
    Log(String),

    /// I/O errors from standard library
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EtaError>;
