//! Error types for sampling and reconstruction.

use thiserror::Error;

/// Errors that can occur while building curves, samples or verdicts.
#[derive(Debug, Error)]
pub enum NyquistError {
    /// A frequency, window, step or increment was zero, negative or not finite.
    #[error("invalid {name}: {value} (must be finite and greater than 0)")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A grid would hold more instants than [`MAX_GRID_INSTANTS`](crate::MAX_GRID_INSTANTS).
    #[error("grid of {instants} instants exceeds the limit of {max}")]
    GridTooLarge { instants: f64, max: usize },

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[cfg(feature = "config")]
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[cfg(feature = "config")]
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for sampling operations.
pub type NyquistResult<T> = Result<T, NyquistError>;

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> NyquistResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(NyquistError::InvalidParameter { name, value })
    }
}
