//! Error types for TopoART operations.
//!
//! Every failure is a local precondition violation, reported before any
//! state is touched.

use crate::types::Tag;
use thiserror::Error;

/// Result type for TopoART operations.
pub type Result<T> = std::result::Result<T, TopoArtError>;

/// Errors that can occur while configuring or training a network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopoArtError {
    /// Input dimension differs from the established dimension.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Zero-length input vector.
    #[error("Input vector is empty")]
    EmptyInput,

    /// Input contains NaN or an infinity.
    #[error("Input component {index} is not finite")]
    NonFiniteInput { index: usize },

    /// Configuration rejected at construction.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A prototype with this tag is already stored.
    #[error("Duplicate prototype tag: {0}")]
    DuplicateTag(Tag),

    /// Scorer returned a score vector of the wrong length.
    #[error("Scorer returned {choice} choice and {matched} match scores for {expected} prototypes")]
    ScorerLengthMismatch {
        expected: usize,
        choice: usize,
        matched: usize,
    },
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    /// NaN or infinite parameter.
    #[error("{field} must be finite")]
    NonFinite { field: String },
    /// Invalid value.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

// Convenience constructors
impl TopoArtError {
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        TopoArtError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TopoArtError::Config(ConfigError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        })
    }
}
