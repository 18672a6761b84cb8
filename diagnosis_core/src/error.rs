//! Error types for the diagnosis_core library.

use crate::Disease;
use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for diagnosis_core operations
///
/// Every variant is fatal to the submission that raised it. Nothing here is
/// transient, so callers never retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Categorical value outside the admitted label set
    #[error("Invalid value {value:?} for {field}")]
    InvalidCategory { field: &'static str, value: String },

    /// Value outside a transform's valid domain
    #[error("Value {value} for {field} is outside the log1p domain (must be > -1)")]
    NumericDomain { field: &'static str, value: f64 },

    /// Encoded vector length differs from the model's expected input length
    #[error("{disease} model expects {expected} features, got {actual}")]
    ShapeMismatch {
        disease: Disease,
        expected: usize,
        actual: usize,
    },

    /// Model artifact failed to load at startup
    #[error("{disease} model unavailable at {path:?}: {reason}")]
    ModelUnavailable {
        disease: Disease,
        path: PathBuf,
        reason: String,
    },

    /// Form value outside the range the input collector admits
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Classifier returned something other than 0 or 1
    #[error("{disease} model returned class {class}, expected 0 or 1")]
    InvalidModelOutput { disease: Disease, class: u8 },

    /// A batch row failed; row numbers are 1-based
    #[error("Row {row}: {source}")]
    Batch {
        row: usize,
        #[source]
        source: Box<Error>,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
