//! Error types for planning operations.
//!
//! Every fallible operation in the crate returns [`Result`]. Lookup
//! failures (`NotFound`) are kept distinct from computation and
//! configuration failures so callers can map them to "no such record"
//! responses.

use thiserror::Error;

/// Errors produced by scoring, matching, and scheduling.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Scoring weights are malformed (bad sum, negative, or non-finite).
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    /// A numeric parameter is outside its admissible range.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: String, message: String },

    /// A site or robot identifier is not present in the collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The scheduling run was cancelled between iterations.
    #[error("scheduling run cancelled after {considered} of {total} sites")]
    Cancelled { considered: usize, total: usize },

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Reading input or configuration files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    pub(crate) fn not_found(entity: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.into(),
        }
    }

    pub(crate) fn invalid_parameter(name: &str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// Whether this error is a lookup failure rather than a computation error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PlannerError>;
