//! Error types for evidencia operations.
//!
//! Every failure is surfaced to the caller immediately; nothing in the crate
//! retries or recovers locally.

use thiserror::Error;

/// Main error type for evidencia operations.
///
/// # Examples
///
/// ```
/// use evidencia::error::EvidenciaError;
///
/// let err = EvidenciaError::invalid_argument("mass", -0.5, ">= 0");
/// assert!(err.to_string().contains("Invalid argument"));
/// assert!(err.to_string().contains("-0.5"));
/// ```
#[derive(Debug, Error)]
pub enum EvidenciaError {
    /// Malformed input: negative count, out-of-range bias, mismatched
    /// domain/weight lengths, duplicate domain values.
    #[error("Invalid argument: {param} = {value}, expected {constraint}")]
    InvalidArgument {
        /// Argument name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Normalization attempted on a distribution whose total mass is zero.
    #[error("Degenerate distribution: total mass = {total}, cannot normalize")]
    DegenerateDistribution {
        /// Total mass found when normalizing
        total: f64,
    },

    /// Scenario configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EvidenciaError {
    /// Create an invalid argument error from any displayable value.
    #[must_use]
    pub fn invalid_argument(
        param: &str,
        value: impl std::fmt::Display,
        constraint: &str,
    ) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create a degenerate distribution error.
    #[must_use]
    pub fn degenerate(total: f64) -> Self {
        Self::DegenerateDistribution { total }
    }

    /// Returns true for [`EvidenciaError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true for [`EvidenciaError::DegenerateDistribution`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateDistribution { .. })
    }
}

impl From<serde_json::Error> for EvidenciaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EvidenciaError>;
