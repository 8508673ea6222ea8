//! Error types for the eva-return crate.

use eva_gev::GevError;

/// Error type for the inversion entry points.
///
/// Raised at call time for malformed requests. Per-location problems, such
/// as a missing fit or a period that cannot be computed, become NaN instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReturnError {
    /// Returned when the distribution family is not usable.
    #[error(transparent)]
    Distribution(#[from] GevError),

    /// Returned when no return periods or levels were requested.
    #[error("no return values requested")]
    EmptyReturnValues,

    /// Returned when a return period is not finite and positive.
    #[error("invalid return period at index {index}: {value} (must be finite and > 0)")]
    InvalidReturnPeriod {
        /// Position in the requested list.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a return level is not finite.
    #[error("invalid return level at index {index}: {value} (must be finite)")]
    NonFiniteReturnLevel {
        /// Position in the requested list.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a parameter grid has fewer than three entries on axis 0.
    #[error("parameter grid axis 0 has length {got}, need at least 3")]
    ParameterAxis {
        /// Axis-0 length of the supplied grid.
        got: usize,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
