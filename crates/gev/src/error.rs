//! Error types for the eva-gev crate.

/// Error type for all fallible operations in the eva-gev crate.
///
/// Covers configuration problems (unknown family or estimator names) and the
/// numerical failures that can occur while estimating GEV parameters.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GevError {
    /// Returned when a distribution family other than the GEV is requested.
    #[error("unsupported distribution family: {name:?} (only \"genextreme\" is supported)")]
    UnsupportedDistribution {
        /// The requested family name.
        name: String,
    },

    /// Returned when an estimation method name is not recognised.
    #[error("unknown estimation method: {name:?}")]
    UnknownEstimationMethod {
        /// The requested method name.
        name: String,
    },

    /// Returned when the input data has fewer observations than required.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the input data has zero spread.
    #[error("input data is constant (zero spread)")]
    ConstantData,

    /// Returned when an estimator produces parameters outside the valid domain.
    #[error("invalid estimate (shape={shape}, location={location}, scale={scale})")]
    InvalidEstimate {
        /// Estimated shape.
        shape: f64,
        /// Estimated location.
        location: f64,
        /// Estimated scale.
        scale: f64,
    },

    /// Returned when the likelihood optimisation fails.
    #[error("optimisation failed to converge")]
    OptimizationFailed,
}
