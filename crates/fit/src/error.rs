//! Error types for the eva-fit crate.

use eva_gev::GevError;

/// Error type for the fitting entry points.
///
/// Only structural problems are reported here. A location that cannot be
/// fitted is not an error: it comes back as missing values.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FitError {
    /// Returned when the distribution family or estimator is not usable.
    #[error(transparent)]
    Distribution(#[from] GevError),

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_config() {
        let e = FitError::InvalidConfig {
            reason: "zscore_to_remove must be finite and positive, got 0".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: zscore_to_remove must be finite and positive, got 0"
        );
    }

    #[test]
    fn error_from_gev_is_transparent() {
        let e: FitError = GevError::UnsupportedDistribution {
            name: "gamma".to_string(),
        }
        .into();
        assert_eq!(
            e.to_string(),
            "unsupported distribution family: \"gamma\" (only \"genextreme\" is supported)"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<FitError>();
    }
}
