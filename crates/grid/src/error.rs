//! Error types for the eva-grid crate.

use eva_fit::FitError;
use eva_return::ReturnError;

/// Error type for grid dispatch.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    /// Returned when the fitting kernel rejects its configuration.
    #[error(transparent)]
    Fit(#[from] FitError),

    /// Returned when an inversion kernel rejects its request.
    #[error(transparent)]
    Return(#[from] ReturnError),

    /// Returned when a grid configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the worker pool cannot be built.
    #[error("failed to build worker pool: {reason}")]
    ThreadPool {
        /// Message from the pool builder.
        reason: String,
    },

    /// Returned when a kernel returns a block of the wrong shape.
    #[error("kernel returned block of shape {got:?}, expected {expected:?}")]
    BlockShape {
        /// Shape the window requires.
        expected: (usize, usize, usize),
        /// Shape the kernel produced.
        got: (usize, usize, usize),
    },
}
