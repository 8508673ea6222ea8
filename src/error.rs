//! Error type for configuration loading and conversion.

use std::path::PathBuf;

use eva_fit::FitError;
use eva_gev::GevError;
use eva_grid::GridError;
use eva_return::ReturnError;

/// Error type for reading a configuration file and turning it into kernel
/// configs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the configuration file cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned for malformed TOML or unknown keys.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Returned for an unknown estimation method name.
    #[error(transparent)]
    Gev(#[from] GevError),

    /// Returned for an invalid `[fit]` table.
    #[error(transparent)]
    Fit(#[from] FitError),

    /// Returned for an invalid `[inversion]` table.
    #[error(transparent)]
    Return(#[from] ReturnError),

    /// Returned for an invalid `[grid]` table.
    #[error(transparent)]
    Grid(#[from] GridError),
}
