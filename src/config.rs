//! TOML configuration file layout.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Top-level configuration file.
///
/// Every table is optional; missing tables and keys take the kernel
/// defaults.
///
/// ```toml
/// [fit]
/// distribution = "genextreme"
/// zscore_to_remove = 3.0
/// minimum_points = 30
/// estimation_method = "mle"
///
/// [inversion]
/// omit_above = 1000.0
/// return_periods = [2, 10, 50, 100]
/// return_levels = [25.0, 30.0]
///
/// [grid]
/// chunk_rows = 25
/// chunk_cols = 25
/// n_workers = 4
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaConfig {
    /// Fitting settings.
    #[serde(default)]
    pub fit: FitToml,

    /// Return-level and return-period settings.
    #[serde(default)]
    pub inversion: InversionToml,

    /// Block dispatch settings.
    #[serde(default)]
    pub grid: GridToml,
}

impl EvaConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            n_return_periods = config.inversion.return_periods.len(),
            n_return_levels = config.inversion.return_levels.len(),
            "loaded configuration"
        );
        Ok(config)
    }
}

/// `[fit]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    #[serde(default = "default_distribution")]
    pub distribution: String,
    #[serde(default)]
    pub zscore_to_remove: Option<f64>,
    #[serde(default = "default_minimum_points")]
    pub minimum_points: usize,
    #[serde(default = "default_estimation_method")]
    pub estimation_method: String,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            distribution: default_distribution(),
            zscore_to_remove: None,
            minimum_points: default_minimum_points(),
            estimation_method: default_estimation_method(),
        }
    }
}

/// `[inversion]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InversionToml {
    #[serde(default = "default_distribution")]
    pub distribution: String,
    #[serde(default)]
    pub omit_above: Option<f64>,
    #[serde(default)]
    pub return_periods: Vec<f64>,
    #[serde(default)]
    pub return_levels: Vec<f64>,
}

impl Default for InversionToml {
    fn default() -> Self {
        Self {
            distribution: default_distribution(),
            omit_above: None,
            return_periods: Vec::new(),
            return_levels: Vec::new(),
        }
    }
}

/// `[grid]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    #[serde(default = "default_chunk")]
    pub chunk_rows: usize,
    #[serde(default = "default_chunk")]
    pub chunk_cols: usize,
    #[serde(default)]
    pub n_workers: Option<usize>,
}

impl Default for GridToml {
    fn default() -> Self {
        Self {
            chunk_rows: default_chunk(),
            chunk_cols: default_chunk(),
            n_workers: None,
        }
    }
}

fn default_distribution() -> String {
    "genextreme".to_string()
}
fn default_minimum_points() -> usize {
    100
}
fn default_estimation_method() -> String {
    "mle".to_string()
}
fn default_chunk() -> usize {
    25
}
