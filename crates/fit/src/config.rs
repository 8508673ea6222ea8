//! Configuration for GEV fitting.

use eva_gev::{DistributionFamily, EstimationMethod};

use crate::error::FitError;

/// Configuration for per-location and block-wise fitting.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use eva_fit::FitConfig;
///
/// let config = FitConfig::new()
///     .with_zscore_to_remove(Some(3.0))
///     .with_minimum_points(30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    distribution: DistributionFamily,
    zscore_to_remove: Option<f64>,
    minimum_points: usize,
    estimation_method: EstimationMethod,
}

impl FitConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `distribution = GenExtreme`, `zscore_to_remove = None`,
    /// `minimum_points = 100`, `estimation_method = Mle`.
    pub fn new() -> Self {
        Self {
            distribution: DistributionFamily::GenExtreme,
            zscore_to_remove: None,
            minimum_points: 100,
            estimation_method: EstimationMethod::Mle,
        }
    }

    // --- Builder methods ---

    /// Sets the distribution family.
    pub fn with_distribution(mut self, d: DistributionFamily) -> Self {
        self.distribution = d;
        self
    }

    /// Sets the absolute z-score above which samples are discarded.
    /// `None` disables outlier rejection.
    pub fn with_zscore_to_remove(mut self, z: Option<f64>) -> Self {
        self.zscore_to_remove = z;
        self
    }

    /// Sets the sample count at or below which a location is left missing.
    pub fn with_minimum_points(mut self, n: usize) -> Self {
        self.minimum_points = n;
        self
    }

    /// Sets the parameter estimation method.
    pub fn with_estimation_method(mut self, m: EstimationMethod) -> Self {
        self.estimation_method = m;
        self
    }

    // --- Accessors ---

    /// Returns the distribution family.
    pub fn distribution(&self) -> &DistributionFamily {
        &self.distribution
    }

    /// Returns the z-score rejection threshold, if any.
    pub fn zscore_to_remove(&self) -> Option<f64> {
        self.zscore_to_remove
    }

    /// Returns the minimum sample count.
    pub fn minimum_points(&self) -> usize {
        self.minimum_points
    }

    /// Returns the parameter estimation method.
    pub fn estimation_method(&self) -> EstimationMethod {
        self.estimation_method
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::Distribution`] for an unsupported family and
    /// [`FitError::InvalidConfig`] for a non-positive or non-finite z-score
    /// threshold.
    pub fn validate(&self) -> Result<(), FitError> {
        self.distribution.ensure_supported()?;
        match self.zscore_to_remove {
            Some(z) if !z.is_finite() || z <= 0.0 => Err(FitError::InvalidConfig {
                reason: format!("zscore_to_remove must be finite and positive, got {z}"),
            }),
            _ => Ok(()),
        }
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}
