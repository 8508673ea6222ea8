//! Configuration for return-value inversion.

use eva_gev::DistributionFamily;

use crate::error::ReturnError;

/// Configuration shared by the parametric and empirical inverters.
///
/// # Example
///
/// ```
/// use eva_return::InversionConfig;
///
/// let config = InversionConfig::new().with_omit_above(Some(1000.0));
/// assert_eq!(config.omit_above(), Some(1000.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InversionConfig {
    distribution: DistributionFamily,
    omit_above: Option<f64>,
}

impl InversionConfig {
    /// Creates a new configuration: GEV family, no period ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distribution family.
    pub fn with_distribution(mut self, d: DistributionFamily) -> Self {
        self.distribution = d;
        self
    }

    /// Sets the period ceiling. Computed periods strictly greater than it
    /// become NaN.
    pub fn with_omit_above(mut self, ceiling: Option<f64>) -> Self {
        self.omit_above = ceiling;
        self
    }

    /// Returns the distribution family.
    pub fn distribution(&self) -> &DistributionFamily {
        &self.distribution
    }

    /// Returns the period ceiling, if any.
    pub fn omit_above(&self) -> Option<f64> {
        self.omit_above
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReturnError::Distribution`] for an unsupported family and
    /// [`ReturnError::InvalidConfig`] for a NaN ceiling.
    pub fn validate(&self) -> Result<(), ReturnError> {
        self.distribution.ensure_supported()?;
        match self.omit_above {
            Some(v) if v.is_nan() => Err(ReturnError::InvalidConfig {
                reason: "omit_above must not be NaN".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Checks a list of return periods: non-empty, each finite and positive.
///
/// # Errors
///
/// Returns [`ReturnError::EmptyReturnValues`] or
/// [`ReturnError::InvalidReturnPeriod`] naming the first bad entry.
pub fn validate_return_periods(periods: &[f64]) -> Result<(), ReturnError> {
    if periods.is_empty() {
        return Err(ReturnError::EmptyReturnValues);
    }
    match periods
        .iter()
        .enumerate()
        .find(|(_, t)| !(t.is_finite() && **t > 0.0))
    {
        Some((index, &value)) => Err(ReturnError::InvalidReturnPeriod { index, value }),
        None => Ok(()),
    }
}

/// Checks a list of return levels: non-empty, each finite.
///
/// # Errors
///
/// Returns [`ReturnError::EmptyReturnValues`] or
/// [`ReturnError::NonFiniteReturnLevel`] naming the first bad entry.
pub fn validate_return_levels(levels: &[f64]) -> Result<(), ReturnError> {
    if levels.is_empty() {
        return Err(ReturnError::EmptyReturnValues);
    }
    match levels.iter().enumerate().find(|(_, l)| !l.is_finite()) {
        Some((index, &value)) => Err(ReturnError::NonFiniteReturnLevel { index, value }),
        None => Ok(()),
    }
}
