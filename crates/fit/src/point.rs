//! Fitting a single location.

use statrs::distribution::ContinuousCDF;
use tracing::trace;

use crate::config::FitConfig;
use crate::error::FitError;
use crate::outliers::remove_outliers;
use crate::result::FitResult;

/// Fits a GEV to one location's time series.
///
/// NaN and infinite values are treated as missing. The steps are:
///
/// 1. Drop missing values
/// 2. Leave the location missing when `minimum_points` or fewer remain
/// 3. Drop samples whose absolute z-score exceeds `zscore_to_remove`
/// 4. Estimate the parameters (a failed estimate leaves the location missing)
/// 5. Score the fit with a one-sample Kolmogorov-Smirnov test
///
/// # Errors
///
/// Returns [`FitError`] only for an invalid configuration. Data problems
/// produce [`FitResult::missing`].
///
/// # Example
///
/// ```
/// use eva_fit::{FitConfig, fit_point};
///
/// let series = [f64::NAN, 1.0, 2.0];
/// let result = fit_point(&series, &FitConfig::new()).unwrap();
/// assert!(result.is_missing());
/// ```
pub fn fit_point(series: &[f64], config: &FitConfig) -> Result<FitResult, FitError> {
    config.validate()?;
    Ok(fit_samples(series.iter().copied(), config))
}

/// Fits the valid entries of `series` under an already validated config.
pub(crate) fn fit_samples<I>(series: I, config: &FitConfig) -> FitResult
where
    I: IntoIterator<Item = f64>,
{
    // 1. Missing values
    let mut samples: Vec<f64> = series.into_iter().filter(|x| x.is_finite()).collect();

    // 2. Sample count
    if samples.len() <= config.minimum_points() {
        trace!(
            n = samples.len(),
            minimum = config.minimum_points(),
            "too few samples"
        );
        return FitResult::missing();
    }

    // 3. Outliers
    if let Some(threshold) = config.zscore_to_remove() {
        samples = remove_outliers(&samples, threshold);
    }

    // 4. Estimate
    let params = match eva_gev::estimate(&samples, config.estimation_method()) {
        Ok(p) => p,
        Err(e) => {
            trace!(error = %e, n = samples.len(), "estimation failed");
            return FitResult::missing();
        }
    };

    // 5. Goodness of fit
    let dist = params.distribution();
    let p_value = eva_stats::ks_test(&samples, |x| dist.cdf(x))
        .map_or(f64::NAN, |ks| ks.p_value());

    FitResult::new(params, p_value)
}
