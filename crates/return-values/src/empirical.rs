//! Distribution-free return periods from exceedance counts.

use crate::config::{InversionConfig, validate_return_levels};
use crate::error::ReturnError;
use crate::point::ZERO_TOLERANCE;

/// Empirical return periods of `levels` in one location's raw series.
///
/// For each level the period is `n / k`, where `n` is the number of valid
/// (finite) samples and `k` the number of those at or above the level. A
/// level that is never reached gives NaN rather than infinity, using the same
/// zero tolerance as the parametric inverter. The config's `omit_above`
/// ceiling applies as well.
///
/// # Errors
///
/// Returns [`ReturnError`] for an invalid config or level list.
///
/// # Example
///
/// ```
/// use eva_return::{InversionConfig, empirical_periods_point};
///
/// let series = [1.0, 2.0, 3.0, 4.0, f64::NAN];
/// let config = InversionConfig::new();
/// let periods = empirical_periods_point(&series, &[3.0, 9.0], &config).unwrap();
/// assert_eq!(periods[0], 2.0);
/// assert!(periods[1].is_nan());
/// ```
pub fn empirical_periods_point(
    series: &[f64],
    levels: &[f64],
    config: &InversionConfig,
) -> Result<Vec<f64>, ReturnError> {
    config.validate()?;
    validate_return_levels(levels)?;
    Ok(empirical_periods(series.iter().copied(), levels, config.omit_above()))
}

pub(crate) fn empirical_periods<I>(series: I, levels: &[f64], omit_above: Option<f64>) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let samples: Vec<f64> = series.into_iter().filter(|x| x.is_finite()).collect();
    if samples.is_empty() {
        return vec![f64::NAN; levels.len()];
    }
    let n = samples.len() as f64;
    levels
        .iter()
        .map(|&level| {
            let exceedances = samples.iter().filter(|&&x| x >= level).count();
            period_from_count(n, exceedances as f64, omit_above)
        })
        .collect()
}

/// `n / k`, computed directly so a period equal to the ceiling is kept.
fn period_from_count(n: f64, k: f64, omit_above: Option<f64>) -> f64 {
    if k <= ZERO_TOLERANCE {
        return f64::NAN;
    }
    let period = n / k;
    match omit_above {
        Some(ceiling) if period > ceiling => f64::NAN,
        _ => period,
    }
}
