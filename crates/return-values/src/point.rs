//! Parametric inversion at a single location.

use eva_gev::GevParams;
use statrs::distribution::ContinuousCDF;

use crate::config::{InversionConfig, validate_return_levels, validate_return_periods};
use crate::error::ReturnError;

/// Exceedance probabilities with magnitude at or below this are treated as
/// zero, which makes the corresponding return period undefined (NaN).
///
pub const ZERO_TOLERANCE: f64 = 1e-8;

/// Return levels for `periods` from one location's fitted parameters.
///
/// `params` is read as `[shape, location, scale, ..]`; extra entries such as
/// the p-value are ignored. The level for period `T` is the inverse survival
/// function at `1 / T`. Output order follows `periods`.
///
/// If `params` has fewer than three entries or they are not a valid
/// parameter set (for example NaN from a failed fit) every level is NaN.
///
/// # Errors
///
/// Returns [`ReturnError`] for an invalid config or period list.
///
/// # Example
///
/// ```
/// use eva_return::{InversionConfig, return_levels_point};
///
/// let config = InversionConfig::new();
/// let levels = return_levels_point(&[0.0, 0.0, 1.0], &[2.0, 100.0], &config).unwrap();
/// assert!(levels[0] < levels[1]);
/// ```
pub fn return_levels_point(
    params: &[f64],
    periods: &[f64],
    config: &InversionConfig,
) -> Result<Vec<f64>, ReturnError> {
    config.validate()?;
    validate_return_periods(periods)?;
    let params = GevParams::from_slice(params);
    Ok(periods.iter().map(|&t| level_for_period(params, t)).collect())
}

/// Return periods for `levels` from one location's fitted parameters.
///
/// The period for level `L` is `1 / (1 - F(L))`. It is NaN when the
/// exceedance probability is within [`ZERO_TOLERANCE`] of zero, and NaN when
/// it is strictly greater than the config's `omit_above` ceiling. Invalid
/// parameters give all NaN, as in [`return_levels_point`].
///
/// # Errors
///
/// Returns [`ReturnError`] for an invalid config or level list.
pub fn return_periods_point(
    params: &[f64],
    levels: &[f64],
    config: &InversionConfig,
) -> Result<Vec<f64>, ReturnError> {
    config.validate()?;
    validate_return_levels(levels)?;
    let params = GevParams::from_slice(params);
    Ok(levels
        .iter()
        .map(|&l| period_for_level(params, l, config.omit_above()))
        .collect())
}

pub(crate) fn level_for_period(params: Option<GevParams>, period: f64) -> f64 {
    match params {
        Some(p) => p.distribution().isf(1.0 / period),
        None => f64::NAN,
    }
}

pub(crate) fn period_for_level(
    params: Option<GevParams>,
    level: f64,
    omit_above: Option<f64>,
) -> f64 {
    match params {
        Some(p) => period_from_exceedance(p.distribution().sf(level), omit_above),
        None => f64::NAN,
    }
}

/// `1 / p`, or NaN when `p` is numerically zero or the period is above the
/// ceiling.
fn period_from_exceedance(p: f64, omit_above: Option<f64>) -> f64 {
    if p.is_nan() || p.abs() <= ZERO_TOLERANCE {
        return f64::NAN;
    }
    let period = 1.0 / p;
    match omit_above {
        Some(ceiling) if period > ceiling => f64::NAN,
        _ => period,
    }
}
