//! Inversion over every location of a spatial block.

use eva_gev::{GevParams, N_PARAMS};
use ndarray::{Array3, ArrayView1, ArrayView3, ArrayViewMut1, Axis, Zip};
use tracing::debug;

use crate::config::{InversionConfig, validate_return_levels, validate_return_periods};
use crate::empirical::empirical_periods;
use crate::error::ReturnError;
use crate::point::{level_for_period, period_for_level};

/// Return levels at every location of a `(param, row, col)` grid.
///
/// Axis 0 of `params` must hold at least `[shape, location, scale]`; a
/// fourth p-value entry is ignored. The result has shape
/// `(periods.len(), row, col)` with axis 0 in the order of `periods`.
/// Locations whose parameters are missing or invalid are NaN throughout.
///
/// # Errors
///
/// Returns [`ReturnError`] for an invalid config, period list or parameter
/// axis, before any location is processed.
#[tracing::instrument(skip_all, fields(n_periods = periods.len(), shape = ?params.dim()))]
pub fn return_levels_block(
    params: ArrayView3<'_, f64>,
    periods: &[f64],
    config: &InversionConfig,
) -> Result<Array3<f64>, ReturnError> {
    config.validate()?;
    validate_return_periods(periods)?;
    check_param_axis(&params)?;

    Ok(invert(params, periods.len(), |p, mut out| {
        for (dst, &t) in out.iter_mut().zip(periods) {
            *dst = level_for_period(Some(p), t);
        }
    }))
}

/// Return periods at every location of a `(param, row, col)` grid.
///
/// Same layout rules as [`return_levels_block`], with `levels` on axis 0 of
/// the result. Periods follow [`crate::return_periods_point`]: NaN where the
/// exceedance probability is numerically zero or the period exceeds
/// `omit_above`.
///
/// # Errors
///
/// Returns [`ReturnError`] for an invalid config, level list or parameter
/// axis, before any location is processed.
#[tracing::instrument(skip_all, fields(n_levels = levels.len(), shape = ?params.dim()))]
pub fn return_periods_block(
    params: ArrayView3<'_, f64>,
    levels: &[f64],
    config: &InversionConfig,
) -> Result<Array3<f64>, ReturnError> {
    config.validate()?;
    validate_return_levels(levels)?;
    check_param_axis(&params)?;

    let omit_above = config.omit_above();
    Ok(invert(params, levels.len(), |p, mut out| {
        for (dst, &l) in out.iter_mut().zip(levels) {
            *dst = period_for_level(Some(p), l, omit_above);
        }
    }))
}

/// Empirical return periods at every location of a raw `(time, row, col)`
/// block.
///
/// The block must hold the complete time axis of every location. The result
/// has shape `(levels.len(), row, col)`; see
/// [`crate::empirical_periods_point`] for the per-location rule.
///
/// # Errors
///
/// Returns [`ReturnError`] for an invalid config or level list.
#[tracing::instrument(skip_all, fields(n_levels = levels.len(), shape = ?block.dim()))]
pub fn empirical_periods_block(
    block: ArrayView3<'_, f64>,
    levels: &[f64],
    config: &InversionConfig,
) -> Result<Array3<f64>, ReturnError> {
    config.validate()?;
    validate_return_levels(levels)?;

    let (_, n_rows, n_cols) = block.dim();
    let mut out = Array3::from_elem((levels.len(), n_rows, n_cols), f64::NAN);
    let omit_above = config.omit_above();

    Zip::from(out.lanes_mut(Axis(0)))
        .and(block.lanes(Axis(0)))
        .for_each(|mut dst, series| {
            let periods = empirical_periods(series.iter().copied(), levels, omit_above);
            for (d, v) in dst.iter_mut().zip(periods) {
                *d = v;
            }
        });

    let n_missing = out.iter().filter(|v| v.is_nan()).count();
    debug!(n_values = out.len(), n_missing, "empirical periods computed");
    Ok(out)
}

fn check_param_axis(params: &ArrayView3<'_, f64>) -> Result<(), ReturnError> {
    let got = params.len_of(Axis(0));
    if got < N_PARAMS {
        return Err(ReturnError::ParameterAxis { got });
    }
    Ok(())
}

/// Runs `fill` at every location with valid parameters, leaving the rest NaN.
fn invert<F>(params: ArrayView3<'_, f64>, n_out: usize, fill: F) -> Array3<f64>
where
    F: Fn(GevParams, ArrayViewMut1<'_, f64>),
{
    let (_, n_rows, n_cols) = params.dim();
    let mut out = Array3::from_elem((n_out, n_rows, n_cols), f64::NAN);
    let mut n_missing = 0usize;

    Zip::from(out.lanes_mut(Axis(0)))
        .and(params.lanes(Axis(0)))
        .for_each(|dst, lane| match read_params(lane) {
            Some(p) => fill(p, dst),
            None => n_missing += 1,
        });

    debug!(n_locations = n_rows * n_cols, n_missing, "block inverted");
    out
}

fn read_params(lane: ArrayView1<'_, f64>) -> Option<GevParams> {
    GevParams::new(lane[0], lane[1], lane[2])
}
