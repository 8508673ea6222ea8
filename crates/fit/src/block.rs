//! Fitting every location of a spatial block.

use ndarray::{Array3, ArrayView3, Axis, Zip};
use tracing::debug;

use crate::config::FitConfig;
use crate::error::FitError;
use crate::point::fit_samples;
use crate::result::FIT_PARAMETER_COUNT;

/// Fits a GEV independently at every location of a `(time, row, col)` block.
///
/// The block must hold the complete time axis of every location. The result
/// is a freshly allocated `(4, row, col)` parameter grid whose axis 0 is
/// `[shape, location, scale, p_value]`; entry `(.., r, c)` always describes
/// the series at `(.., r, c)` of the input. Locations that cannot be fitted
/// are NaN.
///
/// The function is pure: the same block and config always give bit-identical
/// output.
///
/// # Errors
///
/// Returns [`FitError`] for an invalid configuration, before any location is
/// processed.
#[tracing::instrument(
    skip_all,
    fields(
        n_time = block.len_of(Axis(0)),
        n_rows = block.len_of(Axis(1)),
        n_cols = block.len_of(Axis(2))
    )
)]
pub fn fit_block(block: ArrayView3<'_, f64>, config: &FitConfig) -> Result<Array3<f64>, FitError> {
    config.validate()?;

    let (_, n_rows, n_cols) = block.dim();
    let mut out = Array3::from_elem((FIT_PARAMETER_COUNT, n_rows, n_cols), f64::NAN);
    let mut n_missing = 0usize;

    Zip::from(out.lanes_mut(Axis(0)))
        .and(block.lanes(Axis(0)))
        .for_each(|mut params, series| {
            let result = fit_samples(series.iter().copied(), config);
            if result.is_missing() {
                n_missing += 1;
            }
            for (dst, v) in params.iter_mut().zip(result.to_array()) {
                *dst = v;
            }
        });

    debug!(n_locations = n_rows * n_cols, n_missing, "block fitted");
    Ok(out)
}
