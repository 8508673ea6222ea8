//! Grid-level fitting and inversion.
//!
//! Each entry point validates its request up front, then maps the matching
//! block kernel over the grid with [`map_blocks`].

use eva_fit::{FIT_PARAMETER_COUNT, FitConfig, fit_block};
use eva_gev::N_PARAMS;
use eva_return::{
    InversionConfig, ReturnError, empirical_periods_block, return_levels_block,
    return_periods_block, validate_return_levels, validate_return_periods,
};
use ndarray::{Array3, ArrayView3, Axis};

use crate::config::GridConfig;
use crate::dispatch::map_blocks;
use crate::error::GridError;

/// Fits a GEV at every location of a `(time, row, col)` grid.
///
/// Returns the `(4, row, col)` parameter grid
/// `[shape, location, scale, p_value]`.
///
/// # Errors
///
/// Returns [`GridError`] for an invalid fit or grid configuration.
pub fn fit_grid(
    data: ArrayView3<'_, f64>,
    fit: &FitConfig,
    grid: &GridConfig,
) -> Result<Array3<f64>, GridError> {
    fit.validate()?;
    grid.validate()?;
    map_blocks(data, FIT_PARAMETER_COUNT, grid, |block| fit_block(block, fit))
}

/// Return levels for `periods` at every location of a parameter grid.
///
/// # Errors
///
/// Returns [`GridError`] for an invalid request or configuration.
pub fn return_levels_grid(
    params: ArrayView3<'_, f64>,
    periods: &[f64],
    inversion: &InversionConfig,
    grid: &GridConfig,
) -> Result<Array3<f64>, GridError> {
    inversion.validate()?;
    validate_return_periods(periods)?;
    check_param_axis(&params)?;
    grid.validate()?;
    map_blocks(params, periods.len(), grid, |block| {
        return_levels_block(block, periods, inversion)
    })
}

/// Return periods for `levels` at every location of a parameter grid.
///
/// # Errors
///
/// Returns [`GridError`] for an invalid request or configuration.
pub fn return_periods_grid(
    params: ArrayView3<'_, f64>,
    levels: &[f64],
    inversion: &InversionConfig,
    grid: &GridConfig,
) -> Result<Array3<f64>, GridError> {
    inversion.validate()?;
    validate_return_levels(levels)?;
    check_param_axis(&params)?;
    grid.validate()?;
    map_blocks(params, levels.len(), grid, |block| {
        return_periods_block(block, levels, inversion)
    })
}

/// Empirical return periods for `levels` at every location of a raw
/// `(time, row, col)` grid.
///
/// # Errors
///
/// Returns [`GridError`] for an invalid request or configuration.
pub fn empirical_periods_grid(
    data: ArrayView3<'_, f64>,
    levels: &[f64],
    inversion: &InversionConfig,
    grid: &GridConfig,
) -> Result<Array3<f64>, GridError> {
    inversion.validate()?;
    validate_return_levels(levels)?;
    grid.validate()?;
    map_blocks(data, levels.len(), grid, |block| {
        empirical_periods_block(block, levels, inversion)
    })
}

fn check_param_axis(params: &ArrayView3<'_, f64>) -> Result<(), ReturnError> {
    let got = params.len_of(Axis(0));
    if got < N_PARAMS {
        return Err(ReturnError::ParameterAxis { got });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_raised_on_empty_grid() {
        // No block would ever run, so these must be caught up front.
        let empty = Array3::<f64>::zeros((3, 0, 0));
        let grid = GridConfig::new();
        let inversion = InversionConfig::new();
        assert!(return_levels_grid(empty.view(), &[], &inversion, &grid).is_err());
        assert!(return_periods_grid(empty.view(), &[f64::NAN], &inversion, &grid).is_err());

        let unsupported = FitConfig::new().with_distribution("expon".parse().unwrap());
        assert!(matches!(
            fit_grid(empty.view(), &unsupported, &grid),
            Err(GridError::Fit(_))
        ));
    }

    #[test]
    fn short_parameter_axis() {
        let params = Array3::<f64>::zeros((2, 3, 3));
        let r = return_levels_grid(
            params.view(),
            &[10.0],
            &InversionConfig::new(),
            &GridConfig::new(),
        );
        assert!(matches!(
            r,
            Err(GridError::Return(ReturnError::ParameterAxis { got: 2 }))
        ));
    }

    #[test]
    fn empirical_grid_shape() {
        let data = Array3::from_shape_fn((20, 5, 4), |(t, _, _)| t as f64);
        let grid = GridConfig::new().with_chunks(2, 3);
        let out =
            empirical_periods_grid(data.view(), &[10.0, 15.0], &InversionConfig::new(), &grid)
                .unwrap();
        assert_eq!(out.dim(), (2, 5, 4));
        assert!(out.index_axis(Axis(0), 0).iter().all(|&v| v == 2.0));
        assert!(out.index_axis(Axis(0), 1).iter().all(|&v| v == 4.0));
    }
}
