//! Block-parallel extreme-value analysis of gridded time series.
//!
//! Fits a generalized extreme value distribution independently at every
//! location of a `(time, row, col)` array, converts the fitted parameters
//! into return levels or return periods, and offers a distribution-free
//! empirical return period. All kernels work on opaque spatial blocks and
//! are pure functions of their input, so blocks can be dispatched to any
//! number of workers and reassembled without coordinate bookkeeping.
//!
//! | Crate | Role |
//! |-------|------|
//! | [`eva_stats`] | moments, z-scores, L-moments, Kolmogorov-Smirnov test |
//! | [`eva_gev`] | GEV distribution and estimators |
//! | [`eva_fit`] | per-location and per-block fitting |
//! | [`eva_return`] | return levels, return periods, empirical periods |
//! | [`eva_grid`] | chunked parallel dispatch over a full grid |
//!
//! This crate re-exports the public API and adds a TOML configuration layer
//! and tracing setup.
//!
//! # Example
//!
//! ```no_run
//! use eva::{EvaConfig, build_fit_config, build_grid_config, fit_grid};
//! use ndarray::Array3;
//!
//! let config = EvaConfig::from_file("eva.toml")?;
//! let fit = build_fit_config(&config.fit)?;
//! let grid = build_grid_config(&config.grid)?;
//!
//! let annual_maxima = Array3::<f64>::zeros((120, 200, 300));
//! let params = fit_grid(annual_maxima.view(), &fit, &grid)?;
//! assert_eq!(params.dim(), (4, 200, 300));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod convert;
mod error;
pub mod logging;

pub use config::EvaConfig;
pub use convert::{
    build_fit_config, build_grid_config, build_inversion_config, build_return_levels,
    build_return_periods,
};
pub use error::ConfigError;

pub use eva_fit::{FIT_PARAMETER_COUNT, FitConfig, FitError, FitResult, fit_block, fit_point};
pub use eva_gev::{DistributionFamily, EstimationMethod, Gev, GevError, GevParams};
pub use eva_grid::{
    GridConfig, GridError, empirical_periods_grid, fit_grid, map_blocks, return_levels_grid,
    return_periods_grid,
};
pub use eva_return::{
    InversionConfig, ReturnError, ZERO_TOLERANCE, empirical_periods_block,
    empirical_periods_point, return_levels_block, return_levels_point, return_periods_block,
    return_periods_point,
};
