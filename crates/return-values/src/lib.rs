//! Return levels and return periods from GEV fits, plus a distribution-free
//! empirical return period.
//!
//! # Conversions
//!
//! - **Level from period**: `level(T) = isf(1 / T)`
//! - **Period from level**: `period(L) = 1 / (1 - F(L))`, NaN when the
//!   exceedance probability is within [`ZERO_TOLERANCE`] of zero or when the
//!   period is above the `omit_above` ceiling
//! - **Empirical period**: `n_valid / n_exceeding`, NaN when nothing exceeds
//!
//! Each has a single-location form (`*_point`) and a block form (`*_block`)
//! that maps a `(param | time, row, col)` array to a
//! `(n_values, row, col)` array with the spatial layout unchanged.
//!
//! # Example
//!
//! ```
//! use eva_return::{InversionConfig, return_levels_block};
//! use ndarray::Array3;
//!
//! // One location, Gumbel(0, 1) plus a p-value entry.
//! let params = Array3::from_shape_vec((4, 1, 1), vec![0.0, 0.0, 1.0, 0.5]).unwrap();
//! let config = InversionConfig::new();
//! let levels = return_levels_block(params.view(), &[10.0, 100.0], &config).unwrap();
//! assert_eq!(levels.dim(), (2, 1, 1));
//! ```

mod block;
mod config;
mod empirical;
mod error;
mod point;

pub use block::{empirical_periods_block, return_levels_block, return_periods_block};
pub use config::{InversionConfig, validate_return_levels, validate_return_periods};
pub use empirical::empirical_periods_point;
pub use error::ReturnError;
pub use point::{ZERO_TOLERANCE, return_levels_point, return_periods_point};
