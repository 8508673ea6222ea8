//! GEV fitting for single locations and for spatial blocks of a gridded
//! time series.
//!
//! # Pipeline (per location)
//!
//! 1. **Drop** missing (NaN or infinite) samples
//! 2. **Skip** locations with `minimum_points` or fewer samples
//! 3. **Reject** samples whose absolute z-score exceeds `zscore_to_remove`
//! 4. **Estimate** shape, location and scale (MLE by default)
//! 5. **Score** the fit with a Kolmogorov-Smirnov p-value
//!
//! Steps 2 and 4 never fail loudly: an unusable location yields NaN for all
//! four outputs and the rest of the block is unaffected.
//!
//! # Quick Start
//!
//! ```no_run
//! use eva_fit::{FitConfig, fit_block};
//! use ndarray::Array3;
//!
//! // (time, row, col) block of annual maxima
//! let block = Array3::<f64>::zeros((120, 25, 25));
//! let params = fit_block(block.view(), &FitConfig::new()).unwrap();
//! assert_eq!(params.dim(), (4, 25, 25));
//! ```

mod block;
mod config;
mod error;
mod outliers;
mod point;
mod result;

pub use block::fit_block;
pub use config::FitConfig;
pub use error::FitError;
pub use point::fit_point;
pub use result::{FIT_PARAMETER_COUNT, FitResult};
