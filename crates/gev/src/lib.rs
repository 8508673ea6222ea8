//! Generalized extreme value (GEV) distribution and parameter estimation.
//!
//! # Workflow
//!
//! ```mermaid
//! graph LR
//!     A["&[f64] block maxima"] -->|"estimate(data, method)?"| B["GevParams"]
//!     B -->|".distribution()"| C["Gev"]
//!     C --> D[".cdf(x) / .sf(x)"]
//!     C --> E[".inverse_cdf(p) / .isf(p)"]
//!     C --> F[".sample(&mut rng)"]
//!     B --> G[".aic(data)"]
//! ```
//!
//! # Shape convention
//!
//! `F(x) = exp(-(1 - c (x - location) / scale)^(1/c))`. Positive `c` bounds
//! the upper tail, negative `c` gives a heavy upper tail and `c = 0` is the
//! Gumbel limit.
//!
//! # Example
//!
//! ```
//! use eva_gev::{EstimationMethod, estimate};
//!
//! let data = [31.2, 29.8, 30.5, 32.9, 30.1, 31.7, 29.5, 33.4, 30.9, 31.1];
//! let params = estimate(&data, EstimationMethod::LMoments).unwrap();
//! let hundred_year = params.distribution().isf(0.01);
//! assert!(hundred_year > 33.0);
//! ```

mod dist;
mod error;
mod family;
mod lmoments;
mod mle;
mod params;

pub use dist::Gev;
pub use error::GevError;
pub use family::{DistributionFamily, EstimationMethod};
pub use params::{GevParams, N_PARAMS};

/// Estimates GEV parameters from `data` with the chosen method.
///
/// `data` must contain at least three finite, non-identical values.
///
/// # Errors
///
/// Returns [`GevError`] on invalid input or when the estimator does not
/// produce a valid parameter set.
pub fn estimate(data: &[f64], method: EstimationMethod) -> Result<GevParams, GevError> {
    match method {
        EstimationMethod::Mle => mle::fit_mle(data),
        EstimationMethod::LMoments => lmoments::fit_lmoments(data),
    }
}
