//! Nelder-Mead maximum-likelihood estimation for the GEV.
//!
//! Wraps the `argmin` crate to minimize the negative log-likelihood over
//! `(shape, location, ln scale)`, which keeps the scale positive without
//! constraints.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use tracing::trace;

use crate::error::GevError;
use crate::lmoments::{fit_gumbel_moments, fit_lmoments, validate};
use crate::params::GevParams;

const MAX_ITERS: u64 = 2000;
const SD_TOLERANCE: f64 = 1e-10;

/// Fits a GEV to `data` by maximum likelihood.
///
/// 1. Validate data
/// 2. Pick the better of the L-moment and Gumbel-moment estimates as start
/// 3. Minimise the negative log-likelihood via Nelder-Mead
/// 4. Check the optimum has a finite likelihood
pub(crate) fn fit_mle(data: &[f64]) -> Result<GevParams, GevError> {
    // 1. Validate
    validate(data)?;

    // 2. Starting point. The Gumbel start always has full support, so at
    // least one candidate has finite likelihood.
    let start = [fit_lmoments(data).ok(), fit_gumbel_moments(data).ok()]
        .into_iter()
        .flatten()
        .map(|p| (p, -p.log_likelihood(data)))
        .filter(|(_, nll)| nll.is_finite())
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
        .ok_or(GevError::OptimizationFailed)?;
    trace!(
        shape = start.shape(),
        location = start.location(),
        scale = start.scale(),
        "mle starting point"
    );

    // 3. Simplex around the start, stepping the shape towards zero so the
    // support widens rather than shrinks.
    let x0 = vec![start.shape(), start.location(), start.scale().ln()];
    let shape_step = if start.shape() > 0.0 { -0.05 } else { 0.05 };
    let simplex = vec![
        x0.clone(),
        vec![x0[0] + shape_step, x0[1], x0[2]],
        vec![x0[0], x0[1] + 0.1 * start.scale(), x0[2]],
        vec![x0[0], x0[1], x0[2] + 0.1],
    ];

    let cost = GevNegLogLik { data };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(SD_TOLERANCE)
        .map_err(|_| GevError::OptimizationFailed)?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(MAX_ITERS))
        .run()
        .map_err(|_| GevError::OptimizationFailed)?;

    let best = result
        .state()
        .best_param
        .as_ref()
        .ok_or(GevError::OptimizationFailed)?;

    // 4. Extract and check
    let (shape, location, scale) = (best[0], best[1], best[2].exp());
    let params = GevParams::new(shape, location, scale).ok_or(GevError::InvalidEstimate {
        shape,
        location,
        scale,
    })?;
    if !params.log_likelihood(data).is_finite() {
        return Err(GevError::OptimizationFailed);
    }
    Ok(params)
}

/// Cost function for argmin: negative GEV log-likelihood.
struct GevNegLogLik<'a> {
    data: &'a [f64],
}

impl CostFunction for GevNegLogLik<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let Some(p) = GevParams::new(params[0], params[1], params[2].exp()) else {
            return Ok(f64::MAX);
        };
        let loglik = p.log_likelihood(self.data);
        if loglik.is_finite() {
            Ok(-loglik)
        } else {
            Ok(f64::MAX)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_distr::Distribution;

    fn sample(shape: f64, location: f64, scale: f64, n: usize, seed: u64) -> Vec<f64> {
        let dist = GevParams::new(shape, location, scale).unwrap().distribution();
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        (0..n).map(|_| dist.sample(&mut rng)).collect()
    }

    #[test]
    fn validation_errors() {
        assert!(matches!(fit_mle(&[]), Err(GevError::InsufficientData { .. })));
        assert!(matches!(
            fit_mle(&[1.0, f64::NAN, 3.0]),
            Err(GevError::NonFiniteData)
        ));
        assert!(matches!(fit_mle(&[2.0; 50]), Err(GevError::ConstantData)));
    }

    #[test]
    fn recovers_gumbel() {
        let data = sample(0.0, 20.0, 3.0, 2000, 11);
        let fit = fit_mle(&data).unwrap();
        assert!(fit.shape().abs() < 0.06, "shape = {}", fit.shape());
        assert!((fit.location() - 20.0).abs() < 0.3, "loc = {}", fit.location());
        assert!((fit.scale() - 3.0).abs() < 0.3, "scale = {}", fit.scale());
    }

    #[test]
    fn recovers_bounded_tail() {
        let data = sample(0.2, 28.0, 1.2, 2000, 12);
        let fit = fit_mle(&data).unwrap();
        assert!((fit.shape() - 0.2).abs() < 0.06, "shape = {}", fit.shape());
        assert!((fit.location() - 28.0).abs() < 0.15, "loc = {}", fit.location());
        assert!((fit.scale() - 1.2).abs() < 0.15, "scale = {}", fit.scale());
    }

    #[test]
    fn mle_beats_its_starting_points() {
        let data = sample(-0.1, 5.0, 2.0, 300, 13);
        let mle = fit_mle(&data).unwrap();
        let lmom = fit_lmoments(&data).unwrap();
        let gumbel = fit_gumbel_moments(&data).unwrap();
        let ll = mle.log_likelihood(&data);
        assert!(ll >= lmom.log_likelihood(&data) - 1e-9);
        assert!(ll >= gumbel.log_likelihood(&data) - 1e-9);
    }

    #[test]
    fn deterministic() {
        let data = sample(0.05, 0.0, 1.0, 200, 14);
        let a = fit_mle(&data).unwrap();
        let b = fit_mle(&data).unwrap();
        assert_eq!(a.to_array().map(f64::to_bits), b.to_array().map(f64::to_bits));
    }
}
