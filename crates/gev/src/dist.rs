//! The GEV distribution and its statrs / rand bridges.

use rand::Rng;
use rand::distr::Open01;
use rand_distr::Distribution;
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::{Max, Min};

use crate::params::GevParams;

/// Generalized extreme value distribution.
///
/// Implements the statrs [`Continuous`] and [`ContinuousCDF`] traits so the
/// usual `pdf`, `cdf`, `sf` and `inverse_cdf` are available, plus
/// [`Gev::isf`] for the inverse survival function. Sampling goes through
/// [`rand_distr::Distribution`] by inverse transform.
///
/// All functions are written in terms of `ln(1 - c y)` via `ln_1p`, so they
/// stay accurate as the shape approaches the Gumbel limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gev {
    params: GevParams,
}

impl Gev {
    /// Wraps validated parameters.
    pub fn new(params: GevParams) -> Self {
        Self { params }
    }

    /// The parameters of this distribution.
    pub fn params(&self) -> GevParams {
        self.params
    }

    /// Inverse survival function: the value exceeded with probability `p`.
    ///
    /// Returns NaN when `p` is NaN or outside `[0, 1]`. `isf(0)` is the upper
    /// end of the support and `isf(1)` the lower end (either may be infinite).
    pub fn isf(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        self.quantile_from_w(-(-p).ln_1p())
    }

    /// Returns `(ln t, ln u)` with `t = 1 - c y`, `u = t^(1/c)` and
    /// `y = (x - location) / scale`, so that `F(x) = exp(-u)`.
    ///
    /// `None` when `x` lies outside the support.
    fn log_terms(&self, x: f64) -> Option<(f64, f64)> {
        let c = self.params.shape();
        let y = (x - self.params.location()) / self.params.scale();
        if c == 0.0 {
            return Some((0.0, -y));
        }
        let arg = -c * y;
        if arg <= -1.0 {
            return None;
        }
        let ln_t = arg.ln_1p();
        Some((ln_t, ln_t / c))
    }

    /// Quantile expressed through `w = -ln F`.
    fn quantile_from_w(&self, w: f64) -> f64 {
        let c = self.params.shape();
        let loc = self.params.location();
        let scale = self.params.scale();
        if c == 0.0 {
            loc - scale * w.ln()
        } else {
            loc - scale * (c * w.ln()).exp_m1() / c
        }
    }
}

impl Min<f64> for Gev {
    /// Lower end of the support: `location + scale / c` when `c < 0`.
    fn min(&self) -> f64 {
        let c = self.params.shape();
        if c < 0.0 {
            self.params.location() + self.params.scale() / c
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl Max<f64> for Gev {
    /// Upper end of the support: `location + scale / c` when `c > 0`.
    fn max(&self) -> f64 {
        let c = self.params.shape();
        if c > 0.0 {
            self.params.location() + self.params.scale() / c
        } else {
            f64::INFINITY
        }
    }
}

impl ContinuousCDF<f64, f64> for Gev {
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        match self.log_terms(x) {
            Some((_, ln_u)) => (-ln_u.exp()).exp(),
            None if self.params.shape() > 0.0 => 1.0,
            None => 0.0,
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        match self.log_terms(x) {
            Some((_, ln_u)) => -(-ln_u.exp()).exp_m1(),
            None if self.params.shape() > 0.0 => 0.0,
            None => 1.0,
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        self.quantile_from_w(-p.ln())
    }
}

impl Continuous<f64, f64> for Gev {
    fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        match self.log_terms(x) {
            Some((ln_t, ln_u)) => {
                let v = -self.params.scale().ln() + ln_u - ln_t - ln_u.exp();
                if v.is_nan() { f64::NEG_INFINITY } else { v }
            }
            None => f64::NEG_INFINITY,
        }
    }
}

impl Distribution<f64> for Gev {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = Open01.sample(rng);
        self.inverse_cdf(u)
    }
}
