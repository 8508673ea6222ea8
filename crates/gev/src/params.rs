//! GEV parameter type.

use statrs::distribution::Continuous;

use crate::dist::Gev;

/// Number of free parameters in the GEV family.
pub const N_PARAMS: usize = 3;

/// Validated parameters for a GEV distribution.
///
/// The shape `c` follows the convention
/// `F(x) = exp(-(1 - c (x - location) / scale)^(1/c))`: `c > 0` bounds the
/// upper tail (reverse Weibull), `c < 0` gives a heavy upper tail (Fréchet)
/// and `c = 0` is the Gumbel limit. All three values must be finite and
/// `scale` strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GevParams {
    shape: f64,
    location: f64,
    scale: f64,
}

impl GevParams {
    /// Create new GEV parameters after validating that all three are finite
    /// and `scale` is strictly positive.
    pub fn new(shape: f64, location: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && location.is_finite() && scale.is_finite() && scale > 0.0 {
            Some(Self {
                shape,
                location,
                scale,
            })
        } else {
            None
        }
    }

    /// Reads `(shape, location, scale)` from the first three entries of
    /// `values`. Extra entries (such as a goodness-of-fit p-value) are
    /// ignored.
    ///
    /// Returns `None` if fewer than three entries are present or they do not
    /// form a valid parameter set.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match values {
            [shape, location, scale, ..] => Self::new(*shape, *location, *scale),
            _ => None,
        }
    }

    /// Shape parameter (c).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Location parameter.
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// `[shape, location, scale]`.
    pub fn to_array(&self) -> [f64; N_PARAMS] {
        [self.shape, self.location, self.scale]
    }

    /// The distribution described by these parameters.
    pub fn distribution(&self) -> Gev {
        Gev::new(*self)
    }

    /// Log-likelihood of the finite values in `data`.
    ///
    /// Returns negative infinity if any value lies outside the support.
    pub fn log_likelihood(&self, data: &[f64]) -> f64 {
        let dist = self.distribution();
        data.iter()
            .copied()
            .filter(|x| x.is_finite())
            .map(|x| dist.ln_pdf(x))
            .sum()
    }

    /// Akaike Information Criterion, `2k - 2 ln L` with `k = 3`.
    pub fn aic(&self, data: &[f64]) -> f64 {
        2.0 * N_PARAMS as f64 - 2.0 * self.log_likelihood(data)
    }
}
