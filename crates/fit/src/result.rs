//! Per-location fit result.

use eva_gev::GevParams;

/// Number of values stored per location in a parameter grid:
/// shape, location, scale and the goodness-of-fit p-value.
pub const FIT_PARAMETER_COUNT: usize = 4;

/// The outcome of fitting one location.
///
/// A location that could not be fitted is represented by all-NaN fields
/// ([`FitResult::missing`]) rather than by an error, so that grids stay dense.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    shape: f64,
    location: f64,
    scale: f64,
    p_value: f64,
}

impl FitResult {
    pub(crate) fn new(params: GevParams, p_value: f64) -> Self {
        Self {
            shape: params.shape(),
            location: params.location(),
            scale: params.scale(),
            p_value,
        }
    }

    /// The all-missing result.
    pub fn missing() -> Self {
        Self {
            shape: f64::NAN,
            location: f64::NAN,
            scale: f64::NAN,
            p_value: f64::NAN,
        }
    }

    /// `true` when no parameters were estimated.
    pub fn is_missing(&self) -> bool {
        self.params().is_none()
    }

    /// Shape parameter (NaN when missing).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Location parameter (NaN when missing).
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter (NaN when missing).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Kolmogorov-Smirnov p-value of the fit (NaN when missing).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// The fitted parameters, or `None` for a missing result.
    pub fn params(&self) -> Option<GevParams> {
        GevParams::new(self.shape, self.location, self.scale)
    }

    /// `[shape, location, scale, p_value]`, the layout of a parameter grid.
    pub fn to_array(&self) -> [f64; FIT_PARAMETER_COUNT] {
        [self.shape, self.location, self.scale, self.p_value]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_is_all_nan() {
        let r = FitResult::missing();
        assert!(r.is_missing());
        assert!(r.to_array().iter().all(|v| v.is_nan()));
        assert!(r.params().is_none());
    }

    #[test]
    fn layout_matches_grid_axis() {
        let p = GevParams::new(0.1, 20.0, 2.0).unwrap();
        let r = FitResult::new(p, 0.42);
        assert!(!r.is_missing());
        assert_eq!(r.to_array(), [0.1, 20.0, 2.0, 0.42]);
        assert_eq!(r.params(), Some(p));
    }
}
