//! Sample statistics shared by the extreme-value crates.
//!
//! Moments and z-scores live here, along with sample L-moments (used to seed
//! GEV estimation) and the one-sample Kolmogorov-Smirnov test used to score
//! a fitted distribution.

mod ks;
mod lmoments;

pub use ks::{KsTest, kolmogorov_cdf, kolmogorov_sf, ks_test};
pub use lmoments::{SampleLMoments, sample_lmoments};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Population standard deviation (N denominator). Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let nf = data.len() as f64;
    let mean = mean(data);
    (data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / nf).sqrt()
}

/// Z-scores of every element, using the mean and population standard
/// deviation of the non-NaN elements.
///
/// NaN inputs map to NaN outputs and do not contribute to the moments.
/// Returns `None` when there are no non-NaN elements or their standard
/// deviation is zero, since no score is defined in either case.
pub fn zscores(data: &[f64]) -> Option<Vec<f64>> {
    let present: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
    if present.is_empty() {
        return None;
    }
    let mu = mean(&present);
    let sigma = population_sd(&present);
    if sigma <= 0.0 || !sigma.is_finite() {
        return None;
    }
    Some(data.iter().map(|&x| (x - mu) / sigma).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_population_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_sd(&data), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zscores_known() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let z = zscores(&data).unwrap();
        assert_relative_eq!(z[0], -1.5, epsilon = 1e-12);
        assert_relative_eq!(z[7], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zscores_skip_nan() {
        let z = zscores(&[1.0, f64::NAN, 3.0]).unwrap();
        assert_relative_eq!(z[0], -1.0, epsilon = 1e-12);
        assert!(z[1].is_nan());
        assert_relative_eq!(z[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zscores_constant() {
        assert!(zscores(&[4.0, 4.0, 4.0]).is_none());
    }

    #[test]
    fn test_zscores_all_nan() {
        assert!(zscores(&[f64::NAN, f64::NAN]).is_none());
    }
}
