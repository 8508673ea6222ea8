//! One-sample Kolmogorov-Smirnov test.
//!
//! The two-sided statistic `D_n = sup |F_n(x) - F(x)|` is referred to the
//! exact Kolmogorov distribution, evaluated with the Durbin matrix method of
//! Marsaglia, Tsang & Wang (2003, J. Stat. Softw. 8(18)). In the far right
//! tail (`n d^2 > 7.24`, or `n d^2 > 3.76` with `n > 99`) their closed-form
//! approximation is used instead, which is accurate to about 5 digits there.

use ndarray::Array2;

const SCALE: f64 = 1e140;
const SCALE_EXP: i32 = 140;

/// Outcome of a one-sample Kolmogorov-Smirnov test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsTest {
    statistic: f64,
    p_value: f64,
    n: usize,
}

impl KsTest {
    /// The two-sided statistic `D_n`.
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Probability of a statistic at least as large under the null.
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Number of samples the statistic was computed from.
    pub fn n(&self) -> usize {
        self.n
    }
}

/// Runs a two-sided one-sample KS test of `sample` against `cdf`.
///
/// NaN samples are ignored. Returns `None` when no samples remain or the
/// CDF produces NaN for one of them.
pub fn ks_test<F>(sample: &[f64], cdf: F) -> Option<KsTest>
where
    F: Fn(f64) -> f64,
{
    let mut sorted: Vec<f64> = sample.iter().copied().filter(|x| !x.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let nf = n as f64;
    let mut d_plus = f64::NEG_INFINITY;
    let mut d_minus = f64::NEG_INFINITY;
    for (i, &x) in sorted.iter().enumerate() {
        let f = cdf(x);
        if f.is_nan() {
            return None;
        }
        d_plus = d_plus.max((i + 1) as f64 / nf - f);
        d_minus = d_minus.max(f - i as f64 / nf);
    }
    let statistic = d_plus.max(d_minus);

    Some(KsTest {
        statistic,
        p_value: kolmogorov_sf(n, statistic),
        n,
    })
}

/// Survival function of the two-sided KS statistic: `P(D_n >= d)`.
pub fn kolmogorov_sf(n: usize, d: f64) -> f64 {
    (1.0 - kolmogorov_cdf(n, d)).clamp(0.0, 1.0)
}

/// Distribution function of the two-sided KS statistic: `P(D_n < d)`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn kolmogorov_cdf(n: usize, d: f64) -> f64 {
    assert!(n > 0, "kolmogorov_cdf: n must be positive");
    let nf = n as f64;

    // D_n can never fall below 1/(2n).
    if d.is_nan() {
        return f64::NAN;
    }
    if d <= 0.5 / nf {
        return 0.0;
    }
    if d >= 1.0 {
        return 1.0;
    }

    let s = d * d * nf;
    if s > 7.24 || (s > 3.76 && n > 99) {
        let c = 2.000071 + 0.331 / nf.sqrt() + 1.409 / nf;
        return 1.0 - 2.0 * (-c * s).exp();
    }

    let k = (nf * d) as usize + 1;
    let m = 2 * k - 1;
    let h = k as f64 - nf * d;

    let mut hm = Array2::from_shape_fn((m, m), |(i, j)| if i + 1 >= j { 1.0 } else { 0.0 });
    for i in 0..m {
        hm[[i, 0]] -= h.powi(i as i32 + 1);
        hm[[m - 1, i]] -= h.powi((m - i) as i32);
    }
    if 2.0 * h - 1.0 > 0.0 {
        hm[[m - 1, 0]] += (2.0 * h - 1.0).powi(m as i32);
    }
    for i in 0..m {
        for j in 0..=i {
            for g in 1..=(i + 1 - j) {
                hm[[i, j]] /= g as f64;
            }
        }
    }

    let (q, mut exponent) = matrix_power(&hm, n);
    let mut p = q[[k - 1, k - 1]];
    for i in 1..=n {
        p = p * i as f64 / nf;
        if p < 1.0 / SCALE {
            p *= SCALE;
            exponent -= SCALE_EXP;
        }
    }
    (p * 10f64.powi(exponent)).clamp(0.0, 1.0)
}

/// Raises `a` to the power `n >= 1`, returning the result as `(matrix,
/// exponent)` with the true value equal to `matrix * 10^exponent`.
fn matrix_power(a: &Array2<f64>, n: usize) -> (Array2<f64>, i32) {
    if n == 1 {
        return (a.clone(), 0);
    }
    let (half, half_exp) = matrix_power(a, n / 2);
    let squared = half.dot(&half);
    let mut v = if n % 2 == 0 { squared } else { a.dot(&squared) };
    let mut exponent = 2 * half_exp;

    let c = v.nrows() / 2;
    if v[[c, c]] > SCALE {
        v.mapv_inplace(|x| x / SCALE);
        exponent += SCALE_EXP;
    }
    (v, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn published_reference_value() {
        // Marsaglia, Tsang & Wang (2003): K(10, 0.274) = 0.6284796154565043
        assert_relative_eq!(kolmogorov_cdf(10, 0.274), 0.6284796154565043, epsilon = 1e-12);
    }

    #[test]
    fn single_sample_is_uniform() {
        // With n = 1, D = max(U, 1 - U), so P(D < d) = 2d - 1 on [0.5, 1].
        assert_relative_eq!(kolmogorov_cdf(1, 0.75), 0.5, epsilon = 1e-12);
        assert_relative_eq!(kolmogorov_cdf(1, 0.9), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn bounds() {
        assert_eq!(kolmogorov_cdf(20, 0.0), 0.0);
        assert_eq!(kolmogorov_cdf(20, 0.01), 0.0);
        assert_eq!(kolmogorov_cdf(20, 1.0), 1.0);
        assert_eq!(kolmogorov_sf(20, 1.5), 0.0);
    }

    #[test]
    fn cdf_is_monotone() {
        let mut prev = 0.0;
        for i in 1..100 {
            let d = i as f64 / 100.0;
            let p = kolmogorov_cdf(50, d);
            assert!(p >= prev - 1e-12, "not monotone at d={d}: {p} < {prev}");
            prev = p;
        }
    }

    #[test]
    fn tail_approximation_agrees_with_exact() {
        // Just either side of the switch point for n = 100 (n d^2 = 3.76).
        let below = kolmogorov_cdf(100, 0.1939);
        let above = kolmogorov_cdf(100, 0.1940);
        assert!((above - below).abs() < 1e-4);
    }

    #[test]
    fn ks_perfect_uniform_grid() {
        // Midpoints of n equal cells give D = 1/(2n), the smallest possible.
        let n = 20;
        let sample: Vec<f64> = (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect();
        let test = ks_test(&sample, |x| x.clamp(0.0, 1.0)).unwrap();
        assert_relative_eq!(test.statistic(), 0.5 / n as f64, epsilon = 1e-12);
        assert_relative_eq!(test.p_value(), 1.0, epsilon = 1e-12);
        assert_eq!(test.n(), n);
    }

    #[test]
    fn ks_detects_shifted_sample() {
        let sample: Vec<f64> = (0..50).map(|i| 0.5 + i as f64 / 100.0).collect();
        let test = ks_test(&sample, |x| x.clamp(0.0, 1.0)).unwrap();
        assert_relative_eq!(test.statistic(), 0.5, epsilon = 1e-12);
        assert!(test.p_value() < 1e-6, "p = {}", test.p_value());
    }

    #[test]
    fn ks_ignores_nan_and_rejects_empty() {
        assert!(ks_test(&[], |x| x).is_none());
        assert!(ks_test(&[f64::NAN], |x| x).is_none());
        let test = ks_test(&[0.25, f64::NAN, 0.75], |x| x).unwrap();
        assert_eq!(test.n(), 2);
    }
}
