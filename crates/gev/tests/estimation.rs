//! Integration tests for GEV estimation through the public API.

use eva_gev::{EstimationMethod, GevError, GevParams, estimate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Distribution;
use statrs::distribution::ContinuousCDF;

fn annual_maxima(shape: f64, location: f64, scale: f64, n: usize, seed: u64) -> Vec<f64> {
    let dist = GevParams::new(shape, location, scale)
        .expect("valid gev params")
        .distribution();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

#[test]
fn methods_agree_on_large_samples() {
    let data = annual_maxima(0.1, 30.0, 1.5, 3000, 21);
    let mle = estimate(&data, EstimationMethod::Mle).unwrap();
    let lmom = estimate(&data, EstimationMethod::LMoments).unwrap();
    assert!((mle.shape() - lmom.shape()).abs() < 0.05);
    assert!((mle.location() - lmom.location()).abs() < 0.1);
    assert!((mle.scale() - lmom.scale()).abs() < 0.1);
}

#[test]
fn hundred_year_level_close_to_truth() {
    let truth = GevParams::new(-0.1, 10.0, 2.0).unwrap().distribution();
    let data = annual_maxima(-0.1, 10.0, 2.0, 3000, 22);
    let fit = estimate(&data, EstimationMethod::Mle).unwrap().distribution();
    let expected = truth.isf(0.01);
    let got = fit.isf(0.01);
    assert!(
        (got - expected).abs() / expected < 0.1,
        "expected ~{expected}, got {got}"
    );
}

#[test]
fn fitted_cdf_matches_empirical_median() {
    let data = annual_maxima(0.0, 0.0, 1.0, 1001, 23);
    let fit = estimate(&data, EstimationMethod::Mle).unwrap().distribution();
    let mut sorted = data.clone();
    sorted.sort_by(f64::total_cmp);
    let median = sorted[500];
    assert!((fit.cdf(median) - 0.5).abs() < 0.05);
}

#[test]
fn aic_prefers_the_fitted_model() {
    let data = annual_maxima(0.2, 5.0, 1.0, 500, 24);
    let fit = estimate(&data, EstimationMethod::Mle).unwrap();
    let wrong = GevParams::new(0.0, 5.0, 3.0).unwrap();
    assert!(fit.aic(&data) < wrong.aic(&data));
}

#[test]
fn degenerate_inputs_are_errors() {
    assert!(matches!(
        estimate(&[1.0, 2.0], EstimationMethod::Mle),
        Err(GevError::InsufficientData { .. })
    ));
    assert!(matches!(
        estimate(&[7.0; 30], EstimationMethod::LMoments),
        Err(GevError::ConstantData)
    ));
}
