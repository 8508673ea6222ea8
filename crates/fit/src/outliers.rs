//! z-score outlier rejection.

/// Keeps the samples whose absolute z-score is at most `threshold`.
///
/// Both tails are trimmed. The moments come from the samples themselves
/// (population standard deviation). When the spread is zero no sample can be
/// called an outlier and all are kept.
pub(crate) fn remove_outliers(samples: &[f64], threshold: f64) -> Vec<f64> {
    match eva_stats::zscores(samples) {
        Some(z) => samples
            .iter()
            .zip(&z)
            .filter(|(_, z)| z.abs() <= threshold)
            .map(|(&x, _)| x)
            .collect(),
        None => samples.to_vec(),
    }
}
