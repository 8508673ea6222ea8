//! Pure conversion functions: TOML config structs -> kernel config types.

use eva_fit::FitConfig;
use eva_gev::{DistributionFamily, EstimationMethod};
use eva_grid::GridConfig;
use eva_return::{InversionConfig, validate_return_levels, validate_return_periods};

use crate::config::{FitToml, GridToml, InversionToml};
use crate::error::ConfigError;

/// Parses a distribution family name. Unknown names parse to
/// [`DistributionFamily::Unsupported`] and are rejected when the owning
/// config is validated.
pub fn parse_distribution(s: &str) -> DistributionFamily {
    match s.parse() {
        Ok(d) => d,
        Err(never) => match never {},
    }
}

/// Parses an estimation method name (case-insensitive).
///
/// # Errors
///
/// Returns [`ConfigError::Gev`] for an unknown name.
pub fn parse_estimation_method(s: &str) -> Result<EstimationMethod, ConfigError> {
    Ok(s.parse()?)
}

/// Builds and validates a [`FitConfig`] from the `[fit]` table.
///
/// # Errors
///
/// Returns [`ConfigError`] for an unknown estimator or an invalid setting.
pub fn build_fit_config(fit: &FitToml) -> Result<FitConfig, ConfigError> {
    let config = FitConfig::new()
        .with_distribution(parse_distribution(&fit.distribution))
        .with_zscore_to_remove(fit.zscore_to_remove)
        .with_minimum_points(fit.minimum_points)
        .with_estimation_method(parse_estimation_method(&fit.estimation_method)?);
    config.validate()?;
    Ok(config)
}

/// Builds and validates an [`InversionConfig`] from the `[inversion]` table.
///
/// # Errors
///
/// Returns [`ConfigError`] for an unsupported family or a NaN ceiling.
pub fn build_inversion_config(inversion: &InversionToml) -> Result<InversionConfig, ConfigError> {
    let config = InversionConfig::new()
        .with_distribution(parse_distribution(&inversion.distribution))
        .with_omit_above(inversion.omit_above);
    config.validate()?;
    Ok(config)
}

/// Returns the requested return periods after checking each is finite and
/// positive. An absent list is returned empty.
///
/// # Errors
///
/// Returns [`ConfigError::Return`] naming the first invalid period.
pub fn build_return_periods(inversion: &InversionToml) -> Result<Vec<f64>, ConfigError> {
    if !inversion.return_periods.is_empty() {
        validate_return_periods(&inversion.return_periods)?;
    }
    Ok(inversion.return_periods.clone())
}

/// Returns the requested return levels after checking each is finite. An
/// absent list is returned empty.
///
/// # Errors
///
/// Returns [`ConfigError::Return`] naming the first invalid level.
pub fn build_return_levels(inversion: &InversionToml) -> Result<Vec<f64>, ConfigError> {
    if !inversion.return_levels.is_empty() {
        validate_return_levels(&inversion.return_levels)?;
    }
    Ok(inversion.return_levels.clone())
}

/// Builds and validates a [`GridConfig`] from the `[grid]` table.
///
/// # Errors
///
/// Returns [`ConfigError::Grid`] for a zero chunk size or worker count.
pub fn build_grid_config(grid: &GridToml) -> Result<GridConfig, ConfigError> {
    let config = GridConfig::new()
        .with_chunks(grid.chunk_rows, grid.chunk_cols)
        .with_n_workers(grid.n_workers);
    config.validate()?;
    Ok(config)
}
