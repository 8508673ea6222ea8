//! Distribution family and estimation method selectors.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::GevError;

/// Distribution family to fit.
///
/// Only the generalized extreme value family is implemented. Any other name
/// parses to [`DistributionFamily::Unsupported`] so that it can be reported
/// as a configuration error before any data is touched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DistributionFamily {
    /// Generalized extreme value (`"genextreme"`).
    #[default]
    GenExtreme,
    /// Any other requested family, carrying the name as given.
    Unsupported(String),
}

impl DistributionFamily {
    /// Canonical name of the family.
    pub fn name(&self) -> &str {
        match self {
            Self::GenExtreme => "genextreme",
            Self::Unsupported(name) => name,
        }
    }

    /// Fails with [`GevError::UnsupportedDistribution`] unless this is the
    /// GEV family.
    pub fn ensure_supported(&self) -> Result<(), GevError> {
        match self {
            Self::GenExtreme => Ok(()),
            Self::Unsupported(name) => Err(GevError::UnsupportedDistribution { name: name.clone() }),
        }
    }
}

impl FromStr for DistributionFamily {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "genextreme" | "gev" => Ok(Self::GenExtreme),
            _ => Ok(Self::Unsupported(s.to_string())),
        }
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Method used to estimate GEV parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstimationMethod {
    /// Maximum likelihood (Nelder-Mead on the log-likelihood).
    #[default]
    Mle,
    /// Hosking's L-moment (probability-weighted moment) estimator.
    LMoments,
}

impl FromStr for EstimationMethod {
    type Err = GevError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mle" | "maximum-likelihood" | "maximum_likelihood" => Ok(Self::Mle),
            "lmoments" | "l-moments" | "lmom" => Ok(Self::LMoments),
            _ => Err(GevError::UnknownEstimationMethod {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_family() {
        assert_eq!(
            "genextreme".parse::<DistributionFamily>().unwrap(),
            DistributionFamily::GenExtreme
        );
        assert_eq!(
            "GEV".parse::<DistributionFamily>().unwrap(),
            DistributionFamily::GenExtreme
        );
        assert_eq!(
            "genpareto".parse::<DistributionFamily>().unwrap(),
            DistributionFamily::Unsupported("genpareto".to_string())
        );
    }

    #[test]
    fn unsupported_family_is_rejected() {
        let family = DistributionFamily::Unsupported("weibull_min".to_string());
        assert!(matches!(
            family.ensure_supported(),
            Err(GevError::UnsupportedDistribution { name }) if name == "weibull_min"
        ));
        assert!(DistributionFamily::GenExtreme.ensure_supported().is_ok());
    }

    #[test]
    fn family_display() {
        assert_eq!(DistributionFamily::default().to_string(), "genextreme");
    }

    #[test]
    fn parse_estimation_method() {
        assert_eq!("MLE".parse::<EstimationMethod>().unwrap(), EstimationMethod::Mle);
        assert_eq!(
            "l-moments".parse::<EstimationMethod>().unwrap(),
            EstimationMethod::LMoments
        );
        assert!(matches!(
            "mm".parse::<EstimationMethod>(),
            Err(GevError::UnknownEstimationMethod { .. })
        ));
    }
}
