//! Configuration for feature computation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Numeric guards used by the feature formulas.
///
/// The defaults are the constants of the published feature contract; changing
/// them produces a different (but still deterministic) feature set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Added to denominators (time span, sell count, side total).
    pub denominator_epsilon: f64,
    /// Standard deviations at or below this count as zero variance.
    pub zero_variance_threshold: f64,
    /// Timestamp units per second.
    pub millis_per_second: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            denominator_epsilon: 1e-5,
            zero_variance_threshold: 1e-8,
            millis_per_second: 1000.0,
        }
    }
}

impl FeatureConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FeatureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every guard is a positive finite number.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("denominator_epsilon", self.denominator_epsilon),
            ("zero_variance_threshold", self.zero_variance_threshold),
            ("millis_per_second", self.millis_per_second),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FeatureConfig::default();
        assert_eq!(config.denominator_epsilon, 1e-5);
        assert_eq!(config.zero_variance_threshold, 1e-8);
        assert_eq!(config.millis_per_second, 1000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = FeatureConfig::from_json(r#"{"denominator_epsilon": 1e-6}"#).unwrap();
        assert_eq!(config.denominator_epsilon, 1e-6);
        assert_eq!(config.zero_variance_threshold, 1e-8);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = FeatureConfig::from_json(r#"{"zero_variance_threshold": 0.0}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let config = FeatureConfig {
            millis_per_second: f64::NAN,
            ..FeatureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = FeatureConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
