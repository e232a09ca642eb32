//! Configuration types for jackknife resampling

use crate::{execution::ExecutionStrategy, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// What to do when a scaled jackknife variance is negative
///
/// Column variances from [`crate::moments`] are sums of squares, so the
/// resampler itself never produces a negative value; the negative branch
/// only guards variances computed elsewhere and passed to [`Self::apply`].
/// What the resampler can produce is a non-finite variance on overflow,
/// which is rejected under every policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariancePolicy {
    /// Fail with a numeric domain error naming the column
    #[default]
    Reject,
    /// Replace the negative value with zero and log a warning
    ClampToZero,
}

impl VariancePolicy {
    /// Apply the policy to the scaled variance of one parameter column
    ///
    /// Returns a variance that is safe to take the square root of.
    pub fn apply(self, scaled_variance: f64, column: usize) -> Result<f64> {
        if !scaled_variance.is_finite() {
            return Err(Error::numeric_domain(format!(
                "scaled jackknife variance is {scaled_variance}"
            ))
            .in_column(column));
        }
        if scaled_variance >= 0.0 {
            return Ok(scaled_variance);
        }
        match self {
            VariancePolicy::Reject => Err(Error::numeric_domain(format!(
                "scaled jackknife variance is negative ({scaled_variance:e})"
            ))
            .in_column(column)),
            VariancePolicy::ClampToZero => {
                warn!(
                    column,
                    scaled_variance, "clamping negative jackknife variance to zero"
                );
                Ok(0.0)
            }
        }
    }

    /// Policy name for reporting
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::ClampToZero => "clamp_to_zero",
        }
    }
}

/// Default confidence level for jackknife intervals
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Settings for a jackknife run
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes:
///
/// ```rust
/// use jackknife_core::{JackknifeConfig, VariancePolicy};
///
/// let config = JackknifeConfig::from_json(r#"{ "variance_policy": "clamp_to_zero" }"#).unwrap();
/// assert_eq!(config.variance_policy, VariancePolicy::ClampToZero);
/// assert_eq!(config.confidence_level, 0.95);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JackknifeConfig {
    /// Handling of negative scaled variances
    pub variance_policy: VariancePolicy,
    /// Keep the pseudo-estimate table in the result
    pub retain_table: bool,
    /// Confidence level for intervals, in (0, 1)
    pub confidence_level: f64,
    /// How the leave-one-out evaluations are scheduled
    pub execution: ExecutionStrategy,
}

impl Default for JackknifeConfig {
    fn default() -> Self {
        Self {
            variance_policy: VariancePolicy::Reject,
            retain_table: false,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            execution: ExecutionStrategy::Sequential,
        }
    }
}

impl JackknifeConfig {
    /// Check that all values are in range
    pub fn validate(&self) -> Result<()> {
        validate_confidence_level(self.confidence_level)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Check that a confidence level lies strictly between 0 and 1
pub fn validate_confidence_level(level: f64) -> Result<()> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "confidence level {level} must be in (0, 1)"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_passes_non_negative() {
        assert_eq!(VariancePolicy::Reject.apply(0.0, 0).unwrap(), 0.0);
        assert_eq!(VariancePolicy::Reject.apply(2.5, 0).unwrap(), 2.5);
        assert_eq!(VariancePolicy::ClampToZero.apply(2.5, 0).unwrap(), 2.5);
    }

    #[test]
    fn test_reject_negative() {
        let err = VariancePolicy::Reject.apply(-1e-18, 1).unwrap_err();
        match err {
            Error::NumericDomain { column, omitted_index, .. } => {
                assert_eq!(column, Some(1));
                assert_eq!(omitted_index, None);
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_clamp_negative() {
        assert_eq!(VariancePolicy::ClampToZero.apply(-1e-18, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_non_finite_rejected_under_every_policy() {
        for policy in [VariancePolicy::Reject, VariancePolicy::ClampToZero] {
            assert!(matches!(
                policy.apply(f64::NAN, 0),
                Err(Error::NumericDomain { column: Some(0), .. })
            ));
            assert!(matches!(
                policy.apply(f64::INFINITY, 2),
                Err(Error::NumericDomain { column: Some(2), .. })
            ));
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = JackknifeConfig::default();
        assert_eq!(config.variance_policy, VariancePolicy::Reject);
        assert!(!config.retain_table);
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.execution, ExecutionStrategy::Sequential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = JackknifeConfig {
            variance_policy: VariancePolicy::ClampToZero,
            retain_table: true,
            confidence_level: 0.9,
            execution: ExecutionStrategy::Auto,
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("clamp_to_zero"));
        assert_eq!(JackknifeConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = JackknifeConfig::from_json(r#"{ "confidence_level": 1.5 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = JackknifeConfig::from_json(r#"{ "resamples": 10 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = JackknifeConfig::from_json(r#"{ "variance_policy": "ignore" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_config_from_missing_path() {
        let err = JackknifeConfig::from_path("/nonexistent/jackknife.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_validate_confidence_level() {
        assert!(validate_confidence_level(0.95).is_ok());
        assert!(validate_confidence_level(0.0).is_err());
        assert!(validate_confidence_level(1.0).is_err());
        assert!(validate_confidence_level(f64::NAN).is_err());
    }
}
