//! High-level API for jackknife standard errors
//!
//! This module provides easy-to-use functions for the common cases. Use
//! [`Jackknife`] directly for bias estimates, retained tables or custom
//! engines.

use crate::jackknife::Jackknife;
use crate::types::JackknifeEstimate;
use jackknife_core::{
    execution::{sequential, DynamicEngine},
    ExecutionEngine, JackknifeConfig, Result, VectorEstimator,
};

/// Jackknife standard errors with sequential execution and the default
/// (rejecting) variance policy
///
/// # Arguments
/// * `sample` - Data sample, at least 2 observations
/// * `estimator` - Estimator returning the same number of parameters for
///   every sub-sample
///
/// # Example
/// ```rust
/// use jackknife_resample::jackknife;
/// use jackknife_estimators::SampleMean;
///
/// let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let se = jackknife(&sample, &SampleMean).unwrap();
/// assert!((se[0] - 0.5f64.sqrt()).abs() < 1e-12);
/// ```
pub fn jackknife<Est>(sample: &[f64], estimator: &Est) -> Result<Vec<f64>>
where
    Est: VectorEstimator + Sync + ?Sized,
{
    Jackknife::new(sequential()).standard_errors(sample, estimator)
}

/// Jackknife standard errors on a caller-supplied engine
pub fn jackknife_with_engine<E, Est>(
    sample: &[f64],
    estimator: &Est,
    engine: E,
) -> Result<Vec<f64>>
where
    E: ExecutionEngine,
    Est: VectorEstimator + Sync + ?Sized,
{
    Jackknife::new(engine).standard_errors(sample, estimator)
}

/// Full jackknife run driven entirely by a configuration
///
/// The engine is built from `config.execution`.
pub fn jackknife_with_config<Est>(
    sample: &[f64],
    estimator: &Est,
    config: &JackknifeConfig,
) -> Result<JackknifeEstimate>
where
    Est: VectorEstimator + Sync + ?Sized,
{
    let engine = DynamicEngine::from_strategy(config.execution)?;
    Jackknife::from_config(engine, config.clone())?.run(sample, estimator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jackknife_core::{Error, ExecutionStrategy};

    struct Mean;

    impl VectorEstimator for Mean {
        fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
            Ok(vec![sample.iter().sum::<f64>() / sample.len() as f64])
        }
    }

    #[test]
    fn test_jackknife_rejects_single_observation() {
        assert!(matches!(jackknife(&[1.0], &Mean), Err(Error::InvalidInput(_))));
        assert!(matches!(jackknife(&[], &Mean), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_with_engine_matches_default() {
        let sample = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        assert_eq!(
            jackknife(&sample, &Mean).unwrap(),
            jackknife_with_engine(&sample, &Mean, sequential()).unwrap()
        );
    }

    #[test]
    fn test_with_config() {
        let config = JackknifeConfig {
            retain_table: true,
            execution: ExecutionStrategy::Auto,
            ..Default::default()
        };
        let result = jackknife_with_config(&[1.0, 2.0, 3.0], &Mean, &config).unwrap();
        assert_eq!(result.table.as_ref().map(|t| t.n_rows()), Some(3));
    }
}
