//! Leave-one-out jackknife resampling
//!
//! For a sample of `n` observations and an estimator returning `k`
//! parameters, the jackknife:
//!
//! 1. evaluates the estimator on each of the `n` sub-samples with one
//!    observation removed, storing the results in an `n x k` table;
//! 2. takes the unbiased variance of each column;
//! 3. scales it by `(n - 1)^2 / n`;
//! 4. takes the square root to give a standard error per parameter.
//!
//! The `n` evaluations are independent and run through an
//! [`ExecutionEngine`], so they can be spread over a Rayon pool. Row `i`
//! always holds the estimate with observation `i` removed, and the
//! reduction runs in index order, so results are bit-identical across
//! engines.
//!
//! [`Jackknife::standard_errors`] evaluates only the `n` sub-samples.
//! [`Jackknife::run`] also evaluates the full sample, which bias correction
//! and intervals are centred on.

use crate::table::{validate_row, PseudoEstimateTable};
use crate::types::JackknifeEstimate;
use crate::workspace::with_leave_one_out;
use jackknife_core::{
    validate_confidence_level, Error, ExecutionEngine, JackknifeConfig, Result, VariancePolicy,
    VectorEstimator,
};
use tracing::{debug, instrument};

/// Smallest sample the jackknife variance is defined for
pub const MIN_OBSERVATIONS: usize = 2;

/// Variance inflation factor `(n - 1)^2 / n`
pub fn scale_factor(n_observations: usize) -> f64 {
    let n = n_observations as f64;
    (n - 1.0) * (n - 1.0) / n
}

/// Full-sample estimate together with the pseudo-estimate table
#[derive(Debug, Clone)]
pub struct PseudoEstimates {
    /// Estimator output on the full sample
    pub estimates: Vec<f64>,
    /// One row per omitted observation
    pub table: PseudoEstimateTable,
}

/// Scaled variances and standard errors of a complete table
fn standard_errors_from_table(
    table: &PseudoEstimateTable,
    policy: VariancePolicy,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let factor = scale_factor(table.n_rows());
    let mut variances = Vec::with_capacity(table.n_columns());
    let mut standard_errors = Vec::with_capacity(table.n_columns());

    for (column, variance) in table.column_variances()?.into_iter().enumerate() {
        let scaled = policy.apply(variance * factor, column)?;
        variances.push(scaled);
        standard_errors.push(scaled.sqrt());
    }
    Ok((variances, standard_errors))
}

fn no_parameters<Est: VectorEstimator + ?Sized>(estimator: &Est) -> Error {
    Error::InvalidInput(format!(
        "estimator {} returned no parameters",
        estimator.name()
    ))
}

/// Jackknife engine with configurable execution and variance policy
#[derive(Clone, Debug)]
pub struct Jackknife<E> {
    engine: E,
    config: JackknifeConfig,
}

impl<E> Jackknife<E>
where
    E: ExecutionEngine,
{
    /// Create a new jackknife with default settings
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            config: JackknifeConfig::default(),
        }
    }

    /// Create a jackknife from a validated configuration
    ///
    /// The configuration's `execution` field is ignored here; the engine
    /// passed in decides scheduling.
    pub fn from_config(engine: E, config: JackknifeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { engine, config })
    }

    /// Set the policy for negative scaled variances
    pub fn with_variance_policy(mut self, policy: VariancePolicy) -> Self {
        self.config.variance_policy = policy;
        self
    }

    /// Keep the pseudo-estimate table in the result
    pub fn retain_table(mut self, retain: bool) -> Self {
        self.config.retain_table = retain;
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        assert!(
            validate_confidence_level(confidence_level).is_ok(),
            "Confidence level must be in (0, 1)"
        );
        self.config.confidence_level = confidence_level;
        self
    }

    pub fn config(&self) -> &JackknifeConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Evaluate the estimator on every leave-one-out sub-sample
    ///
    /// The row width is `n_columns` when given, otherwise the estimator's
    /// `dimension()` hint, otherwise the width of row 0. Every row is checked
    /// against it before insertion. When several rows fail, the error for the
    /// lowest omitted index is returned.
    #[instrument(skip(self, sample, estimator), fields(n = sample.len(), estimator = estimator.name()))]
    fn leave_one_out_table<Est>(
        &self,
        sample: &[f64],
        estimator: &Est,
        n_columns: Option<usize>,
    ) -> Result<PseudoEstimateTable>
    where
        Est: VectorEstimator + Sync + ?Sized,
    {
        let n = sample.len();
        if n < MIN_OBSERVATIONS {
            return Err(Error::too_few_observations(MIN_OBSERVATIONS, n));
        }

        debug!(
            "Evaluating {} leave-one-out sub-samples on {} thread(s)",
            n,
            self.engine.num_threads()
        );

        let rows = self.engine.execute_batch(n, |i| {
            with_leave_one_out(sample, i, |sub_sample| estimator.estimate(sub_sample))
        });

        // A failed row 0 is reported by the loop below before k is needed
        let k = match n_columns.or_else(|| estimator.dimension()) {
            Some(k) => k,
            None => rows.first().and_then(|row| row.as_ref().ok()).map_or(0, Vec::len),
        };

        let mut table = PseudoEstimateTable::new(n, k);
        for (omitted_index, row) in rows.into_iter().enumerate() {
            let row = row.map_err(|e| e.at_omitted_index(omitted_index))?;
            if k == 0 {
                return Err(no_parameters(estimator));
            }
            table.insert(omitted_index, &row)?;
        }

        Ok(table)
    }

    /// Evaluate the estimator on the full sample and every leave-one-out
    /// sub-sample
    ///
    /// The full-sample estimate fixes the parameter count `k`; every row is
    /// checked against it before insertion.
    pub fn pseudo_estimates<Est>(&self, sample: &[f64], estimator: &Est) -> Result<PseudoEstimates>
    where
        Est: VectorEstimator + Sync + ?Sized,
    {
        let n = sample.len();
        if n < MIN_OBSERVATIONS {
            return Err(Error::too_few_observations(MIN_OBSERVATIONS, n));
        }

        let estimates = estimator.estimate(sample)?;
        let k = estimates.len();
        if k == 0 {
            return Err(no_parameters(estimator));
        }
        if let Some(expected) = estimator.dimension() {
            validate_row(&estimates, expected, None)?;
        }
        validate_row(&estimates, k, None)?;

        let table = self.leave_one_out_table(sample, estimator, Some(k))?;
        Ok(PseudoEstimates { estimates, table })
    }

    /// Jackknife standard error of each parameter
    ///
    /// Only the leave-one-out sub-samples are evaluated, so the estimator
    /// need not be defined on the full sample.
    pub fn standard_errors<Est>(&self, sample: &[f64], estimator: &Est) -> Result<Vec<f64>>
    where
        Est: VectorEstimator + Sync + ?Sized,
    {
        let table = self.leave_one_out_table(sample, estimator, None)?;
        let (_, standard_errors) = standard_errors_from_table(&table, self.config.variance_policy)?;
        Ok(standard_errors)
    }

    /// Full jackknife: standard errors, variances, bias and bias-corrected
    /// estimates
    #[instrument(skip(self, sample, estimator), fields(n = sample.len(), policy = self.config.variance_policy.name()))]
    pub fn run<Est>(&self, sample: &[f64], estimator: &Est) -> Result<JackknifeEstimate>
    where
        Est: VectorEstimator + Sync + ?Sized,
    {
        let start_time = std::time::Instant::now();

        let PseudoEstimates { estimates, table } = self.pseudo_estimates(sample, estimator)?;
        let (variances, standard_errors) =
            standard_errors_from_table(&table, self.config.variance_policy)?;

        let n = sample.len() as f64;
        let bias: Vec<f64> = table
            .column_means()?
            .iter()
            .zip(&estimates)
            .map(|(&mean, &estimate)| (n - 1.0) * (mean - estimate))
            .collect();
        let bias_corrected: Vec<f64> = estimates
            .iter()
            .zip(&bias)
            .map(|(&estimate, &b)| estimate - b)
            .collect();

        debug!(?standard_errors, ?bias, "Jackknife completed");

        Ok(JackknifeEstimate {
            estimates,
            standard_errors,
            variances,
            bias,
            bias_corrected,
            n_observations: sample.len(),
            parameter_names: estimator.parameter_names(),
            estimator_name: estimator.name().to_string(),
            confidence_level: self.config.confidence_level,
            table: self.config.retain_table.then_some(table),
            compute_time_ms: Some(start_time.elapsed().as_millis() as u64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use jackknife_core::execution::sequential;

    struct Mean;

    impl VectorEstimator for Mean {
        fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
            Ok(vec![sample.iter().sum::<f64>() / sample.len() as f64])
        }
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(scale_factor(2), 0.5);
        assert_relative_eq!(scale_factor(5), 16.0 / 5.0);
    }

    #[test]
    fn test_construction() {
        let jackknife = Jackknife::new(sequential())
            .with_variance_policy(VariancePolicy::ClampToZero)
            .retain_table(true)
            .with_confidence_level(0.9);

        assert_eq!(jackknife.config().variance_policy, VariancePolicy::ClampToZero);
        assert!(jackknife.config().retain_table);
        assert_eq!(jackknife.config().confidence_level, 0.9);
    }

    #[test]
    #[should_panic]
    fn test_invalid_confidence_level() {
        let _ = Jackknife::new(sequential()).with_confidence_level(1.5);
    }

    #[test]
    fn test_from_config_validates() {
        let config = JackknifeConfig {
            confidence_level: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Jackknife::from_config(sequential(), config),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_pseudo_estimates_rows_match_omitted_index() {
        let sample = [1.0, 2.0, 3.0, 4.0];
        let PseudoEstimates { estimates, table } = Jackknife::new(sequential())
            .pseudo_estimates(&sample, &Mean)
            .unwrap();

        assert_eq!(estimates, vec![2.5]);
        assert_eq!(table.n_rows(), 4);
        assert_eq!(table.row(0), Some(&[3.0][..]));
        assert_eq!(table.row(3), Some(&[2.0][..]));
    }

    #[test]
    fn test_mean_standard_error_closed_form() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let se = Jackknife::new(sequential())
            .standard_errors(&sample, &Mean)
            .unwrap();
        // var = 2.5, sqrt(2.5 / 5)
        assert_relative_eq!(se[0], 0.5f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_run_reports_bias() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = Jackknife::new(sequential())
            .retain_table(true)
            .run(&sample, &Mean)
            .unwrap();

        assert_eq!(result.n_observations, 5);
        assert_relative_eq!(result.bias[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.bias_corrected[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(result.variances[0], 0.5, epsilon = 1e-12);
        assert!(result.table.is_some());
        assert!(result.compute_time_ms.is_some());
    }

    #[test]
    fn test_table_not_retained_by_default() {
        let result = Jackknife::new(sequential())
            .run(&[1.0, 2.0, 3.0], &Mean)
            .unwrap();
        assert!(result.table.is_none());
    }

    #[test]
    fn test_empty_estimate_rejected() {
        struct Nothing;
        impl VectorEstimator for Nothing {
            fn estimate(&self, _sample: &[f64]) -> Result<Vec<f64>> {
                Ok(Vec::new())
            }
        }
        let err = Jackknife::new(sequential())
            .run(&[1.0, 2.0, 3.0], &Nothing)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_dimension_hint_checked_on_full_sample() {
        struct Liar;
        impl VectorEstimator for Liar {
            fn estimate(&self, _sample: &[f64]) -> Result<Vec<f64>> {
                Ok(vec![1.0])
            }
            fn dimension(&self) -> Option<usize> {
                Some(2)
            }
        }
        let err = Jackknife::new(sequential())
            .run(&[1.0, 2.0, 3.0], &Liar)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ContractViolation { omitted_index: None, expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn test_standard_errors_skip_full_sample() {
        // Defined on every sub-sample of size n - 1 but not on the full sample
        struct SubSampleOnly;
        impl VectorEstimator for SubSampleOnly {
            fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
                if sample.len() == 4 {
                    return Err(Error::numeric_domain("full sample").in_column(0));
                }
                Ok(vec![sample.iter().sum::<f64>()])
            }
        }

        let jackknife = Jackknife::new(sequential());
        let se = jackknife
            .standard_errors(&[1.0, 2.0, 3.0, 4.0], &SubSampleOnly)
            .unwrap();
        assert!(se[0] > 0.0);
        assert!(matches!(
            jackknife.run(&[1.0, 2.0, 3.0, 4.0], &SubSampleOnly),
            Err(Error::NumericDomain { omitted_index: None, .. })
        ));
    }

    #[test]
    fn test_width_taken_from_dimension_hint_before_row_zero() {
        struct Narrow;
        impl VectorEstimator for Narrow {
            fn estimate(&self, _sample: &[f64]) -> Result<Vec<f64>> {
                Ok(vec![1.0])
            }
            fn dimension(&self) -> Option<usize> {
                Some(2)
            }
        }
        let err = Jackknife::new(sequential())
            .standard_errors(&[1.0, 2.0, 3.0], &Narrow)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ContractViolation { omitted_index: Some(0), expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn test_empty_rows_rejected_without_full_sample() {
        struct Nothing;
        impl VectorEstimator for Nothing {
            fn estimate(&self, _sample: &[f64]) -> Result<Vec<f64>> {
                Ok(Vec::new())
            }
        }
        let err = Jackknife::new(sequential())
            .standard_errors(&[1.0, 2.0, 3.0], &Nothing)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
