//! Moment estimators: sample mean and sample variance

use jackknife_core::{moments, Error, Result, VectorEstimator};

/// Arithmetic mean as a one-parameter estimator
///
/// The mean is a linear statistic, so its jackknife standard error equals
/// the classical `s / sqrt(n)`, which makes it the reference estimator for
/// validating the resampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleMean;

impl VectorEstimator for SampleMean {
    fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
        let mean = moments::mean(sample)
            .ok_or_else(|| Error::numeric_domain("mean of an empty sample").in_column(0))?;
        Ok(vec![mean])
    }

    fn dimension(&self) -> Option<usize> {
        Some(1)
    }

    fn parameter_names(&self) -> Vec<String> {
        vec!["mean".to_string()]
    }

    fn name(&self) -> &str {
        "Mean"
    }
}

/// Which denominator the variance estimator divides by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceKind {
    /// Divide by `n - 1`
    Unbiased,
    /// Divide by `n`
    Population,
}

/// Sample variance as a one-parameter estimator
#[derive(Debug, Clone, Copy)]
pub struct SampleVariance {
    kind: VarianceKind,
}

impl SampleVariance {
    /// Unbiased variance (divides by `n - 1`)
    pub fn unbiased() -> Self {
        Self {
            kind: VarianceKind::Unbiased,
        }
    }

    /// Population variance (divides by `n`), a biased estimator
    pub fn population() -> Self {
        Self {
            kind: VarianceKind::Population,
        }
    }

    pub fn kind(&self) -> VarianceKind {
        self.kind
    }
}

impl Default for SampleVariance {
    fn default() -> Self {
        Self::unbiased()
    }
}

impl VectorEstimator for SampleVariance {
    fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
        let variance = match self.kind {
            VarianceKind::Unbiased => moments::variance(sample),
            VarianceKind::Population => moments::population_variance(sample),
        };
        let variance = variance.ok_or_else(|| {
            Error::numeric_domain(format!(
                "variance undefined for a sample of {} observations",
                sample.len()
            ))
            .in_column(0)
        })?;
        Ok(vec![variance])
    }

    fn dimension(&self) -> Option<usize> {
        Some(1)
    }

    fn parameter_names(&self) -> Vec<String> {
        vec!["variance".to_string()]
    }

    fn name(&self) -> &str {
        match self.kind {
            VarianceKind::Unbiased => "Variance",
            VarianceKind::Population => "PopulationVariance",
        }
    }
}
