//! Closure adapter for ad-hoc estimators

use jackknife_core::{Result, VectorEstimator};

/// Estimator wrapping a closure
///
/// This allows resampling any function `&[f64] -> Result<Vec<f64>>`
/// without declaring a type. The width is not known up front; the
/// resampler learns it from the full-sample estimate.
#[derive(Clone)]
pub struct FnEstimator<F> {
    estimate_fn: F,
    name: String,
    parameter_names: Vec<String>,
}

impl<F> FnEstimator<F>
where
    F: Fn(&[f64]) -> Result<Vec<f64>>,
{
    pub fn new(estimate_fn: F) -> Self {
        Self {
            estimate_fn,
            name: "closure".to_string(),
            parameter_names: Vec::new(),
        }
    }

    /// Set the name used in reports
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the parameter names used in reports
    pub fn with_parameter_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_names = names.into_iter().map(Into::into).collect();
        self
    }
}

impl<F> VectorEstimator for FnEstimator<F>
where
    F: Fn(&[f64]) -> Result<Vec<f64>>,
{
    fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
        (self.estimate_fn)(sample)
    }

    fn parameter_names(&self) -> Vec<String> {
        self.parameter_names.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnEstimator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEstimator")
            .field("name", &self.name)
            .field("parameter_names", &self.parameter_names)
            .finish_non_exhaustive()
    }
}

/// Wrap a closure as a [`VectorEstimator`]
pub fn closure_estimator<F>(f: F) -> FnEstimator<F>
where
    F: Fn(&[f64]) -> Result<Vec<f64>>,
{
    FnEstimator::new(f)
}

/// Wrap a closure returning a single value as a one-parameter estimator
pub fn scalar_estimator<F>(f: F) -> FnEstimator<impl Fn(&[f64]) -> Result<Vec<f64>> + Clone>
where
    F: Fn(&[f64]) -> Result<f64> + Clone,
{
    FnEstimator::new(move |sample: &[f64]| f(sample).map(|value| vec![value]))
}
