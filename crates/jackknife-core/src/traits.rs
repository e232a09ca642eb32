//! Core estimator trait
//!
//! The jackknife treats an estimator as a black box mapping a sample to a
//! fixed-width vector of parameter estimates. Concrete estimators live in
//! `jackknife-estimators`; anything implementing [`VectorEstimator`] can be
//! resampled.

use crate::Result;

/// An estimator producing a fixed number of parameter estimates
///
/// Implementations must return vectors of the same width for every input
/// they accept, and report undefined operations as
/// [`Error::NumericDomain`](crate::Error::NumericDomain) rather than
/// returning NaN.
///
/// # Example
///
/// ```rust
/// use jackknife_core::{Error, Result, VectorEstimator};
///
/// struct Range;
///
/// impl VectorEstimator for Range {
///     fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
///         let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
///         let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
///         if sample.is_empty() {
///             return Err(Error::numeric_domain("range of an empty sample"));
///         }
///         Ok(vec![max - min])
///     }
///
///     fn dimension(&self) -> Option<usize> {
///         Some(1)
///     }
/// }
///
/// assert_eq!(Range.estimate(&[3.0, 1.0, 4.0]).unwrap(), vec![3.0]);
/// ```
pub trait VectorEstimator {
    /// Estimate the parameters from the given sample
    fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>>;

    /// Number of parameters, when known ahead of time
    fn dimension(&self) -> Option<usize> {
        None
    }

    /// Human-readable parameter names, one per column
    ///
    /// An empty vector means the parameters are unnamed.
    fn parameter_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Human-readable name of the estimator
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<E: VectorEstimator + ?Sized> VectorEstimator for &E {
    fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
        (**self).estimate(sample)
    }

    fn dimension(&self) -> Option<usize> {
        (**self).dimension()
    }

    fn parameter_names(&self) -> Vec<String> {
        (**self).parameter_names()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<E: VectorEstimator + ?Sized> VectorEstimator for Box<E> {
    fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
        (**self).estimate(sample)
    }

    fn dimension(&self) -> Option<usize> {
        (**self).dimension()
    }

    fn parameter_names(&self) -> Vec<String> {
        (**self).parameter_names()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
