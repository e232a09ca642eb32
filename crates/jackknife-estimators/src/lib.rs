//! Plug-in estimators for jackknife resampling
//!
//! Every estimator here implements [`VectorEstimator`] and reports
//! undefined operations as numeric domain errors naming the affected
//! parameter column:
//!
//! - [`SampleMean`]: one parameter, the arithmetic mean
//! - [`SampleVariance`]: one parameter, unbiased or population variance
//! - [`GammaMoments`]: shape and scale of a gamma fit by the method of moments
//! - [`FnEstimator`]: any closure `&[f64] -> Result<Vec<f64>>`
//!
//! # Example
//!
//! ```rust
//! use jackknife_estimators::{GammaMoments, VectorEstimator};
//!
//! let sample = [2.1, 3.4, 1.9, 5.6, 2.8, 4.0];
//! let fit = GammaMoments.estimate(&sample).unwrap();
//! assert_eq!(fit.len(), 2);
//! assert!(fit.iter().all(|&p| p > 0.0));
//! ```

mod closure;
pub mod gamma;
mod moments;

pub use closure::{closure_estimator, scalar_estimator, FnEstimator};
pub use gamma::GammaMoments;
pub use jackknife_core::VectorEstimator;
pub use moments::{SampleMean, SampleVariance, VarianceKind};
