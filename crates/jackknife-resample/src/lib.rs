//! Jackknife standard errors for vector-valued estimators
//!
//! The jackknife estimates the sampling variability of a statistic by
//! recomputing it on every leave-one-out sub-sample. This crate provides:
//!
//! - [`jackknife`]: standard errors for any [`VectorEstimator`]
//! - [`Jackknife`]: builder with engine choice, variance policy, bias
//!   correction and retained pseudo-estimate tables
//! - [`JackknifeEstimate::confidence_intervals`]: Student-t intervals
//!
//! # Guarantees
//!
//! - Samples with fewer than 2 observations are rejected.
//! - Every leave-one-out estimate is checked for width and finiteness
//!   before it enters the table; failures name the omitted observation.
//! - Negative or non-finite variances are never square-rooted silently;
//!   see [`VariancePolicy`].
//! - Sequential and parallel engines give bit-identical results.
//!
//! # Example
//!
//! ```rust
//! use jackknife_resample::{Jackknife, VariancePolicy};
//! use jackknife_core::execution::sequential;
//! use jackknife_estimators::GammaMoments;
//!
//! let sample = [2.1, 3.4, 1.9, 5.6, 2.8, 4.0, 3.3, 2.2];
//!
//! let result = Jackknife::new(sequential())
//!     .with_variance_policy(VariancePolicy::Reject)
//!     .run(&sample, &GammaMoments)
//!     .unwrap();
//!
//! assert_eq!(result.standard_errors.len(), 2);
//! println!("{result}");
//! ```

pub mod api;
mod interval;
mod jackknife;
mod table;
mod types;
pub mod workspace;

// Re-exports
pub use api::{jackknife, jackknife_with_config, jackknife_with_engine};
pub use interval::{t_critical_value, t_intervals, ConfidenceInterval};
pub use jackknife::{scale_factor, Jackknife, PseudoEstimates, MIN_OBSERVATIONS};
pub use jackknife_core::{Error, JackknifeConfig, Result, VariancePolicy, VectorEstimator};
pub use table::{validate_row, PseudoEstimateTable};
pub use types::JackknifeEstimate;
