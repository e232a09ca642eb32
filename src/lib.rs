//! Jackknife resampling toolkit
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`core`]: errors, execution engines, configuration and the
//!   [`VectorEstimator`] trait
//! - [`estimators`]: mean, variance and gamma method-of-moments estimators
//! - [`resample`]: the jackknife itself
//!
//! # Example
//!
//! ```rust
//! use jackknife_stats::prelude::*;
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let se = jackknife(&sample, &SampleMean).unwrap();
//! assert!((se[0] - 0.5f64.sqrt()).abs() < 1e-12);
//! ```

pub use jackknife_core as core;
pub use jackknife_estimators as estimators;
pub use jackknife_resample as resample;

pub use jackknife_core::{
    DynamicEngine, Error, ExecutionEngine, ExecutionStrategy, JackknifeConfig, Result,
    VariancePolicy, VectorEstimator,
};
pub use jackknife_estimators::{GammaMoments, SampleMean, SampleVariance};
pub use jackknife_resample::{
    jackknife, jackknife_with_config, jackknife_with_engine, ConfidenceInterval, Jackknife,
    JackknifeEstimate, PseudoEstimateTable,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use jackknife_core::prelude::*;
    pub use jackknife_estimators::{
        closure_estimator, scalar_estimator, GammaMoments, SampleMean, SampleVariance,
    };
    pub use jackknife_resample::{
        jackknife, jackknife_with_config, jackknife_with_engine, ConfidenceInterval, Jackknife,
        JackknifeEstimate,
    };
}
