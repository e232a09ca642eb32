//! Core traits and types for jackknife resampling
//!
//! This crate provides the pieces shared by the estimator and resampler
//! crates:
//!
//! - [`Error`] and [`Result`]: one error type for the whole workspace
//! - [`execution`]: sequential and Rayon-backed engines for evaluating the
//!   leave-one-out sub-samples
//! - [`VectorEstimator`]: the plug-in boundary for estimators
//! - [`moments`]: sample mean and variance helpers
//! - [`JackknifeConfig`]: JSON-loadable run settings
//!
//! # Example
//!
//! ```rust
//! use jackknife_core::{execution::{sequential, ExecutionEngine}, moments};
//!
//! let engine = sequential();
//! let data = [1.0, 2.0, 3.0, 4.0];
//! let means = engine.execute_batch(data.len(), |i| {
//!     let rest: Vec<f64> = data.iter().enumerate()
//!         .filter(|&(j, _)| j != i)
//!         .map(|(_, &x)| x)
//!         .collect();
//!     moments::mean(&rest)
//! });
//! assert_eq!(means.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod moments;
pub mod traits;

// Re-export core types
pub use config::{validate_confidence_level, JackknifeConfig, VariancePolicy, DEFAULT_CONFIDENCE_LEVEL};
pub use error::{Error, Result};
pub use execution::{
    auto_engine, sequential, DynamicEngine, ExecutionEngine, ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};
pub use traits::VectorEstimator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
    #[cfg(feature = "parallel")]
    pub use crate::execution::{parallel, ParallelEngine};
    pub use crate::{JackknifeConfig, Result, VariancePolicy, VectorEstimator};
}
