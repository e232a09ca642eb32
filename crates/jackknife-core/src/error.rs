//! Error types for jackknife resampling
//!
//! Provides a unified error type for all jackknife-stats crates. Every
//! failure raised while evaluating a leave-one-out sub-sample carries the
//! omitted observation index, and column-level failures carry the parameter
//! column, so a failing call can be diagnosed from the error alone.

use thiserror::Error;

/// Core error type for jackknife operations
#[derive(Error, Debug)]
pub enum Error {
    /// Out-of-range setting, such as a confidence level outside (0, 1)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An estimator returned a vector whose width disagrees with the
    /// established parameter count
    #[error(
        "Contract violation{}: estimator returned {actual} values, expected {expected}",
        omitted_suffix(.omitted_index)
    )]
    ContractViolation {
        /// Observation omitted when the bad row was produced (`None` for the full sample)
        omitted_index: Option<usize>,
        expected: usize,
        actual: usize,
    },

    /// A mathematically undefined operation (division by zero, negative
    /// variance, non-finite estimate)
    #[error("Numeric domain error{}: {message}", location_suffix(.omitted_index, .column))]
    NumericDomain {
        message: String,
        omitted_index: Option<usize>,
        column: Option<usize>,
    },

    /// Any other estimator failure, tagged with the omitted observation
    #[error("Estimator failed with observation {omitted_index} omitted: {source}")]
    Estimator {
        omitted_index: usize,
        #[source]
        source: Box<Error>,
    },

    /// Numerical computation error outside the estimator boundary
    #[error("Computation error: {0}")]
    Computation(String),

    /// Thread pool could not be built
    #[error("Execution error: {0}")]
    Execution(String),

    /// Feature not available
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

fn omitted_suffix(omitted_index: &Option<usize>) -> String {
    match omitted_index {
        Some(i) => format!(" (observation {i} omitted)"),
        None => " (full sample)".to_string(),
    }
}

fn location_suffix(omitted_index: &Option<usize>, column: &Option<usize>) -> String {
    match (omitted_index, column) {
        (Some(i), Some(c)) => format!(" (observation {i} omitted, column {c})"),
        (Some(i), None) => format!(" (observation {i} omitted)"),
        (None, Some(c)) => format!(" (column {c})"),
        (None, None) => String::new(),
    }
}

impl Error {
    /// Create a numeric domain error with no location attached yet
    pub fn numeric_domain(message: impl Into<String>) -> Self {
        Self::NumericDomain {
            message: message.into(),
            omitted_index: None,
            column: None,
        }
    }

    /// Create a contract violation for a row of the wrong width
    pub fn contract_violation(omitted_index: Option<usize>, expected: usize, actual: usize) -> Self {
        Self::ContractViolation {
            omitted_index,
            expected,
            actual,
        }
    }

    /// Create an error for a sample that is too short
    pub fn too_few_observations(required: usize, actual: usize) -> Self {
        Self::InvalidInput(format!(
            "need at least {required} observations, got {actual}"
        ))
    }

    /// Attach a parameter column to a numeric domain error
    ///
    /// Other error kinds are returned unchanged.
    pub fn in_column(self, column: usize) -> Self {
        match self {
            Self::NumericDomain {
                message,
                omitted_index,
                column: None,
            } => Self::NumericDomain {
                message,
                omitted_index,
                column: Some(column),
            },
            other => other,
        }
    }

    /// Attach the omitted observation index to an estimator failure
    ///
    /// Numeric domain errors and contract violations keep their kind and
    /// gain the index. Every other kind is wrapped in [`Error::Estimator`]
    /// so the index is never lost.
    pub fn at_omitted_index(self, index: usize) -> Self {
        match self {
            Self::NumericDomain {
                message,
                omitted_index: None,
                column,
            } => Self::NumericDomain {
                message,
                omitted_index: Some(index),
                column,
            },
            Self::ContractViolation {
                omitted_index: None,
                expected,
                actual,
            } => Self::ContractViolation {
                omitted_index: Some(index),
                expected,
                actual,
            },
            located @ (Self::NumericDomain { .. }
            | Self::ContractViolation { .. }
            | Self::Estimator { .. }) => located,
            other => Self::Estimator {
                omitted_index: index,
                source: Box::new(other),
            },
        }
    }

    /// The omitted observation index this error refers to, if any
    pub fn omitted_index(&self) -> Option<usize> {
        match self {
            Self::ContractViolation { omitted_index, .. }
            | Self::NumericDomain { omitted_index, .. } => *omitted_index,
            Self::Estimator { omitted_index, .. } => Some(*omitted_index),
            _ => None,
        }
    }
}
