//! Result types for jackknife estimation

use crate::interval::{t_intervals, ConfidenceInterval};
use crate::table::PseudoEstimateTable;
use jackknife_core::Result;
use std::fmt;

/// Result of a jackknife run
#[derive(Debug, Clone)]
pub struct JackknifeEstimate {
    /// Estimator output on the full sample
    pub estimates: Vec<f64>,
    /// Jackknife standard error of each parameter
    pub standard_errors: Vec<f64>,
    /// Scaled jackknife variance `(n - 1)^2 / n * var(column)` of each parameter
    pub variances: Vec<f64>,
    /// Jackknife bias estimate `(n - 1) * (mean(column) - estimate)`
    pub bias: Vec<f64>,
    /// `estimate - bias` for each parameter
    pub bias_corrected: Vec<f64>,
    /// Number of observations in the sample
    pub n_observations: usize,
    /// Parameter names reported by the estimator (may be empty)
    pub parameter_names: Vec<String>,
    /// Name of the estimator
    pub estimator_name: String,
    /// Confidence level used by [`JackknifeEstimate::default_intervals`]
    pub confidence_level: f64,
    /// Pseudo-estimate table, when retained
    pub table: Option<PseudoEstimateTable>,
    /// Time taken for the run in milliseconds
    pub compute_time_ms: Option<u64>,
}

impl JackknifeEstimate {
    /// Number of parameters
    pub fn n_parameters(&self) -> usize {
        self.estimates.len()
    }

    /// Label for parameter `column`
    pub fn parameter_name(&self, column: usize) -> String {
        self.parameter_names
            .get(column)
            .cloned()
            .unwrap_or_else(|| format!("theta[{column}]"))
    }

    /// Student-t confidence intervals with `n - 1` degrees of freedom
    pub fn confidence_intervals(&self, confidence_level: f64) -> Result<Vec<ConfidenceInterval>> {
        t_intervals(
            &self.estimates,
            &self.standard_errors,
            self.n_observations,
            confidence_level,
        )
    }

    /// Confidence intervals at the configured level
    pub fn default_intervals(&self) -> Result<Vec<ConfidenceInterval>> {
        self.confidence_intervals(self.confidence_level)
    }

    /// Jackknife pseudo-values `n * estimate - (n - 1) * row`, one row per
    /// omitted observation
    ///
    /// Returns `None` when the table was not retained.
    pub fn pseudo_values(&self) -> Option<Vec<Vec<f64>>> {
        let table = self.table.as_ref()?;
        let n = self.n_observations as f64;
        Some(
            table
                .rows()
                .map(|(_, row)| {
                    row.iter()
                        .zip(&self.estimates)
                        .map(|(&value, &estimate)| n * estimate - (n - 1.0) * value)
                        .collect()
                })
                .collect(),
        )
    }
}

impl fmt::Display for JackknifeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Jackknife ({}, n = {})",
            self.estimator_name, self.n_observations
        )?;
        for column in 0..self.n_parameters() {
            writeln!(
                f,
                "  {:<10} estimate {:>12.6}  se {:>12.6}  bias {:>12.6}  corrected {:>12.6}",
                self.parameter_name(column),
                self.estimates[column],
                self.standard_errors[column],
                self.bias[column],
                self.bias_corrected[column],
            )?;
        }
        Ok(())
    }
}
