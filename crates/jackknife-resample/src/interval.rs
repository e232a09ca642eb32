//! Student-t confidence intervals from jackknife standard errors

use jackknife_core::{validate_confidence_level, Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;

/// Two-sided interval around one jackknife estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    /// Full-sample estimate the interval is centred on
    pub estimate: f64,
    /// Nominal coverage in (0, 1)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// `estimate ± critical_value * standard_error`
    pub fn symmetric(
        estimate: f64,
        standard_error: f64,
        critical_value: f64,
        confidence_level: f64,
    ) -> Self {
        let half_width = critical_value * standard_error;
        Self::new(
            estimate - half_width,
            estimate + half_width,
            estimate,
            confidence_level,
        )
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Half the width
    pub fn margin_of_error(&self) -> f64 {
        0.5 * self.width()
    }

    /// Closed-interval membership
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Two-sided Student-t critical value with `degrees_of_freedom`
pub fn t_critical_value(confidence_level: f64, degrees_of_freedom: f64) -> Result<f64> {
    validate_confidence_level(confidence_level)?;
    if degrees_of_freedom <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "t interval needs positive degrees of freedom, got {degrees_of_freedom}"
        )));
    }
    let t_dist = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|e| Error::Computation(format!("Student-t with {degrees_of_freedom} df: {e}")))?;
    Ok(t_dist.inverse_cdf(0.5 + confidence_level / 2.0))
}

/// Intervals `estimate ± t * se` for each parameter
///
/// The jackknife variance has `n - 1` degrees of freedom.
pub fn t_intervals(
    estimates: &[f64],
    standard_errors: &[f64],
    n_observations: usize,
    confidence_level: f64,
) -> Result<Vec<ConfidenceInterval>> {
    if estimates.len() != standard_errors.len() {
        return Err(Error::InvalidInput(format!(
            "Size mismatch in confidence intervals: {} estimates, {} standard errors",
            estimates.len(),
            standard_errors.len()
        )));
    }
    let critical_value = t_critical_value(
        confidence_level,
        n_observations.saturating_sub(1) as f64,
    )?;

    Ok(estimates
        .iter()
        .zip(standard_errors)
        .map(|(&estimate, &se)| {
            ConfidenceInterval::symmetric(estimate, se, critical_value, confidence_level)
        })
        .collect())
}
