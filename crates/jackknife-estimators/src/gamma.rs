//! Method-of-moments fit of a gamma distribution
//!
//! A gamma distribution with shape `a` and scale `s` has mean `a * s` and
//! variance `a * s^2`. Equating those to the sample mean `m` and the
//! unbiased sample variance `v` gives
//!
//! ```text
//! scale = v / m
//! shape = m / scale = m^2 / v
//! ```

use jackknife_core::{moments, Error, Result, VectorEstimator};

/// Column holding the shape estimate
pub const SHAPE: usize = 0;
/// Column holding the scale estimate
pub const SCALE: usize = 1;

/// Gamma shape and scale by the method of moments
///
/// Returns `[shape, scale]`. Fails with a numeric domain error when the
/// sample has fewer than 2 observations, when its mean is zero (the scale
/// divides by it) or when its variance is zero (the shape divides by it).
#[derive(Debug, Clone, Copy, Default)]
pub struct GammaMoments;

impl GammaMoments {
    pub fn new() -> Self {
        Self
    }

    /// Fit and return `(shape, scale)` directly
    pub fn fit(&self, sample: &[f64]) -> Result<(f64, f64)> {
        if sample.len() < 2 {
            return Err(Error::numeric_domain(format!(
                "gamma moments need at least 2 observations, got {}",
                sample.len()
            )));
        }
        // Both are Some for len >= 2
        let (Some(mean), Some(variance)) = (moments::mean(sample), moments::variance(sample)) else {
            return Err(Error::numeric_domain("sample moments undefined"));
        };

        if mean == 0.0 {
            return Err(Error::numeric_domain("sample mean is zero, scale = variance / mean is undefined")
                .in_column(SCALE));
        }
        if variance == 0.0 {
            return Err(Error::numeric_domain("sample variance is zero, shape = mean^2 / variance is undefined")
                .in_column(SHAPE));
        }

        let scale = variance / mean;
        let shape = mean / scale;

        if !scale.is_finite() {
            return Err(Error::numeric_domain(format!("scale estimate is {scale}")).in_column(SCALE));
        }
        if !shape.is_finite() {
            return Err(Error::numeric_domain(format!("shape estimate is {shape}")).in_column(SHAPE));
        }
        Ok((shape, scale))
    }
}

impl VectorEstimator for GammaMoments {
    fn estimate(&self, sample: &[f64]) -> Result<Vec<f64>> {
        let (shape, scale) = self.fit(sample)?;
        Ok(vec![shape, scale])
    }

    fn dimension(&self) -> Option<usize> {
        Some(2)
    }

    fn parameter_names(&self) -> Vec<String> {
        vec!["shape".to_string(), "scale".to_string()]
    }

    fn name(&self) -> &str {
        "GammaMoments"
    }
}
