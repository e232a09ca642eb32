//! Sample moments used by estimators and by the jackknife aggregation
//!
//! All functions shift the data by its first element before accumulating.
//! This keeps the result exact for constant data (every deviation is
//! exactly zero) and reduces cancellation when values share a large offset.

/// Arithmetic mean of a slice
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use jackknife_core::moments::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    let shift = *data.first()?;
    let offset = data.iter().map(|&x| x - shift).sum::<f64>() / data.len() as f64;
    Some(shift + offset)
}

/// Sum of squared deviations from the mean
fn sum_of_squares(data: &[f64]) -> Option<f64> {
    let shift = *data.first()?;
    let offset = data.iter().map(|&x| x - shift).sum::<f64>() / data.len() as f64;
    Some(
        data.iter()
            .map(|&x| {
                let diff = x - shift - offset;
                diff * diff
            })
            .sum(),
    )
}

/// Unbiased sample variance (divides by `n - 1`)
///
/// Returns `None` for slices with fewer than 2 elements.
///
/// # Examples
///
/// ```rust
/// use jackknife_core::moments::variance;
///
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(2.5));
/// assert_eq!(variance(&[1.0]), None);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    sum_of_squares(data).map(|ss| ss / (data.len() - 1) as f64)
}

/// Population variance (divides by `n`)
///
/// Returns `None` for an empty slice.
pub fn population_variance(data: &[f64]) -> Option<f64> {
    sum_of_squares(data).map(|ss| ss / data.len() as f64)
}

/// Sample standard deviation
///
/// Returns `None` for slices with fewer than 2 elements.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}
