//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use jackknife_core::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Gamma};

pub const EPSILON: f64 = 1e-10;

/// Seeded gamma sample
pub fn gamma_sample(shape: f64, scale: f64, size: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let gamma = Gamma::new(shape, scale).unwrap();
    (0..size).map(|_| gamma.sample(&mut rng)).collect()
}

/// `[mean, sum]` normally, but only `[mean]` when any of `markers` is
/// missing from the sub-sample
pub fn narrows_without(markers: &'static [f64]) -> impl Fn(&[f64]) -> Result<Vec<f64>> + Clone {
    move |sample: &[f64]| {
        let sum: f64 = sample.iter().sum();
        let mean = sum / sample.len() as f64;
        if markers.iter().all(|m| sample.contains(m)) {
            Ok(vec![mean, sum])
        } else {
            Ok(vec![mean])
        }
    }
}

/// Classical standard error of the mean, `s / sqrt(n)`
pub fn standard_error_of_mean(sample: &[f64]) -> f64 {
    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (variance / n).sqrt()
}
