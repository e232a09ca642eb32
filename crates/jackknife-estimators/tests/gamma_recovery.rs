//! Tests that the method-of-moments fit recovers known gamma parameters

use approx::assert_relative_eq;
use jackknife_estimators::{GammaMoments, SampleMean, SampleVariance, VectorEstimator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Gamma};

fn gamma_sample(shape: f64, scale: f64, size: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let gamma = Gamma::new(shape, scale).unwrap();
    (0..size).map(|_| gamma.sample(&mut rng)).collect()
}

#[test]
fn test_recovers_parameters_from_large_sample() {
    for &(shape, scale) in &[(2.0, 3.0), (0.5, 1.0), (9.0, 0.5)] {
        let data = gamma_sample(shape, scale, 50_000, 7);
        let (shape_hat, scale_hat) = GammaMoments.fit(&data).unwrap();

        assert_relative_eq!(shape_hat, shape, max_relative = 0.1);
        assert_relative_eq!(scale_hat, scale, max_relative = 0.1);
    }
}

#[test]
fn test_fit_consistent_with_moment_estimators() {
    let data = gamma_sample(3.0, 2.0, 500, 11);

    let mean = SampleMean.estimate(&data).unwrap()[0];
    let variance = SampleVariance::unbiased().estimate(&data).unwrap()[0];
    let fit = GammaMoments.estimate(&data).unwrap();

    assert_relative_eq!(fit[0], mean * mean / variance, max_relative = 1e-12);
    assert_relative_eq!(fit[1], variance / mean, max_relative = 1e-12);
}

#[test]
fn test_scale_equivariance() {
    // Multiplying the data by c multiplies the scale by c and keeps the shape
    let data = gamma_sample(2.5, 1.0, 200, 3);
    let scaled: Vec<f64> = data.iter().map(|&x| 4.0 * x).collect();

    let (shape, scale) = GammaMoments.fit(&data).unwrap();
    let (shape_scaled, scale_scaled) = GammaMoments.fit(&scaled).unwrap();

    assert_relative_eq!(shape_scaled, shape, max_relative = 1e-10);
    assert_relative_eq!(scale_scaled, 4.0 * scale, max_relative = 1e-10);
}
