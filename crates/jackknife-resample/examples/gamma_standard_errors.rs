//! Jackknife standard errors for a gamma fit by the method of moments
//!
//! Run with:
//! ```text
//! RUST_LOG=debug cargo run -p jackknife-resample --example gamma_standard_errors [config.json]
//! ```
//!
//! The optional argument is a JSON [`JackknifeConfig`], for example
//! `{ "variance_policy": "clamp_to_zero", "retain_table": true }`.

use anyhow::{Context, Result};
use jackknife_core::{JackknifeConfig, VectorEstimator};
use jackknife_estimators::GammaMoments;
use jackknife_resample::jackknife_with_config;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Gamma};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => JackknifeConfig::from_path(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => JackknifeConfig::default(),
    };
    info!(?config, "Loaded configuration");

    let (shape, scale) = (2.0, 3.0);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let gamma = Gamma::new(shape, scale)?;

    println!("True parameters: shape = {shape}, scale = {scale}\n");

    for size in [20, 100, 1_000] {
        let sample: Vec<f64> = (0..size).map(|_| gamma.sample(&mut rng)).collect();
        let result = jackknife_with_config(&sample, &GammaMoments, &config)?;

        print!("{result}");
        for (name, interval) in GammaMoments
            .parameter_names()
            .iter()
            .zip(result.default_intervals()?)
        {
            println!("  {name:<10} {interval}");
        }
        if let Some(ms) = result.compute_time_ms {
            println!("  computed in {ms} ms");
        }
        println!();
    }

    Ok(())
}
