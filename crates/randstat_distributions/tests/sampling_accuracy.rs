//! Statistical accuracy tests for the sampling layer.
//!
//! Large seeded batches are compared against analytical moments. Seeds are
//! fixed, so these assertions are deterministic despite the sample sizes.

use approx::assert_relative_eq;
use randstat_distributions::distribution::{
    Distribution, Exponential, Gaussian, Geometric, Uniform,
};
use randstat_distributions::sampling::{RejectionSampler, Sampler};

fn moments(draws: &[f64]) -> (f64, f64) {
    let n = draws.len() as f64;
    let mean = draws.iter().sum::<f64>() / n;
    let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var)
}

#[test]
fn test_exponential_million_draw_moments() {
    let mut law = Exponential::new(0.5).unwrap();
    law.set_seed(42);
    let draws = law.sample_n(1_000_000).unwrap();
    let (mean, var) = moments(&draws);

    // Mean 2 within 1%, variance 4 within 2%.
    assert_relative_eq!(mean, 2.0, max_relative = 0.01);
    assert_relative_eq!(var, 4.0, max_relative = 0.02);
}

#[test]
fn test_gaussian_empirical_quantiles() {
    let mut law = Gaussian::new(1.0, 2.0).unwrap();
    law.set_seed(2024);
    let mut draws = law.sample_n(500_000).unwrap();
    draws.sort_by(|a, b| a.total_cmp(b));

    let empirical = |p: f64| draws[(p * (draws.len() - 1) as f64) as usize];
    assert_relative_eq!(empirical(0.5), 1.0, epsilon = 0.02);
    assert_relative_eq!(
        empirical(0.975),
        law.inverse_cdf(0.975).unwrap(),
        epsilon = 0.05
    );
}

#[test]
fn test_geometric_mean_matches_law() {
    let mut law = Geometric::new(0.2).unwrap();
    law.set_seed(7);
    let draws = law.sample_n(500_000).unwrap();
    let mean = draws.iter().sum::<i64>() as f64 / draws.len() as f64;
    assert_relative_eq!(mean, 5.0, max_relative = 0.01);
}

#[test]
fn test_rejection_sampler_parabolic_density() {
    // Epanechnikov density f(x) = 0.75 (1 - x^2) on [-1, 1]:
    // mean 0, variance 1/5.
    let proposal = Uniform::new(-1.0, 1.0).unwrap();
    let mut sampler =
        RejectionSampler::new(|x: f64| 0.75 * (1.0 - x * x), proposal, 1.5).unwrap();
    sampler.set_seed(42);

    let draws = sampler.sample_n(200_000).unwrap();
    let (mean, var) = moments(&draws);
    assert_relative_eq!(mean, 0.0, epsilon = 5e-3);
    assert_relative_eq!(var, 0.2, max_relative = 0.02);
}

#[test]
fn test_seeded_batches_are_reproducible_across_laws() {
    let mut a = Gaussian::new(0.0, 1.0).unwrap();
    let mut b = Gaussian::new(0.0, 1.0).unwrap();
    a.set_seed(123);
    b.set_seed(123);
    assert_eq!(a.sample_n(1_000).unwrap(), b.sample_n(1_000).unwrap());
}
