//! Cross-crate pipeline tests: draw from a law, summarise, bin.

use approx::assert_relative_eq;
use randstat_distributions::distribution::{Distribution, Exponential, Gaussian};
use randstat_distributions::sampling::Sampler;
use randstat_stats::descriptive::DescriptiveStatistics;
use randstat_stats::histogram::Histogram;
use randstat_stats::proportion::ci95;

#[test]
fn test_exponential_draws_match_law_moments() {
    let mut law = Exponential::new(0.5).unwrap();
    law.set_seed(42);
    let draws = law.sample_n(1_000_000).unwrap();

    let stats = DescriptiveStatistics::new(&draws).unwrap();
    assert_relative_eq!(stats.mean().unwrap(), law.mean().unwrap(), max_relative = 0.01);
    assert_relative_eq!(
        stats.variance().unwrap(),
        law.variance().unwrap(),
        max_relative = 0.02
    );
    // Exponential skewness is 2, excess kurtosis 6; loose Monte Carlo bounds.
    assert_relative_eq!(stats.skewness().unwrap(), 2.0, max_relative = 0.05);
    assert_relative_eq!(stats.kurtosis().unwrap(), 6.0, max_relative = 0.15);
}

#[test]
fn test_gaussian_draws_bin_symmetrically() {
    let mut law = Gaussian::new(0.0, 1.0).unwrap();
    law.set_seed(7);
    let draws = law.sample_n(100_000).unwrap();

    let stats = DescriptiveStatistics::new(&draws).unwrap();
    let hist = Histogram::with_bins(&stats, 8).unwrap();
    let freq = hist.frequencies();

    // The two central bins dominate and the tails are thin.
    let central = freq[3] + freq[4];
    let tails = freq[0] + freq[7];
    assert!(central > 10 * tails);
    assert_eq!(freq.iter().sum::<u64>(), 100_000);
}

#[test]
fn test_median_of_exponential_draws() {
    let mut law = Exponential::new(1.0).unwrap();
    law.set_seed(11);
    let draws = law.sample_n(200_000).unwrap();
    let stats = DescriptiveStatistics::new(&draws).unwrap();

    // Median of Exponential(1) is ln 2.
    assert_relative_eq!(stats.median().unwrap(), f64::ln(2.0), max_relative = 0.01);
}

#[test]
fn test_coverage_of_wald_interval() {
    // Bernoulli(0.3) draws via uniform thresholding; the 95% interval
    // around p_hat should cover 0.3 for this seeded batch.
    let mut law = randstat_distributions::distribution::Uniform::new(0.0, 1.0).unwrap();
    law.set_seed(2024);
    let counts: Vec<f64> = law
        .sample_n(10_000)
        .unwrap()
        .into_iter()
        .map(|u| if u < 0.3 { 1.0 } else { 0.0 })
        .collect();

    let ci = ci95(&counts).unwrap();
    assert!((ci.p_hat - ci.margin..=ci.p_hat + ci.margin).contains(&0.3));
    assert!(ci.margin < 0.01);
}
