//! Geometric distribution (trials until first success).

use crate::distribution::{check_probability, Distribution, DistributionError};
use crate::rng::{Prng, RandomSource};
use crate::sampling::Sampler;

/// Geometric law counting the number of Bernoulli(p) trials up to and
/// including the first success, supported on {1, 2, ...}.
///
/// # Examples
///
/// ```rust
/// use randstat_distributions::distribution::{Distribution, Geometric};
///
/// let g = Geometric::new(0.25).unwrap();
/// assert_eq!(g.mean().unwrap(), 4.0);
/// assert!((g.pdf(2) - 0.1875).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct Geometric<R: RandomSource = Prng> {
    p: f64,
    source: R,
}

impl Geometric<Prng> {
    /// Creates a geometric law with an entropy-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] unless the success
    /// probability lies in (0, 1].
    pub fn new(p: f64) -> Result<Self, DistributionError> {
        Self::with_source(p, Prng::from_entropy())
    }
}

impl<R: RandomSource> Geometric<R> {
    /// Creates a geometric law drawing from the given source.
    pub fn with_source(p: f64, source: R) -> Result<Self, DistributionError> {
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(DistributionError::InvalidParameter { name: "p", value: p });
        }
        Ok(Self { p, source })
    }

    /// Returns the per-trial success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Quantile shared by `sample` and `inverse_cdf`.
    ///
    /// The floor at 1 covers probabilities small enough that the logarithm
    /// ratio rounds to zero.
    fn quantile(&self, prob: f64) -> i64 {
        let trials = ((1.0 - prob).ln() / (1.0 - self.p).ln()).ceil();
        // f64-to-i64 casts saturate, so prob = 1 yields i64::MAX.
        (trials as i64).max(1)
    }
}

impl<R: RandomSource> Sampler for Geometric<R> {
    type Value = i64;

    fn sample(&mut self) -> Result<i64, DistributionError> {
        let u = self.source.next_uniform();
        Ok(self.quantile(u))
    }

    fn set_seed(&mut self, seed: u64) {
        self.source.reseed(seed);
    }
}

impl<R: RandomSource> Distribution for Geometric<R> {
    fn mean(&self) -> Result<f64, DistributionError> {
        Ok(1.0 / self.p)
    }

    fn variance(&self) -> Result<f64, DistributionError> {
        Ok((1.0 - self.p) / (self.p * self.p))
    }

    fn pdf(&self, x: i64) -> f64 {
        if x < 1 {
            0.0
        } else {
            (1.0 - self.p).powf((x - 1) as f64) * self.p
        }
    }

    fn cdf(&self, x: i64) -> f64 {
        if x < 1 {
            0.0
        } else {
            1.0 - (1.0 - self.p).powf(x as f64)
        }
    }

    fn inverse_cdf(&self, p: f64) -> Result<i64, DistributionError> {
        check_probability(p)?;
        Ok(self.quantile(p))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_bad_probability() {
        assert!(Geometric::new(0.0).is_err());
        assert!(Geometric::new(-0.2).is_err());
        assert!(Geometric::new(1.5).is_err());
        assert!(Geometric::new(f64::NAN).is_err());
    }

    #[test]
    fn test_certain_success() {
        let g = Geometric::new(1.0).unwrap();
        assert_eq!(g.mean().unwrap(), 1.0);
        assert_eq!(g.variance().unwrap(), 0.0);
        assert_relative_eq!(g.pdf(1), 1.0);
        assert_eq!(g.inverse_cdf(0.5).unwrap(), 1);
    }

    #[test]
    fn test_moments() {
        let g = Geometric::new(0.2).unwrap();
        assert_relative_eq!(g.mean().unwrap(), 5.0);
        assert_relative_eq!(g.variance().unwrap(), 20.0);
    }

    #[test]
    fn test_pmf_and_cdf() {
        let g = Geometric::new(0.5).unwrap();
        assert_eq!(g.pdf(0), 0.0);
        assert_eq!(g.pdf(-3), 0.0);
        assert_relative_eq!(g.pdf(1), 0.5);
        assert_relative_eq!(g.pdf(3), 0.125);
        assert_eq!(g.cdf(0), 0.0);
        assert_relative_eq!(g.cdf(1), 0.5);
        assert_relative_eq!(g.cdf(3), 0.875);
    }

    #[test]
    fn test_inverse_cdf_floors_at_one() {
        let g = Geometric::new(0.3).unwrap();
        assert_eq!(g.inverse_cdf(0.0).unwrap(), 1);
        assert_eq!(g.inverse_cdf(1e-12).unwrap(), 1);
    }

    #[test]
    fn test_inverse_cdf_matches_cdf_steps() {
        let g = Geometric::new(0.5).unwrap();
        assert_eq!(g.inverse_cdf(0.5).unwrap(), 1);
        assert_eq!(g.inverse_cdf(0.51).unwrap(), 2);
        assert_eq!(g.inverse_cdf(0.875).unwrap(), 3);
        assert_eq!(g.inverse_cdf(0.9).unwrap(), 4);
    }

    #[test]
    fn test_samples_positive_and_converge() {
        let mut g = Geometric::new(0.25).unwrap();
        g.set_seed(42);
        let draws = g.sample_n(100_000).unwrap();
        assert!(draws.iter().all(|&x| x >= 1));
        let mean = draws.iter().sum::<i64>() as f64 / draws.len() as f64;
        assert_relative_eq!(mean, 4.0, epsilon = 0.05);
    }
}
