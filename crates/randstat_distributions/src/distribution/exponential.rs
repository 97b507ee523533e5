//! Exponential distribution parameterised by rate.

use crate::distribution::{check_probability, Distribution, DistributionError};
use crate::rng::{Prng, RandomSource};
use crate::sampling::Sampler;

/// Exponential law with rate `lambda` (mean `1 / lambda`).
///
/// # Examples
///
/// ```rust
/// use randstat_distributions::distribution::{Distribution, Exponential};
///
/// let e = Exponential::new(2.0).unwrap();
/// assert_eq!(e.mean().unwrap(), 0.5);
/// assert!((e.cdf(0.5) - (1.0 - (-1.0f64).exp())).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct Exponential<R: RandomSource = Prng> {
    lambda: f64,
    source: R,
}

impl Exponential<Prng> {
    /// Creates an exponential law with an entropy-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] unless `lambda` is
    /// finite and strictly positive.
    pub fn new(lambda: f64) -> Result<Self, DistributionError> {
        Self::with_source(lambda, Prng::from_entropy())
    }
}

impl<R: RandomSource> Exponential<R> {
    /// Creates an exponential law drawing from the given source.
    pub fn with_source(lambda: f64, source: R) -> Result<Self, DistributionError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(DistributionError::InvalidParameter {
                name: "lambda",
                value: lambda,
            });
        }
        Ok(Self { lambda, source })
    }

    /// Returns the rate parameter.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl<R: RandomSource> Sampler for Exponential<R> {
    type Value = f64;

    /// Inverse-transform draw; `1 - u` keeps the logarithm away from zero
    /// since `next_uniform` never returns 1.
    fn sample(&mut self) -> Result<f64, DistributionError> {
        let u = self.source.next_uniform();
        Ok(-(1.0 - u).ln() / self.lambda)
    }

    fn set_seed(&mut self, seed: u64) {
        self.source.reseed(seed);
    }
}

impl<R: RandomSource> Distribution for Exponential<R> {
    fn mean(&self) -> Result<f64, DistributionError> {
        Ok(1.0 / self.lambda)
    }

    fn variance(&self) -> Result<f64, DistributionError> {
        Ok(1.0 / (self.lambda * self.lambda))
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.lambda * (-self.lambda * x).exp()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            1.0 - (-self.lambda * x).exp()
        }
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64, DistributionError> {
        check_probability(p)?;
        Ok(-(1.0 - p).ln() / self.lambda)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_bad_rate() {
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-1.0).is_err());
        assert!(Exponential::new(f64::NAN).is_err());
    }

    #[test]
    fn test_moments() {
        let e = Exponential::new(0.5).unwrap();
        assert_relative_eq!(e.mean().unwrap(), 2.0);
        assert_relative_eq!(e.variance().unwrap(), 4.0);
    }

    #[test]
    fn test_pdf_and_cdf() {
        let e = Exponential::new(1.0).unwrap();
        assert_eq!(e.pdf(-1.0), 0.0);
        assert_relative_eq!(e.pdf(0.0), 1.0);
        assert_relative_eq!(e.pdf(1.0), (-1.0f64).exp());
        assert_eq!(e.cdf(-0.5), 0.0);
        assert_eq!(e.cdf(0.0), 0.0);
        assert_relative_eq!(e.cdf(f64::ln(2.0)), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_inverse_cdf() {
        let e = Exponential::new(2.0).unwrap();
        assert_eq!(e.inverse_cdf(0.0).unwrap(), 0.0);
        assert_relative_eq!(e.inverse_cdf(0.5).unwrap(), f64::ln(2.0) / 2.0, epsilon = 1e-15);
        assert_eq!(e.inverse_cdf(1.0).unwrap(), f64::INFINITY);
        assert!(e.inverse_cdf(2.0).is_err());
    }

    #[test]
    fn test_samples_nonnegative_and_converge() {
        let mut e = Exponential::new(0.5).unwrap();
        e.set_seed(42);
        let draws = e.sample_n(200_000).unwrap();
        assert!(draws.iter().all(|&x| x >= 0.0));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert_relative_eq!(mean, 2.0, epsilon = 0.02);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_cdf_inverse_round_trip(p in 0.0f64..0.999_999) {
            let e = Exponential::new(1.5).unwrap();
            let x = e.inverse_cdf(p).unwrap();
            prop_assert!((e.cdf(x) - p).abs() < 1e-9);
        }
    }
}
