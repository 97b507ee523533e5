//! Discrete uniform distribution on a closed integer range.

use crate::distribution::{check_probability, Distribution, DistributionError};
use crate::rng::{Prng, RandomSource};
use crate::sampling::Sampler;

/// Equiprobable integers on `[lower, upper]`, both bounds inclusive.
///
/// Draws come straight from the source's index generator rather than through
/// quantile inversion, so every outcome is hit without floating-point edge
/// effects.
///
/// # Examples
///
/// ```rust
/// use randstat_distributions::distribution::{DiscreteUniform, Distribution};
/// use randstat_distributions::sampling::Sampler;
///
/// let mut die = DiscreteUniform::new(1, 6).unwrap();
/// die.set_seed(7);
///
/// assert_eq!(die.mean().unwrap(), 3.5);
/// let roll = die.sample().unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct DiscreteUniform<R: RandomSource = Prng> {
    lower: i64,
    upper: i64,
    source: R,
}

impl DiscreteUniform<Prng> {
    /// Creates a discrete uniform law on `[lower, upper]` with an
    /// entropy-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] unless `upper > lower`.
    pub fn new(lower: i64, upper: i64) -> Result<Self, DistributionError> {
        Self::with_source(lower, upper, Prng::from_entropy())
    }
}

impl<R: RandomSource> DiscreteUniform<R> {
    /// Creates a discrete uniform law drawing from the given source.
    pub fn with_source(lower: i64, upper: i64, source: R) -> Result<Self, DistributionError> {
        if upper <= lower {
            return Err(DistributionError::InvalidParameter {
                name: "upper",
                value: upper as f64,
            });
        }
        Ok(Self {
            lower,
            upper,
            source,
        })
    }

    /// Returns the smallest supported value.
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// Returns the largest supported value.
    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// Number of supported outcomes.
    fn count(&self) -> u64 {
        (self.upper - self.lower) as u64 + 1
    }
}

impl<R: RandomSource> Sampler for DiscreteUniform<R> {
    type Value = i64;

    fn sample(&mut self) -> Result<i64, DistributionError> {
        let offset = self.source.next_index(self.count());
        Ok(self.lower + offset as i64)
    }

    fn set_seed(&mut self, seed: u64) {
        self.source.reseed(seed);
    }
}

impl<R: RandomSource> Distribution for DiscreteUniform<R> {
    fn mean(&self) -> Result<f64, DistributionError> {
        Ok(0.5 * (self.lower as f64 + self.upper as f64))
    }

    fn variance(&self) -> Result<f64, DistributionError> {
        let n = self.count() as f64;
        Ok((n * n - 1.0) / 12.0)
    }

    fn pdf(&self, x: i64) -> f64 {
        if x < self.lower || x > self.upper {
            0.0
        } else {
            1.0 / self.count() as f64
        }
    }

    fn cdf(&self, x: i64) -> f64 {
        if x < self.lower {
            0.0
        } else if x >= self.upper {
            1.0
        } else {
            (x - self.lower + 1) as f64 / self.count() as f64
        }
    }

    fn inverse_cdf(&self, p: f64) -> Result<i64, DistributionError> {
        check_probability(p)?;
        let raw = (p * self.count() as f64 + self.lower as f64 - 1.0).ceil();
        Ok(raw as i64)
    }
}

// ============================================================================
// TESTS
// ============================================================================
