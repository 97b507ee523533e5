//! Continuous uniform distribution on a bounded interval.

use crate::distribution::{check_probability, Distribution, DistributionError};
use crate::rng::{Prng, RandomSource};
use crate::sampling::Sampler;

/// Continuous uniform law on `[lower, upper)`.
///
/// # Examples
///
/// ```rust
/// use randstat_distributions::distribution::{Distribution, Uniform};
/// use randstat_distributions::sampling::Sampler;
///
/// let mut u = Uniform::new(2.0, 6.0).unwrap();
/// u.set_seed(1);
///
/// assert_eq!(u.mean().unwrap(), 4.0);
/// assert_eq!(u.pdf(3.0), 0.25);
/// let x = u.sample().unwrap();
/// assert!((2.0..6.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct Uniform<R: RandomSource = Prng> {
    lower: f64,
    upper: f64,
    source: R,
}

impl Uniform<Prng> {
    /// Creates a uniform law on `[lower, upper)` with an entropy-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] unless
    /// `lower < upper` and both bounds are finite.
    pub fn new(lower: f64, upper: f64) -> Result<Self, DistributionError> {
        Self::with_source(lower, upper, Prng::from_entropy())
    }
}

impl<R: RandomSource> Uniform<R> {
    /// Creates a uniform law drawing from the given source.
    pub fn with_source(lower: f64, upper: f64, source: R) -> Result<Self, DistributionError> {
        if !lower.is_finite() {
            return Err(DistributionError::InvalidParameter {
                name: "lower",
                value: lower,
            });
        }
        if !upper.is_finite() || upper <= lower {
            return Err(DistributionError::InvalidParameter {
                name: "upper",
                value: upper,
            });
        }
        Ok(Self {
            lower,
            upper,
            source,
        })
    }

    /// Returns the lower bound of the support.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound of the support.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl<R: RandomSource> Sampler for Uniform<R> {
    type Value = f64;

    fn sample(&mut self) -> Result<f64, DistributionError> {
        Ok(self.lower + self.width() * self.source.next_uniform())
    }

    fn set_seed(&mut self, seed: u64) {
        self.source.reseed(seed);
    }
}

impl<R: RandomSource> Distribution for Uniform<R> {
    fn mean(&self) -> Result<f64, DistributionError> {
        Ok(0.5 * (self.lower + self.upper))
    }

    fn variance(&self) -> Result<f64, DistributionError> {
        Ok(self.width() * self.width() / 12.0)
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < self.lower || x > self.upper {
            0.0
        } else {
            1.0 / self.width()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        ((x - self.lower) / self.width()).clamp(0.0, 1.0)
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64, DistributionError> {
        check_probability(p)?;
        Ok(self.lower + p * self.width())
    }
}

// ============================================================================
// TESTS
// ============================================================================
