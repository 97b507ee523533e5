//! Cauchy distribution.

use std::f64::consts::PI;

use crate::distribution::{check_probability, Distribution, DistributionError};
use crate::rng::{Prng, RandomSource};
use crate::sampling::Sampler;

/// Cauchy law with location `x0` and scale `gamma`.
///
/// The tails are so heavy that neither the mean nor the variance exists;
/// both moment queries report [`DistributionError::Undefined`].
///
/// # Examples
///
/// ```rust
/// use randstat_distributions::distribution::{Cauchy, Distribution};
///
/// let c = Cauchy::new(0.0, 1.0).unwrap();
/// assert!((c.cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(c.mean().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Cauchy<R: RandomSource = Prng> {
    x0: f64,
    gamma: f64,
    source: R,
}

impl Cauchy<Prng> {
    /// Creates a Cauchy law with an entropy-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] unless `x0` is
    /// finite and `gamma` is finite and strictly positive.
    pub fn new(x0: f64, gamma: f64) -> Result<Self, DistributionError> {
        Self::with_source(x0, gamma, Prng::from_entropy())
    }
}

impl<R: RandomSource> Cauchy<R> {
    /// Creates a Cauchy law drawing from the given source.
    pub fn with_source(x0: f64, gamma: f64, source: R) -> Result<Self, DistributionError> {
        if !x0.is_finite() {
            return Err(DistributionError::InvalidParameter {
                name: "x0",
                value: x0,
            });
        }
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(DistributionError::InvalidParameter {
                name: "gamma",
                value: gamma,
            });
        }
        Ok(Self { x0, gamma, source })
    }

    /// Returns the location parameter.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Returns the scale parameter.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl<R: RandomSource> Sampler for Cauchy<R> {
    type Value = f64;

    fn sample(&mut self) -> Result<f64, DistributionError> {
        let u = self.source.next_uniform();
        self.inverse_cdf(u)
    }

    fn set_seed(&mut self, seed: u64) {
        self.source.reseed(seed);
    }
}

impl<R: RandomSource> Distribution for Cauchy<R> {
    fn mean(&self) -> Result<f64, DistributionError> {
        Err(DistributionError::Undefined { what: "mean" })
    }

    fn variance(&self) -> Result<f64, DistributionError> {
        Err(DistributionError::Undefined { what: "variance" })
    }

    fn pdf(&self, x: f64) -> f64 {
        let d = x - self.x0;
        self.gamma / (PI * (d * d + self.gamma * self.gamma))
    }

    fn cdf(&self, x: f64) -> f64 {
        ((x - self.x0) / self.gamma).atan() / PI + 0.5
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64, DistributionError> {
        check_probability(p)?;
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.x0 + self.gamma * (PI * (p - 0.5)).tan())
    }
}

// ============================================================================
// TESTS
// ============================================================================
