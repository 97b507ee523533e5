//! Beta distribution on the unit interval.

use randstat_core::math::special::{incomplete_beta, inverse_incomplete_beta, ln_beta};

use crate::distribution::{check_probability, Distribution, DistributionError};
use crate::rng::{Prng, RandomSource};
use crate::sampling::Sampler;

/// Beta law with shape parameters `alpha` and `beta`.
///
/// The CDF is the regularised incomplete beta function and the quantile is
/// its bisection inverse, both from `randstat_core`.
///
/// # Examples
///
/// ```rust
/// use randstat_distributions::distribution::{Beta, Distribution};
///
/// let b = Beta::new(2.0, 2.0).unwrap();
/// assert!((b.mean().unwrap() - 0.5).abs() < 1e-15);
/// assert!((b.cdf(0.5) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Beta<R: RandomSource = Prng> {
    alpha: f64,
    beta: f64,
    /// ln B(alpha, beta), fixed at construction.
    ln_norm: f64,
    source: R,
}

impl Beta<Prng> {
    /// Creates a beta law with an entropy-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] unless both shapes
    /// are finite and strictly positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self, DistributionError> {
        Self::with_source(alpha, beta, Prng::from_entropy())
    }
}

impl<R: RandomSource> Beta<R> {
    /// Creates a beta law drawing from the given source.
    pub fn with_source(alpha: f64, beta: f64, source: R) -> Result<Self, DistributionError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(DistributionError::InvalidParameter {
                name: "alpha",
                value: alpha,
            });
        }
        if !beta.is_finite() || beta <= 0.0 {
            return Err(DistributionError::InvalidParameter {
                name: "beta",
                value: beta,
            });
        }
        let ln_norm = ln_beta(alpha, beta)?;
        Ok(Self {
            alpha,
            beta,
            ln_norm,
            source,
        })
    }

    /// Returns the first shape parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the second shape parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl<R: RandomSource> Sampler for Beta<R> {
    type Value = f64;

    /// Inverse-transform draw through the incomplete beta inverse.
    fn sample(&mut self) -> Result<f64, DistributionError> {
        let u = self.source.next_uniform();
        self.inverse_cdf(u)
    }

    fn set_seed(&mut self, seed: u64) {
        self.source.reseed(seed);
    }
}

impl<R: RandomSource> Distribution for Beta<R> {
    fn mean(&self) -> Result<f64, DistributionError> {
        Ok(self.alpha / (self.alpha + self.beta))
    }

    fn variance(&self) -> Result<f64, DistributionError> {
        let s = self.alpha + self.beta;
        Ok(self.alpha * self.beta / (s * s * (s + 1.0)))
    }

    fn pdf(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        // The log form is indeterminate at the endpoints.
        if x == 0.0 {
            return endpoint_density(self.alpha, -self.ln_norm);
        }
        if x == 1.0 {
            return endpoint_density(self.beta, -self.ln_norm);
        }
        ((self.alpha - 1.0) * x.ln() + (self.beta - 1.0) * (1.0 - x).ln() - self.ln_norm).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            // Parameters were validated at construction.
            incomplete_beta(x, self.alpha, self.beta).unwrap_or(f64::NAN)
        }
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64, DistributionError> {
        check_probability(p)?;
        Ok(inverse_incomplete_beta(p, self.alpha, self.beta)?)
    }
}

/// Density limit at an endpoint whose adjacent shape parameter is `shape`.
fn endpoint_density(shape: f64, neg_ln_norm: f64) -> f64 {
    if shape < 1.0 {
        f64::INFINITY
    } else if shape == 1.0 {
        neg_ln_norm.exp()
    } else {
        0.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
