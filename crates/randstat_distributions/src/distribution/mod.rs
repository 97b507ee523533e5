//! # Probability Distributions
//!
//! The [`Distribution`] trait extends [`Sampler`](crate::sampling::Sampler)
//! with the analytical surface of a probability law: moments, density,
//! cumulative probability and quantiles. Eight concrete laws implement it.
//!
//! ## Continuous laws
//!
//! - [`Uniform`]: flat density on a bounded interval
//! - [`Gaussian`]: normal law; CDF via Gauss-Legendre quadrature, quantile
//!   via the Acklam rational approximation
//! - [`Exponential`]: rate-parameterised waiting times
//! - [`Beta`]: shape pair on (0, 1) via the regularised incomplete beta
//! - [`StudentT`]: heavy-tailed law indexed by degrees of freedom
//! - [`Cauchy`]: location/scale law with no finite moments
//!
//! ## Discrete laws
//!
//! - [`DiscreteUniform`]: equiprobable integers on a closed range
//! - [`Geometric`]: trials-to-first-success counts on {1, 2, ...}
//!
//! ## Conventions
//!
//! Parameters are validated at construction; evaluation methods on a
//! constructed law only fail when a probability argument is out of range or
//! a requested moment does not exist. For arguments outside a law's
//! support, `pdf` returns 0 and `cdf` saturates at 0 or 1.

pub mod beta;
pub mod cauchy;
pub mod discrete_uniform;
pub mod error;
pub mod exponential;
pub mod gaussian;
pub mod geometric;
pub mod student_t;
pub mod uniform;

pub use beta::Beta;
pub use cauchy::Cauchy;
pub use discrete_uniform::DiscreteUniform;
pub use error::DistributionError;
pub use exponential::Exponential;
pub use gaussian::Gaussian;
pub use geometric::Geometric;
pub use student_t::StudentT;
pub use uniform::Uniform;

use crate::sampling::Sampler;

/// Analytical surface of a probability law.
///
/// Every distribution is also a [`Sampler`], so a single value can answer
/// both "what is the density here" and "give me a draw".
pub trait Distribution: Sampler {
    /// Returns the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::Undefined`] when the law has no mean
    /// (Cauchy). Divergent-but-directed moments are reported as
    /// `Ok(f64::INFINITY)` rather than an error.
    fn mean(&self) -> Result<f64, DistributionError>;

    /// Returns the variance.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::Undefined`] when the law has no
    /// variance (Cauchy; Student's t with df <= 1).
    fn variance(&self) -> Result<f64, DistributionError>;

    /// Evaluates the probability density (or mass) function at `x`.
    ///
    /// Arguments outside the support yield 0.
    fn pdf(&self, x: Self::Value) -> f64;

    /// Evaluates the cumulative distribution function at `x`.
    ///
    /// Saturates at 0 below the support and 1 above it.
    fn cdf(&self, x: Self::Value) -> f64;

    /// Evaluates the quantile function at probability `p`.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::ProbabilityOutOfRange`] when `p` lies
    /// outside [0, 1].
    fn inverse_cdf(&self, p: f64) -> Result<Self::Value, DistributionError>;
}

/// Validates that `p` is a probability in [0, 1].
pub(crate) fn check_probability(p: f64) -> Result<(), DistributionError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(DistributionError::ProbabilityOutOfRange { p });
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_probability_accepts_bounds() {
        assert!(check_probability(0.0).is_ok());
        assert!(check_probability(0.5).is_ok());
        assert!(check_probability(1.0).is_ok());
    }

    #[test]
    fn test_check_probability_rejects_outside_and_nan() {
        assert!(check_probability(-0.01).is_err());
        assert!(check_probability(1.01).is_err());
        assert!(check_probability(f64::NAN).is_err());
    }
}
