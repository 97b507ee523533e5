//! Student's t distribution.

use randstat_core::math::special::{beta, incomplete_beta, inverse_incomplete_beta};

use crate::distribution::{check_probability, Distribution, DistributionError};
use crate::rng::{Prng, RandomSource};
use crate::sampling::Sampler;

/// Student's t law with `df` degrees of freedom.
///
/// The CDF is expressed through the regularised incomplete beta function
/// with the substitution `x = df / (t^2 + df)`, using symmetry about zero
/// for negative arguments.
///
/// # Examples
///
/// ```rust
/// use randstat_distributions::distribution::{Distribution, StudentT};
///
/// let t = StudentT::new(10.0).unwrap();
/// assert!((t.cdf(0.0) - 0.5).abs() < 1e-12);
/// assert!((t.variance().unwrap() - 1.25).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct StudentT<R: RandomSource = Prng> {
    df: f64,
    /// sqrt(df) * B(df / 2, 1 / 2), fixed at construction.
    pdf_norm: f64,
    source: R,
}

impl StudentT<Prng> {
    /// Creates a t law with an entropy-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] unless `df` is
    /// finite and strictly positive.
    pub fn new(df: f64) -> Result<Self, DistributionError> {
        Self::with_source(df, Prng::from_entropy())
    }
}

impl<R: RandomSource> StudentT<R> {
    /// Creates a t law drawing from the given source.
    pub fn with_source(df: f64, source: R) -> Result<Self, DistributionError> {
        if !df.is_finite() || df <= 0.0 {
            return Err(DistributionError::InvalidParameter {
                name: "df",
                value: df,
            });
        }
        let pdf_norm = df.sqrt() * beta(0.5 * df, 0.5)?;
        Ok(Self {
            df,
            pdf_norm,
            source,
        })
    }

    /// Returns the degrees of freedom.
    pub fn df(&self) -> f64 {
        self.df
    }
}

impl<R: RandomSource> Sampler for StudentT<R> {
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

impl<R: RandomSource> Distribution for StudentT<R> {
    /// The centre of symmetry, 0 for every `df`.
    fn mean(&self) -> Result<f64, DistributionError> {
        Ok(0.0)
    }

    fn variance(&self) -> Result<f64, DistributionError> {
        if self.df <= 1.0 {
            return Err(DistributionError::Undefined { what: "variance" });
        }
        if self.df <= 2.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.df / (self.df - 2.0))
    }

    fn pdf(&self, t: f64) -> f64 {
        (1.0 + t * t / self.df).powf(-0.5 * (self.df + 1.0)) / self.pdf_norm
    }

    fn cdf(&self, t: f64) -> f64 {
        let x = self.df / (t * t + self.df);
        // Parameters were validated at construction.
        let tail = 0.5 * incomplete_beta(x, 0.5 * self.df, 0.5).unwrap_or(f64::NAN);
        if t >= 0.0 {
            1.0 - tail
        } else {
            tail
        }
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64, DistributionError> {
        check_probability(p)?;
        if p == 0.5 {
            return Ok(0.0);
        }
        let q = if p < 0.5 { 2.0 * p } else { 2.0 * (1.0 - p) };
        let x = inverse_incomplete_beta(q, 0.5 * self.df, 0.5)?;
        let t = (self.df * (1.0 - x) / x).sqrt();
        Ok(if p < 0.5 { -t } else { t })
    }
}

// ============================================================================
// TESTS
// ============================================================================
