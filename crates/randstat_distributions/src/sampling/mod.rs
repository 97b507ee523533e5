//! # Sampling Layer
//!
//! The [`Sampler`] trait is the minimal draw interface: anything that can
//! produce values of some type on demand, deterministically under a seed.
//! Probability laws refine it through
//! [`Distribution`](crate::distribution::Distribution); the
//! [`RejectionSampler`] composes an arbitrary target density with a proposal
//! law without requiring an invertible CDF.
//!
//! ## Module Structure
//!
//! - [`rejection`]: accept/reject sampling against an envelope of a proposal law

pub mod rejection;

pub use rejection::RejectionSampler;

use crate::distribution::DistributionError;

/// A seeded generator of random values.
///
/// Implementors own their random source, so two samplers never share a
/// stream and reseeding one cannot perturb another.
pub trait Sampler {
    /// The type of value produced by a single draw.
    type Value: Copy;

    /// Draws the next value.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError`] when an underlying numerical kernel
    /// fails. Closed-form laws never fail once constructed.
    fn sample(&mut self) -> Result<Self::Value, DistributionError>;

    /// Draws `n` values into a freshly allocated vector.
    ///
    /// # Errors
    ///
    /// Propagates the first draw failure; no partial batch is returned.
    fn sample_n(&mut self, n: usize) -> Result<Vec<Self::Value>, DistributionError> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.sample()?);
        }
        Ok(values)
    }

    /// Re-initialises the sampler's random stream from `seed`.
    ///
    /// After reseeding, the draw sequence is identical to that of a fresh
    /// sampler constructed with the same parameters and seed.
    fn set_seed(&mut self, seed: u64);
}

// ============================================================================
// TESTS
// ============================================================================
