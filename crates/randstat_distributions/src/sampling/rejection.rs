//! Rejection sampling against an arbitrary target density.

use crate::distribution::{Distribution, DistributionError};
use crate::rng::{Prng, RandomSource};
use crate::sampling::Sampler;

/// Decorrelates the accept/reject stream from the proposal stream when
/// both are reseeded from one seed.
const ACCEPT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Accept/reject sampler that draws from a target density `f` using a
/// proposal law `g` and an envelope constant `m` with `f(x) <= m * g(x)`
/// over the support of `f`.
///
/// A candidate `x` from the proposal is accepted with probability
/// `f(x) / (m * g(x))`. Nothing bounds how many candidates a draw may
/// consume, so looser envelopes only cost time, never correctness.
///
/// # Examples
///
/// ```rust
/// use randstat_distributions::distribution::{Distribution, Uniform};
/// use randstat_distributions::sampling::{RejectionSampler, Sampler};
///
/// // Triangular density on [0, 1] enveloped by 2 * Uniform(0, 1).
/// let proposal = Uniform::new(0.0, 1.0).unwrap();
/// let mut sampler = RejectionSampler::new(|x: f64| 2.0 * x, proposal, 2.0).unwrap();
/// sampler.set_seed(42);
///
/// let draw = sampler.sample().unwrap();
/// assert!((0.0..1.0).contains(&draw));
/// ```
pub struct RejectionSampler<F, P>
where
    P: Distribution,
    F: Fn(P::Value) -> f64,
{
    desired: F,
    proposal: P,
    envelope: f64,
    accept_source: Prng,
}

impl<F, P> RejectionSampler<F, P>
where
    P: Distribution,
    F: Fn(P::Value) -> f64,
{
    /// Creates a rejection sampler for the density `desired`.
    ///
    /// # Arguments
    ///
    /// * `desired` - target density, evaluated pointwise
    /// * `proposal` - law the candidates are drawn from
    /// * `envelope` - constant `m` with `desired(x) <= m * proposal.pdf(x)`
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] unless `envelope` is
    /// finite and strictly positive. The envelope inequality itself cannot
    /// be checked pointwise and remains the caller's obligation.
    pub fn new(desired: F, proposal: P, envelope: f64) -> Result<Self, DistributionError> {
        if !envelope.is_finite() || envelope <= 0.0 {
            return Err(DistributionError::InvalidParameter {
                name: "envelope",
                value: envelope,
            });
        }
        Ok(Self {
            desired,
            proposal,
            envelope,
            accept_source: Prng::from_entropy(),
        })
    }

    /// Returns the envelope constant.
    pub fn envelope(&self) -> f64 {
        self.envelope
    }
}

impl<F, P> Sampler for RejectionSampler<F, P>
where
    P: Distribution,
    F: Fn(P::Value) -> f64,
{
    type Value = P::Value;

    fn sample(&mut self) -> Result<P::Value, DistributionError> {
        loop {
            let candidate = self.proposal.sample()?;
            let accept =
                (self.desired)(candidate) / (self.envelope * self.proposal.pdf(candidate));
            if self.accept_source.next_uniform() <= accept {
                return Ok(candidate);
            }
        }
    }

    /// Reseeds both internal streams; the accept stream gets a salted seed
    /// so the two never walk in lockstep.
    fn set_seed(&mut self, seed: u64) {
        self.proposal.set_seed(seed);
        self.accept_source.reseed(seed ^ ACCEPT_SEED_SALT);
    }
}

// ============================================================================
// TESTS
// ============================================================================
