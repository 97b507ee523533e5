//! # Randstat Distributions (Layer 2: Probability Laws)
//!
//! ## Layer 2 Role
//!
//! randstat_distributions builds the probability layer on top of the
//! numerical kernels in `randstat_core`:
//! - Seeded random sources with reproducible streams ([`rng`])
//! - The [`Sampler`](sampling::Sampler) and
//!   [`Distribution`](distribution::Distribution) traits ([`sampling`], [`distribution`])
//! - Eight concrete laws: uniform, discrete uniform, Gaussian, exponential,
//!   beta, Student's t, Cauchy and geometric
//! - Rejection sampling against an arbitrary target density ([`sampling::RejectionSampler`])
//!
//! ## Reproducibility
//!
//! Every law owns its random source. Constructing a law with
//! [`Prng::from_seed`](rng::Prng::from_seed) and replaying the same seed
//! produces identical draw sequences, which is what the statistical tests in
//! this workspace rely on.
//!
//! ## Usage Example
//!
//! ```rust
//! use randstat_distributions::distribution::{Distribution, Exponential};
//! use randstat_distributions::sampling::Sampler;
//!
//! let mut exp = Exponential::new(0.5).unwrap();
//! exp.set_seed(42);
//!
//! let draw = exp.sample().unwrap();
//! assert!(draw >= 0.0);
//! assert_eq!(exp.mean().unwrap(), 2.0);
//! ```

#![deny(missing_docs)]

pub mod distribution;
pub mod rng;
pub mod sampling;

pub use distribution::{Distribution, DistributionError};
pub use rng::{Prng, RandomSource};
pub use sampling::{RejectionSampler, Sampler};
