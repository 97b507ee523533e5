//! Special functions: the gamma/beta family.
//!
//! This module provides the kernels every distribution in the toolkit leans
//! on:
//!
//! - [`ln_gamma`], [`gamma`]: Lanczos-series log-gamma and gamma
//! - [`ln_beta`], [`beta`], [`n_choose_k`]: derived log-gamma identities
//! - [`incomplete_beta`]: regularised incomplete beta `I_x(a, b)` via a
//!   modified-Lentz continued fraction
//! - [`inverse_incomplete_beta`]: bisection inversion of `I_x(a, b)`
//!
//! All functions work in `f64` and validate their domains eagerly, returning
//! [`FunctionError`](crate::types::FunctionError) for invalid parameters.
//! The iterative kernels are bounded: once the iteration cap is reached they
//! return the best available estimate rather than failing.

mod gamma;
mod incomplete_beta;

// Re-export public functions at module level
pub use gamma::{beta, gamma, ln_beta, ln_gamma, n_choose_k};
pub use incomplete_beta::{incomplete_beta, inverse_incomplete_beta};
