//! Error types for structured error handling.
//!
//! This module provides:
//! - `FunctionError`: Errors from special-function evaluation
//! - `SolverError`: Errors from root-finding solvers
//! - `QuadratureError`: Errors from numerical integration
//!
//! Non-convergence of the bounded iterative kernels (continued fraction,
//! Newton root polishing) is deliberately *not* an error: those kernels
//! return their best available estimate once the iteration cap is reached,
//! and document that behaviour at the call site.

use thiserror::Error;

/// Special-function evaluation errors.
///
/// Provides structured error handling for the gamma/beta family of
/// functions with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidParameter`: Shape parameter or argument outside the valid domain
/// - `ProbabilityOutOfRange`: Probability argument outside [0, 1]
/// - `Solver`: Propagated failure from an internal functional inversion
///
/// # Examples
/// ```
/// use randstat_core::types::FunctionError;
///
/// let err = FunctionError::InvalidParameter { name: "x", value: -1.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionError {
    /// Parameter or argument outside the mathematically valid domain.
    #[error("Parameter {name} = {value} outside valid domain")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Probability argument outside [0, 1].
    #[error("Probability {p} outside [0, 1]")]
    ProbabilityOutOfRange {
        /// The rejected probability
        p: f64,
    },

    /// Propagated solver failure from functional inversion.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Root-finding solver errors.
///
/// Provides structured error handling for bracketing solvers with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: General numerical instability
///
/// # Examples
/// ```
/// use randstat_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Numerical integration errors.
///
/// # Variants
/// - `InvalidOrder`: Gauss–Legendre order below 1
/// - `InvalidSubdivision`: Composite rule subdivision count below 1
///
/// # Examples
/// ```
/// use randstat_core::types::QuadratureError;
///
/// let err = QuadratureError::InvalidOrder { n: 0 };
/// assert_eq!(format!("{}", err), "Quadrature order must be >= 1, got 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadratureError {
    /// Gauss–Legendre order below 1.
    #[error("Quadrature order must be >= 1, got {n}")]
    InvalidOrder {
        /// The rejected order
        n: usize,
    },

    /// Composite rule subdivision count below 1.
    #[error("Subdivision count must be >= 1, got {n}")]
    InvalidSubdivision {
        /// The rejected subdivision count
        n: usize,
    },
}
