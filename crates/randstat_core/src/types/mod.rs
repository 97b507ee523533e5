//! Core error types for the numerical kernels.
//!
//! This module provides:
//! - `error`: Structured error types for special-function, solver, and
//!   quadrature operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`FunctionError`], [`SolverError`], [`QuadratureError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::{FunctionError, QuadratureError, SolverError};
