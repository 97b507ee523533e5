//! Root-finding solvers for numerical computation.
//!
//! This module provides bracketing root-finding used to invert monotone
//! functions, most importantly the regularised incomplete beta function and
//! any distribution CDF without a closed-form quantile.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Robust interval-halving method; converges for any
//!   continuous function with a sign change, without derivative requirement
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Bracket-width tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use randstat_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 on [0, 2] (find √2)
//! let solver = BisectionSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

mod bisection;
mod config;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
