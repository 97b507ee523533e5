//! Numerical kernels: special functions, solvers, and quadrature.
//!
//! This module provides:
//! - `special`: Log-gamma, beta, and regularised incomplete beta functions
//! - `solvers`: Bracketing root-finding for monotone functions
//! - `quadrature`: Gauss–Legendre and composite integration rules

pub mod quadrature;
pub mod solvers;
pub mod special;
