//! # randstat_core: Numerical Foundation for the randstat Toolkit
//!
//! ## Layer 1 (Foundation) Role
//!
//! randstat_core is the bottom layer of the 3-layer workspace, providing:
//! - Special-function kernels: log-gamma, beta, regularised incomplete beta
//!   (`math::special`)
//! - Bracketing root-finding solvers (`math::solvers`)
//! - Gauss–Legendre quadrature and composite integration rules
//!   (`math::quadrature`)
//! - Error types: `FunctionError`, `SolverError`, `QuadratureError`
//!   (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other randstat crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use randstat_core::math::special::{ln_gamma, incomplete_beta};
//! use randstat_core::math::quadrature::gauss_legendre;
//!
//! // logGamma(6) = log(5!) = log(120)
//! let lg = ln_gamma(6.0).unwrap();
//! assert!((lg - 120.0_f64.ln()).abs() < 1e-9);
//!
//! // I_x(a, b) at the symmetry point of Beta(2, 2)
//! let ib = incomplete_beta(0.5, 2.0, 2.0).unwrap();
//! assert!((ib - 0.5).abs() < 1e-12);
//!
//! // 20-point Gauss–Legendre integrates constants exactly
//! let area = gauss_legendre(|_| 1.0, 0.0, 5.0, 20).unwrap();
//! assert!((area - 5.0).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
