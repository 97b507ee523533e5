//! Shared types for the statistics layer.

pub mod error;

pub use error::StatsError;
