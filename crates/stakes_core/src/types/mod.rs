//! Core parameter and error types.
//!
//! This module provides:
//! - `stake`: Per-stake statistical parameters (`StakeParams`) and the
//!   parallel-array constructor used by presentation layers
//! - `error`: Structured error types for validation and aggregation failures
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`StakeParams`], [`validate_stakes`] from `stake`
//! - [`ModelError`] from `error`

pub mod error;
pub mod stake;

pub use error::ModelError;
pub use stake::{validate_stakes, StakeParams};
