//! # stakes_core: Foundation for Multi-Stake Bankroll Modelling
//!
//! ## Layer 1 (Foundation) Role
//!
//! stakes_core serves as the bottom layer of the workspace, providing:
//! - Per-stake parameter types and validation (`types::stake`)
//! - Structured error types (`types::error`)
//! - Standard normal distribution functions, including the inverse CDF
//!   used for confidence intervals (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other stakes_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use stakes_core::types::StakeParams;
//! use stakes_core::math::distributions::norm_ppf;
//!
//! // One stake: $2 big blind, 5 bb/100 winrate, 100 bb/100 std dev, 100k hands
//! let stake = StakeParams::new(2.0, 5.0, 100.0, 100_000);
//! assert_eq!(stake.mean_contribution(), 10_000.0);
//!
//! // Two-sided 95% critical value
//! let z = norm_ppf(0.975).unwrap();
//! assert!((z - 1.96).abs() < 1e-3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `StakeParams`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use types::{ModelError, StakeParams};
