//! # stakes_analytics (L2: Analytic Aggregation)
//!
//! Combines independent per-stake outcome distributions into a single
//! portfolio-level normal distribution.
//!
//! This crate provides:
//! - [`aggregate`]: total expected value, standard deviation,
//!   Sharpe-like ratio, and confidence intervals for a set of stakes
//! - [`AggregateResult`]: the derived, immutable result type
//!
//! ## Design Principles
//!
//! - **Pure functions**: `aggregate` is deterministic and has no side
//!   effects; results are recomputed fresh on every call
//! - **Eager validation**: out-of-domain inputs fail with typed errors
//!   before any computation, never as NaN outputs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregate;

pub use aggregate::{aggregate, AggregateResult, ConfidenceInterval};
