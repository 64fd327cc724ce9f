//! Numerical building blocks.
//!
//! This module provides:
//! - `distributions`: Standard normal CDF, PDF, and inverse CDF

pub mod distributions;
