//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Input-string
//! parsing lives here so the model crates never see raw text.

use crate::{CliError, Result};

pub mod aggregate;
pub mod simulate;

/// Parses a comma-separated list of floats ("2,5,10").
pub fn parse_f64_list(name: &str, input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(|item| {
            item.trim().parse::<f64>().map_err(|_| {
                CliError::InvalidArgument(format!(
                    "'{}' must be comma-separated numbers, got '{}'",
                    name,
                    item.trim()
                ))
            })
        })
        .collect()
}

/// Parses a comma-separated list of integers ("100000,50000").
pub fn parse_i64_list(name: &str, input: &str) -> Result<Vec<i64>> {
    input
        .split(',')
        .map(|item| {
            item.trim().parse::<i64>().map_err(|_| {
                CliError::InvalidArgument(format!(
                    "'{}' must be comma-separated integers, got '{}'",
                    name,
                    item.trim()
                ))
            })
        })
        .collect()
}
