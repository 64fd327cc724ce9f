//! Aggregate command implementation
//!
//! Converts the comma-separated CLI inputs into stake parameters and
//! prints the portfolio-level outcome distribution.

use stakes_analytics::aggregate;
use stakes_core::types::StakeParams;
use tracing::info;

use super::{parse_f64_list, parse_i64_list};
use crate::{CliError, Result};

/// Run the aggregate command
pub fn run(
    stakes: &str,
    winrates: &str,
    stddevs: &str,
    hands: &str,
    confidence: &str,
    format: &str,
) -> Result<()> {
    let bb_values = parse_f64_list("stakes", stakes)?;
    let win_rates = parse_f64_list("winrates", winrates)?;
    let std_devs = parse_f64_list("stddevs", stddevs)?;
    let hand_counts = parse_i64_list("hands", hands)?;

    // Confidence levels arrive in percent, the core expects fractions.
    let levels: Vec<f64> = parse_f64_list("confidence", confidence)?
        .into_iter()
        .map(|pct| pct / 100.0)
        .collect();

    let stake_params = StakeParams::from_arrays(&bb_values, &win_rates, &std_devs, &hand_counts)?;
    info!("Aggregating {} stakes", stake_params.len());

    let result = aggregate(&stake_params, &levels)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "table" => {
            println!("\nResults after {} hands", result.total_hands);
            println!("┌──────────────────────────────┬──────────────┐");
            println!("│ EV ($)                       │ {:>12.2} │", result.total_mean);
            println!("│ Std dev on winnings ($)      │ {:>12.2} │", result.total_sigma);
            println!("│ Sharpe ratio                 │ {:>12.2} │", result.sharpe_ratio);
            println!("└──────────────────────────────┴──────────────┘");

            println!("\nConfidence intervals:");
            for ci in &result.confidence_intervals {
                println!(
                    "  {:>5.1}%  [{:.2}, {:.2}]",
                    ci.level * 100.0,
                    ci.lower,
                    ci.upper
                );
            }
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Aggregation complete");
    Ok(())
}
