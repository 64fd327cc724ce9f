//! Simulate command implementation
//!
//! Runs Monte Carlo bankroll trajectories and prints a per-run summary.

use stakes_core::types::StakeParams;
use stakes_mc::{PathSimulator, SimulationConfig};
use tracing::info;

use super::{parse_f64_list, parse_i64_list};
use crate::Result;

/// Run the simulate command
pub fn run(
    stakes: &str,
    winrates: &str,
    stddevs: &str,
    hands: &str,
    runs: usize,
    seed: Option<u64>,
) -> Result<()> {
    let bb_values = parse_f64_list("stakes", stakes)?;
    let win_rates = parse_f64_list("winrates", winrates)?;
    let std_devs = parse_f64_list("stddevs", stddevs)?;
    let hand_counts = parse_i64_list("hands", hands)?;

    let stake_params = StakeParams::from_arrays(&bb_values, &win_rates, &std_devs, &hand_counts)?;

    let mut builder = SimulationConfig::builder().runs(runs);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let simulator = PathSimulator::new(builder.build()?)?;

    info!("Simulating {} runs across {} stakes", runs, stake_params.len());
    let paths = simulator.simulate_runs(&stake_params)?;

    println!(
        "\n{} simulated runs ({} hands each):",
        paths.len(),
        paths.first().map_or(0, Vec::len)
    );
    println!("┌───────┬──────────────┬──────────────┬──────────────┐");
    println!("│ Run   │ Final ($)    │ Peak ($)     │ Trough ($)   │");
    println!("├───────┼──────────────┼──────────────┼──────────────┤");
    for (i, path) in paths.iter().enumerate() {
        let final_bankroll = *path.last().unwrap_or(&0.0);
        let peak = path.iter().cloned().fold(f64::MIN, f64::max);
        let trough = path.iter().cloned().fold(f64::MAX, f64::min);
        println!(
            "│ {:>5} │ {:>12.2} │ {:>12.2} │ {:>12.2} │",
            i + 1,
            final_bankroll,
            peak,
            trough
        );
    }
    println!("└───────┴──────────────┴──────────────┴──────────────┘");

    info!("Simulation complete");
    Ok(())
}
