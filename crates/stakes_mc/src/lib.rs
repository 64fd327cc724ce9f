//! # stakes_mc (L3: Monte Carlo Simulation)
//!
//! Monte Carlo sample paths of cumulative winnings across multiple
//! stakes.
//!
//! Each run draws every hand's outcome independently per stake,
//! shuffles the combined sequence into an arbitrary chronological
//! interleaving, and returns the running cumulative sum as one full
//! bankroll trajectory. Runs share no state and are parallelised with
//! rayon.
//!
//! # Architecture
//!
//! ```text
//! PathSimulator
//! ├── SimulationConfig  (run count, optional base seed)
//! ├── SimRng            (seeded random number generation)
//! └── simulate_run()    (sample → interleave → cumulative sum)
//! ```
//!
//! # Reproducibility
//!
//! The random source is an explicit, injectable handle rather than an
//! ambient global generator. A seeded [`SimulationConfig`] makes every
//! run reproducible; run `i` uses an independent stream derived from
//! the base seed, so parallel execution never correlates outputs.
//!
//! # Examples
//!
//! ```rust
//! use stakes_core::types::StakeParams;
//! use stakes_mc::{PathSimulator, SimulationConfig};
//!
//! let stakes = [StakeParams::new(2.0, 5.0, 100.0, 1_000)];
//!
//! let config = SimulationConfig::builder().runs(10).seed(42).build().unwrap();
//! let simulator = PathSimulator::new(config).unwrap();
//!
//! let paths = simulator.simulate_runs(&stakes).unwrap();
//! assert_eq!(paths.len(), 10);
//! assert_eq!(paths[0].len(), 1_000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod paths;
pub mod rng;
pub mod simulator;

#[cfg(test)]
mod integration_tests;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_RUNS, MAX_RUNS};
pub use paths::simulate_run;
pub use rng::SimRng;
pub use simulator::PathSimulator;
