//! Multi-run trajectory simulation.
//!
//! [`PathSimulator`] orchestrates independent [`simulate_run`] calls
//! according to a [`SimulationConfig`]. Runs are fully independent, so
//! they execute in parallel via rayon; each run gets its own RNG
//! stream derived from the base seed to keep parallel outputs
//! uncorrelated and reproducible.

use rayon::prelude::*;
use stakes_core::types::{validate_stakes, ModelError, StakeParams};

use crate::config::SimulationConfig;
use crate::paths::simulate_run;
use crate::rng::SimRng;

/// Monte Carlo bankroll trajectory simulator.
///
/// # Examples
///
/// ```rust
/// use stakes_core::types::StakeParams;
/// use stakes_mc::{PathSimulator, SimulationConfig};
///
/// let stakes = [StakeParams::new(2.0, 5.0, 100.0, 1_000)];
///
/// let config = SimulationConfig::builder().seed(42).build().unwrap();
/// let simulator = PathSimulator::new(config).unwrap();
///
/// // Default run count is 10.
/// let paths = simulator.simulate_runs(&stakes).unwrap();
/// assert_eq!(paths.len(), 10);
/// ```
pub struct PathSimulator {
    config: SimulationConfig,
}

impl PathSimulator {
    /// Creates a new simulator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the simulator's configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates the configured number of independent trajectories.
    ///
    /// Validation happens once, eagerly, before any run starts. Runs
    /// execute in parallel; run `i` uses the RNG stream seeded with
    /// `base_seed + i` when a seed is configured, or fresh entropy
    /// otherwise.
    ///
    /// # Errors
    ///
    /// - [`ModelError::EmptyInput`] if `stakes` is empty or every
    ///   stake has a hand count of zero
    /// - [`ModelError::Domain`] if any stake parameter is out of range
    pub fn simulate_runs(&self, stakes: &[StakeParams]) -> Result<Vec<Vec<f64>>, ModelError> {
        validate_stakes(stakes)?;
        if stakes.iter().all(|s| s.hands == 0) {
            return Err(ModelError::EmptyInput(
                "every stake has a hand count of zero".to_string(),
            ));
        }

        let base_seed = self.config.seed();
        (0..self.config.runs())
            .into_par_iter()
            .map(|run| {
                let mut rng = match base_seed {
                    Some(seed) => SimRng::from_seed(seed.wrapping_add(run as u64)),
                    None => SimRng::from_entropy(),
                };
                simulate_run(stakes, &mut rng)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RUNS;

    fn stakes() -> Vec<StakeParams> {
        vec![
            StakeParams::new(2.0, 5.0, 100.0, 400),
            StakeParams::new(5.0, 4.0, 90.0, 100),
        ]
    }

    fn seeded(runs: usize, seed: u64) -> PathSimulator {
        let config = SimulationConfig::builder()
            .runs(runs)
            .seed(seed)
            .build()
            .unwrap();
        PathSimulator::new(config).unwrap()
    }

    #[test]
    fn test_run_count_and_lengths() {
        let paths = seeded(5, 42).simulate_runs(&stakes()).unwrap();
        assert_eq!(paths.len(), 5);
        for path in &paths {
            assert_eq!(path.len(), 500);
        }
    }

    #[test]
    fn test_default_run_count() {
        let simulator = PathSimulator::new(SimulationConfig::default()).unwrap();
        let paths = simulator.simulate_runs(&stakes()).unwrap();
        assert_eq!(paths.len(), DEFAULT_RUNS);
    }

    #[test]
    fn test_seeded_simulation_reproducible() {
        let paths1 = seeded(4, 7).simulate_runs(&stakes()).unwrap();
        let paths2 = seeded(4, 7).simulate_runs(&stakes()).unwrap();
        assert_eq!(paths1, paths2);
    }

    #[test]
    fn test_runs_are_independent_streams() {
        let paths = seeded(4, 7).simulate_runs(&stakes()).unwrap();
        for i in 0..paths.len() {
            for j in (i + 1)..paths.len() {
                assert_ne!(paths[i], paths[j]);
            }
        }
    }

    #[test]
    fn test_unseeded_simulations_differ() {
        let config = SimulationConfig::builder().runs(2).build().unwrap();
        let simulator = PathSimulator::new(config).unwrap();

        let a = simulator.simulate_runs(&stakes()).unwrap();
        let b = simulator.simulate_runs(&stakes()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_all_zero_hands_rejected_eagerly() {
        let stakes = [StakeParams::new(2.0, 5.0, 100.0, 0)];
        let result = seeded(3, 42).simulate_runs(&stakes);
        assert!(matches!(result, Err(ModelError::EmptyInput(_))));
    }

    #[test]
    fn test_empty_stakes_rejected() {
        let result = seeded(3, 42).simulate_runs(&[]);
        assert!(matches!(result, Err(ModelError::EmptyInput(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::builder().runs(0).build();
        assert!(config.is_err());
    }
}
