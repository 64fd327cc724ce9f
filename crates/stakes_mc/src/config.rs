//! Simulation configuration.
//!
//! [`SimulationConfig`] fixes the run count and reproducibility policy
//! for a [`PathSimulator`](crate::PathSimulator). Use the builder to
//! construct instances.

use stakes_core::types::ModelError;

/// Default number of simulated trajectories.
pub const DEFAULT_RUNS: usize = 10;

/// Maximum number of simulated trajectories allowed.
pub const MAX_RUNS: usize = 100_000;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. A seeded configuration makes every run
/// reproducible; an unseeded one draws fresh entropy per run.
///
/// # Examples
///
/// ```rust
/// use stakes_mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .runs(100)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.runs(), 100);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of independent trajectories to simulate.
    runs: usize,
    /// Optional base seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of trajectories to simulate.
    #[inline]
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Returns the base seed, if one was set.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if `runs` is 0 or greater than
    /// [`MAX_RUNS`].
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.runs == 0 || self.runs > MAX_RUNS {
            return Err(ModelError::Domain {
                name: "runs",
                value: self.runs as f64,
                constraint: "must be in range [1, 100_000]",
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    /// Ten unseeded runs, matching the typical visualisation workload.
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            seed: None,
        }
    }
}

/// Builder for [`SimulationConfig`].
///
/// `runs` defaults to [`DEFAULT_RUNS`] when not set.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    runs: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of trajectories to simulate.
    ///
    /// # Arguments
    ///
    /// * `runs` - Run count in [1, 100_000]
    #[inline]
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = Some(runs);
        self
    }

    /// Sets the base seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if the run count is out of range.
    pub fn build(self) -> Result<SimulationConfig, ModelError> {
        let config = SimulationConfig {
            runs: self.runs.unwrap_or(DEFAULT_RUNS),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SimulationConfig::builder().build().unwrap();
        assert_eq!(config.runs(), DEFAULT_RUNS);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_with_values() {
        let config = SimulationConfig::builder().runs(50).seed(7).build().unwrap();
        assert_eq!(config.runs(), 50);
        assert_eq!(config.seed(), Some(7));
    }

    #[test]
    fn test_zero_runs_rejected() {
        let result = SimulationConfig::builder().runs(0).build();
        assert!(matches!(
            result,
            Err(ModelError::Domain { name: "runs", .. })
        ));
    }

    #[test]
    fn test_too_many_runs_rejected() {
        let result = SimulationConfig::builder().runs(MAX_RUNS + 1).build();
        assert!(matches!(
            result,
            Err(ModelError::Domain { name: "runs", .. })
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }
}
