//! Cross-layer integration tests.
//!
//! These tests verify that the Monte Carlo simulator (L3) agrees with
//! the analytic aggregator (L2): for a large seeded batch of runs, the
//! sample moments of the final bankrolls must match the aggregated
//! mean and sigma within statistical tolerance.

#[cfg(test)]
mod tests {
    use stakes_analytics::aggregate;
    use stakes_core::types::StakeParams;

    use crate::{PathSimulator, SimulationConfig};

    fn stakes() -> Vec<StakeParams> {
        vec![
            StakeParams::new(1.0, 5.0, 100.0, 2_000),
            StakeParams::new(2.0, 4.0, 90.0, 1_000),
        ]
    }

    #[test]
    fn test_simulated_moments_match_analytic_aggregate() {
        let result = aggregate(&stakes(), &[]).unwrap();

        let runs = 400;
        let config = SimulationConfig::builder()
            .runs(runs)
            .seed(42)
            .build()
            .unwrap();
        let simulator = PathSimulator::new(config).unwrap();

        let finals: Vec<f64> = simulator
            .simulate_runs(&stakes())
            .unwrap()
            .iter()
            .map(|path| *path.last().unwrap())
            .collect();

        let sample_mean = finals.iter().sum::<f64>() / runs as f64;
        let sample_var = finals
            .iter()
            .map(|x| (x - sample_mean) * (x - sample_mean))
            .sum::<f64>()
            / (runs - 1) as f64;
        let sample_sigma = sample_var.sqrt();

        // Standard error of the sample mean is sigma / sqrt(runs);
        // allow five standard errors around the analytic mean.
        let std_error = result.total_sigma / (runs as f64).sqrt();
        assert!(
            (sample_mean - result.total_mean).abs() < 5.0 * std_error,
            "sample mean {} too far from analytic mean {} (se {})",
            sample_mean,
            result.total_mean,
            std_error
        );

        assert!(
            (sample_sigma - result.total_sigma).abs() < 0.2 * result.total_sigma,
            "sample sigma {} too far from analytic sigma {}",
            sample_sigma,
            result.total_sigma
        );
    }

    #[test]
    fn test_trajectory_length_matches_aggregate_hand_count() {
        let result = aggregate(&stakes(), &[]).unwrap();

        let config = SimulationConfig::builder().runs(2).seed(1).build().unwrap();
        let paths = PathSimulator::new(config)
            .unwrap()
            .simulate_runs(&stakes())
            .unwrap();

        for path in &paths {
            assert_eq!(path.len() as u64, result.total_hands);
        }
    }
}
