//! Single-trajectory bankroll simulation.
//!
//! A run draws every hand's outcome independently per stake, converts
//! to monetary units, interleaves all stakes' hands into one arbitrary
//! chronological order via a uniform shuffle, and returns the running
//! cumulative sum. The model deliberately keeps no session structure:
//! which stake produced which hand is forgotten once interleaved.

use rand_distr::Normal;
use stakes_core::types::{validate_stakes, ModelError, StakeParams};

use crate::rng::SimRng;

/// Simulates one full bankroll trajectory.
///
/// # Arguments
///
/// * `stakes` - Per-stake parameters; stakes with `hands == 0`
///   contribute no samples and are harmless
/// * `rng` - Explicit random source; seed it for reproducible runs
///
/// # Returns
///
/// Cumulative winnings after each hand, in monetary units. The length
/// equals the total hand count across all stakes.
///
/// # Errors
///
/// - [`ModelError::EmptyInput`] if `stakes` is empty or every stake
///   has a hand count of zero
/// - [`ModelError::Domain`] if any stake parameter is out of range
///
/// # Examples
///
/// ```rust
/// use stakes_core::types::StakeParams;
/// use stakes_mc::{simulate_run, SimRng};
///
/// let stakes = [
///     StakeParams::new(2.0, 5.0, 100.0, 500),
///     StakeParams::new(5.0, 4.0, 90.0, 300),
/// ];
/// let mut rng = SimRng::from_seed(42);
///
/// let path = simulate_run(&stakes, &mut rng).unwrap();
/// assert_eq!(path.len(), 800);
/// ```
pub fn simulate_run(stakes: &[StakeParams], rng: &mut SimRng) -> Result<Vec<f64>, ModelError> {
    validate_stakes(stakes)?;

    let total_hands: u64 = stakes.iter().map(|s| s.hands).sum();
    if total_hands == 0 {
        return Err(ModelError::EmptyInput(
            "every stake has a hand count of zero".to_string(),
        ));
    }

    let mut samples = Vec::with_capacity(total_hands as usize);
    for stake in stakes.iter().filter(|s| s.hands > 0) {
        // Per-hand distribution in big blinds; sd == 0 is a valid
        // (deterministic) stake, so only rand_distr's own domain
        // failures are mapped here.
        let per_hand =
            Normal::new(stake.per_hand_mean(), stake.per_hand_std_dev()).map_err(|_| {
                ModelError::Domain {
                    name: "std_dev_per_100",
                    value: stake.std_dev_per_100,
                    constraint: "must be non-negative and finite",
                }
            })?;

        for _ in 0..stake.hands {
            samples.push(stake.bb_value * rng.sample(&per_hand));
        }
    }

    // Arbitrary chronological interleaving of all stakes' hands.
    rng.shuffle(&mut samples);

    // In-place prefix sum turns per-hand winnings into a trajectory.
    let mut bankroll = 0.0;
    for sample in samples.iter_mut() {
        bankroll += *sample;
        *sample = bankroll;
    }

    Ok(samples)
}
