//! Portfolio-level aggregation of per-stake statistics.
//!
//! Each stake is modelled as an independent normal approximation of its
//! per-hand outcome process. Means add linearly; variances add because
//! the stakes are independent, so the total standard deviation is the
//! Euclidean norm of the per-stake sigma contributions.

use stakes_core::math::distributions::{norm_pdf, two_sided_z};
use stakes_core::types::{validate_stakes, ModelError, StakeParams};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A two-sided confidence interval on total winnings.
///
/// Under the normal approximation, total winnings fall inside
/// `[lower, upper]` with probability `level`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfidenceInterval {
    /// Central probability mass covered, strictly inside (0, 1).
    pub level: f64,
    /// Lower bound, in monetary units.
    pub lower: f64,
    /// Upper bound, in monetary units.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Half-width of the interval.
    #[inline]
    pub fn half_width(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }

    /// Midpoint of the interval (always the total mean).
    #[inline]
    pub fn centre(&self) -> f64 {
        (self.upper + self.lower) / 2.0
    }
}

/// Aggregated outcome distribution across all stakes.
///
/// Derived and immutable; recomputed fresh by every [`aggregate`] call.
///
/// # Examples
///
/// ```rust
/// use stakes_analytics::aggregate;
/// use stakes_core::types::StakeParams;
///
/// let stakes = [StakeParams::new(2.0, 5.0, 100.0, 100_000)];
/// let result = aggregate(&stakes, &[0.95]).unwrap();
///
/// assert!((result.total_mean - 10_000.0).abs() < 1e-9);
/// assert!((result.sharpe_ratio - 15.81).abs() < 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregateResult {
    /// Expected total winnings, in monetary units.
    pub total_mean: f64,
    /// Standard deviation of total winnings, in monetary units.
    pub total_sigma: f64,
    /// Risk-adjusted return: `total_mean / total_sigma`.
    pub sharpe_ratio: f64,
    /// Requested confidence intervals, in input order.
    pub confidence_intervals: Vec<ConfidenceInterval>,
    /// Total hand count across all stakes.
    pub total_hands: u64,
}

impl AggregateResult {
    /// Samples the modelled outcome density over `[mean - 3σ, mean + 3σ]`.
    ///
    /// Returns `(winnings, density)` pairs for a presentation layer to
    /// plot. `points` below 2 yields an empty curve.
    pub fn density_curve(&self, points: usize) -> Vec<(f64, f64)> {
        if points < 2 {
            return Vec::new();
        }
        let lo = self.total_mean - 3.0 * self.total_sigma;
        let step = 6.0 * self.total_sigma / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = lo + step * i as f64;
                let z = (x - self.total_mean) / self.total_sigma;
                (x, norm_pdf(z) / self.total_sigma)
            })
            .collect()
    }
}

/// Aggregates per-stake statistics into a single outcome distribution.
///
/// # Arguments
///
/// * `stakes` - Non-empty, validated per-stake parameters
/// * `confidence_levels` - Central probability masses, each strictly
///   inside (0, 1); may be empty if no intervals are needed
///
/// # Model
///
/// - total mean = Σ `hands * bb_value * win_rate_per_100 / 100`
/// - total sigma = √(Σ (`sqrt(hands) * bb_value * std_dev_per_100 / 100`)²)
/// - Sharpe ratio = total mean / total sigma
/// - interval at level c = mean ± Φ⁻¹((c + 1) / 2) · sigma
///
/// Stakes with `hands == 0` contribute nothing and are harmless.
///
/// # Errors
///
/// - [`ModelError::EmptyInput`] if `stakes` is empty
/// - [`ModelError::Domain`] if any stake parameter or confidence level
///   is out of range (levels of exactly 0 or 1 are rejected: the
///   corresponding interval would be degenerate or unbounded)
/// - [`ModelError::DegenerateDistribution`] if the total sigma is
///   exactly zero, e.g. every stake has zero variance or zero hands
pub fn aggregate(
    stakes: &[StakeParams],
    confidence_levels: &[f64],
) -> Result<AggregateResult, ModelError> {
    validate_stakes(stakes)?;
    for &level in confidence_levels {
        if !level.is_finite() || level <= 0.0 || level >= 1.0 {
            return Err(ModelError::Domain {
                name: "confidence_level",
                value: level,
                constraint: "must be strictly between 0 and 1",
            });
        }
    }

    let total_mean: f64 = stakes.iter().map(StakeParams::mean_contribution).sum();
    let total_variance: f64 = stakes
        .iter()
        .map(|s| {
            let sigma = s.sigma_contribution();
            sigma * sigma
        })
        .sum();
    let total_sigma = total_variance.sqrt();
    let total_hands: u64 = stakes.iter().map(|s| s.hands).sum();

    if total_sigma == 0.0 {
        return Err(ModelError::DegenerateDistribution(
            "total sigma is zero; Sharpe ratio is undefined".to_string(),
        ));
    }
    let sharpe_ratio = total_mean / total_sigma;

    let mut confidence_intervals = Vec::with_capacity(confidence_levels.len());
    for &level in confidence_levels {
        let z = two_sided_z(level)?;
        confidence_intervals.push(ConfidenceInterval {
            level,
            lower: total_mean - z * total_sigma,
            upper: total_mean + z * total_sigma,
        });
    }

    Ok(AggregateResult {
        total_mean,
        total_sigma,
        sharpe_ratio,
        confidence_intervals,
        total_hands,
    })
}
