//! Per-stake statistical parameters.
//!
//! A stake is a distinct game level with its own monetary unit size
//! (big blind value) and statistical profile. Win rate and standard
//! deviation follow the poker convention of big blinds per 100 hands;
//! the helpers on [`StakeParams`] convert those to per-hand units.

use super::error::ModelError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for a single stake.
///
/// # Model
///
/// Each hand at this stake is modelled as an independent draw from
/// `Normal(win_rate_per_100 / 100, std_dev_per_100 / 100)` in big
/// blinds, scaled by `bb_value` into monetary units. The division by
/// 100 converts the conventional per-100-hands figures to per-hand
/// units.
///
/// # Examples
///
/// ```rust
/// use stakes_core::types::StakeParams;
///
/// let stake = StakeParams::new(2.0, 5.0, 100.0, 100_000);
/// assert_eq!(stake.mean_contribution(), 10_000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StakeParams {
    /// Monetary value of one big blind at this stake.
    pub bb_value: f64,
    /// Expected big blinds won per 100 hands.
    pub win_rate_per_100: f64,
    /// Standard deviation of big blinds won per 100 hands.
    pub std_dev_per_100: f64,
    /// Number of hands to be played at this stake.
    pub hands: u64,
}

impl StakeParams {
    /// Creates new stake parameters.
    ///
    /// # Arguments
    ///
    /// * `bb_value` - Monetary value of one big blind (must be positive)
    /// * `win_rate_per_100` - Expected big blinds won per 100 hands
    /// * `std_dev_per_100` - Standard deviation per 100 hands (non-negative)
    /// * `hands` - Hand count at this stake
    #[inline]
    pub fn new(bb_value: f64, win_rate_per_100: f64, std_dev_per_100: f64, hands: u64) -> Self {
        Self {
            bb_value,
            win_rate_per_100,
            std_dev_per_100,
            hands,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if:
    /// - `bb_value` is non-positive or non-finite
    /// - `win_rate_per_100` is non-finite
    /// - `std_dev_per_100` is negative or non-finite
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.bb_value.is_finite() || self.bb_value <= 0.0 {
            return Err(ModelError::Domain {
                name: "bb_value",
                value: self.bb_value,
                constraint: "must be positive and finite",
            });
        }
        if !self.win_rate_per_100.is_finite() {
            return Err(ModelError::Domain {
                name: "win_rate_per_100",
                value: self.win_rate_per_100,
                constraint: "must be finite",
            });
        }
        if !self.std_dev_per_100.is_finite() || self.std_dev_per_100 < 0.0 {
            return Err(ModelError::Domain {
                name: "std_dev_per_100",
                value: self.std_dev_per_100,
                constraint: "must be non-negative and finite",
            });
        }
        Ok(())
    }

    /// Expected winnings per hand, in big blinds.
    #[inline]
    pub fn per_hand_mean(&self) -> f64 {
        self.win_rate_per_100 / 100.0
    }

    /// Per-hand standard deviation, in big blinds.
    #[inline]
    pub fn per_hand_std_dev(&self) -> f64 {
        self.std_dev_per_100 / 100.0
    }

    /// This stake's contribution to the total expected value, in
    /// monetary units: `hands * bb_value * win_rate_per_100 / 100`.
    ///
    /// A stake with `hands == 0` contributes exactly zero.
    #[inline]
    pub fn mean_contribution(&self) -> f64 {
        self.hands as f64 * self.bb_value * self.per_hand_mean()
    }

    /// This stake's standard deviation contribution, in monetary
    /// units: `sqrt(hands) * bb_value * std_dev_per_100 / 100`.
    ///
    /// Contributions combine in quadrature across stakes; a stake with
    /// `hands == 0` contributes exactly zero.
    #[inline]
    pub fn sigma_contribution(&self) -> f64 {
        (self.hands as f64).sqrt() * self.bb_value * self.per_hand_std_dev()
    }
}

/// Validates a slice of stakes for use by the aggregator or simulator.
///
/// # Errors
///
/// - [`ModelError::EmptyInput`] if the slice is empty
/// - [`ModelError::Domain`] if any stake fails [`StakeParams::validate`]
pub fn validate_stakes(stakes: &[StakeParams]) -> Result<(), ModelError> {
    if stakes.is_empty() {
        return Err(ModelError::EmptyInput("no stakes provided".to_string()));
    }
    for stake in stakes {
        stake.validate()?;
    }
    Ok(())
}

impl StakeParams {
    /// Builds a stake list from the four parallel arrays supplied by a
    /// presentation layer (big blind values, win rates, standard
    /// deviations, hand counts).
    ///
    /// Hand counts arrive as signed integers because callers typically
    /// parse them from user input; negative counts are rejected here
    /// rather than silently wrapped.
    ///
    /// # Errors
    ///
    /// - [`ModelError::EmptyInput`] if the arrays are empty
    /// - [`ModelError::ShapeMismatch`] if the array lengths differ
    /// - [`ModelError::Domain`] if any entry is out of range
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stakes_core::types::StakeParams;
    ///
    /// let stakes = StakeParams::from_arrays(
    ///     &[2.0, 5.0],
    ///     &[5.0, 4.0],
    ///     &[100.0, 95.0],
    ///     &[100_000, 50_000],
    /// )
    /// .unwrap();
    /// assert_eq!(stakes.len(), 2);
    /// ```
    pub fn from_arrays(
        bb_values: &[f64],
        win_rates: &[f64],
        std_devs: &[f64],
        hands: &[i64],
    ) -> Result<Vec<StakeParams>, ModelError> {
        if bb_values.is_empty() {
            return Err(ModelError::EmptyInput("no stakes provided".to_string()));
        }

        let expected = bb_values.len();
        let lengths: [(&'static str, usize); 3] = [
            ("win_rates", win_rates.len()),
            ("std_devs", std_devs.len()),
            ("hands", hands.len()),
        ];
        for (name, actual) in lengths {
            if actual != expected {
                return Err(ModelError::ShapeMismatch {
                    name,
                    expected,
                    actual,
                });
            }
        }

        let mut stakes = Vec::with_capacity(expected);
        for i in 0..expected {
            if hands[i] < 0 {
                return Err(ModelError::Domain {
                    name: "hands",
                    value: hands[i] as f64,
                    constraint: "must be non-negative",
                });
            }
            let stake = StakeParams::new(bb_values[i], win_rates[i], std_devs[i], hands[i] as u64);
            stake.validate()?;
            stakes.push(stake);
        }

        Ok(stakes)
    }
}
