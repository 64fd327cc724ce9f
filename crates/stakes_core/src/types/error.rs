//! Error types for structured error handling.
//!
//! All validation happens eagerly, before any computation proceeds, and
//! every failure mode is surfaced as a distinct [`ModelError`] variant.
//! Out-of-domain inputs are never silently coerced to NaN or defaults.

use thiserror::Error;

/// Categorised modelling errors.
///
/// # Variants
/// - `ShapeMismatch`: Parallel input arrays have differing lengths
/// - `Domain`: A value violates its stated range
/// - `DegenerateDistribution`: Total sigma is zero where a ratio is required
/// - `EmptyInput`: Nothing to aggregate or simulate
///
/// # Examples
/// ```
/// use stakes_core::types::ModelError;
///
/// let err = ModelError::Domain {
///     name: "std_dev_per_100",
///     value: -1.0,
///     constraint: "must be non-negative",
/// };
/// assert!(err.to_string().contains("std_dev_per_100"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Parallel input arrays have differing lengths.
    #[error("Array length mismatch: '{name}' has {actual} entries, expected {expected}")]
    ShapeMismatch {
        /// Name of the offending array.
        name: &'static str,
        /// Length implied by the first array.
        expected: usize,
        /// Actual length of the offending array.
        actual: usize,
    },

    /// A parameter value violates its stated range.
    #[error("Invalid value for '{name}': {value} ({constraint})")]
    Domain {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
        /// Human-readable statement of the violated constraint.
        constraint: &'static str,
    },

    /// Total sigma is exactly zero where a ratio or scaled interval
    /// would divide by it.
    #[error("Degenerate distribution: {0}")]
    DegenerateDistribution(String),

    /// No stakes provided, or every stake has a hand count of zero.
    #[error("Empty input: {0}")]
    EmptyInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = ModelError::ShapeMismatch {
            name: "hands",
            expected: 3,
            actual: 2,
        };
        assert!(err.to_string().contains("'hands'"));
        assert!(err.to_string().contains("expected 3"));
    }

    #[test]
    fn test_domain_display() {
        let err = ModelError::Domain {
            name: "confidence_level",
            value: 1.0,
            constraint: "must be strictly between 0 and 1",
        };
        assert!(err.to_string().contains("confidence_level"));
        assert!(err.to_string().contains("strictly between"));
    }

    #[test]
    fn test_degenerate_display() {
        let err = ModelError::DegenerateDistribution("total sigma is zero".to_string());
        assert!(err.to_string().contains("total sigma"));
    }
}
