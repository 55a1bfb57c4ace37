//! Error types

use thiserror::Error;

/// Error returned by the checked queries on [`RunningStats`](crate::statistics::RunningStats)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Not enough observations for the requested estimator
    #[error("insufficient data: {count} observation(s), need at least {required}")]
    InsufficientData {
        /// Observations absorbed so far
        count: u64,
        /// Minimum observations the estimator needs
        required: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_display() {
        let err = StatsError::InsufficientData {
            count: 1,
            required: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: 1 observation(s), need at least 2"
        );
    }

    #[test]
    fn test_equality() {
        let a = StatsError::InsufficientData {
            count: 0,
            required: 2,
        };
        let b = StatsError::InsufficientData {
            count: 1,
            required: 2,
        };
        assert_ne!(a, b);
    }
}
