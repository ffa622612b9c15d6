//! Error types for grid, threshold and configuration validation.
//!
//! The contouring kernel itself never fails; these errors come from the
//! constructors and the grid pass entry points that check their inputs.

use thiserror::Error;

/// Result type alias using [`ContourError`].
pub type Result<T> = std::result::Result<T, ContourError>;

#[derive(Debug, Error)]
pub enum ContourError {
    #[error("grid must be at least 2x2, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },

    #[error("grid of {width}x{height} needs {expected} weights, got {actual}")]
    WeightCount {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("threshold must be finite, got {0}")]
    NonFiniteThreshold(f64),

    #[error("band lower bound {lower} is above upper bound {upper}")]
    InvertedBand { lower: f64, upper: f64 },

    #[error("cell size must be positive and finite, got [{0}, {1}]")]
    InvalidCellSize(f64, f64),

    #[error("grid origin must be finite, got [{0}, {1}]")]
    InvalidOrigin(f64, f64),

    #[error("precision must be at most 15 decimal places, got {0}")]
    InvalidPrecision(u32),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = ContourError::WeightCount {
            width: 3,
            height: 3,
            expected: 9,
            actual: 4,
        };
        assert_eq!(err.to_string(), "grid of 3x3 needs 9 weights, got 4");

        let err = ContourError::InvertedBand {
            lower: 9.0,
            upper: 2.0,
        };
        assert_eq!(err.to_string(), "band lower bound 9 is above upper bound 2");
    }

    #[test]
    fn test_json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ContourError = parse.into();
        assert!(matches!(err, ContourError::Json(_)));
    }
}
