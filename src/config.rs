//! Grid pass configuration.

use crate::error::{ContourError, Result};
use crate::point::{Point, MAX_PRECISION};
use crate::threshold::Threshold;
use serde::{Deserialize, Serialize};

/// Configuration for a contouring pass
///
/// Deserializes from camelCase JSON; every field is optional:
///
/// ```json
/// { "gridOrigin": [100, 200], "cellSize": [10, 20], "thresholds": [6, [2, 4]] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContourConfig {
    /// World position of the grid's lower-left corner
    pub grid_origin: [f64; 2],
    /// World size of one cell along x and y
    pub cell_size: [f64; 2],
    /// Levels to contour, each a line value or a `[lower, upper]` band
    pub thresholds: Vec<Threshold>,
    /// Close contours along the grid border
    pub close_boundary: bool,
    /// Interpolate crossings from the weights instead of using nominal positions
    pub interpolate: bool,
    /// Decimal places kept in GeoJSON coordinates
    pub precision: u32,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            grid_origin: [0.0, 0.0],
            cell_size: [1.0, 1.0],
            thresholds: vec![],
            close_boundary: false,
            interpolate: false,
            precision: 5,
        }
    }
}

impl ContourConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_thresholds(mut self, thresholds: Vec<Threshold>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn origin(&self) -> Point {
        Point::from(self.grid_origin)
    }

    pub fn validate(&self) -> Result<()> {
        let [w, h] = self.cell_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ContourError::InvalidCellSize(w, h));
        }
        let [ox, oy] = self.grid_origin;
        if !(ox.is_finite() && oy.is_finite()) {
            return Err(ContourError::InvalidOrigin(ox, oy));
        }
        if self.precision > MAX_PRECISION {
            return Err(ContourError::InvalidPrecision(self.precision));
        }
        for threshold in &self.thresholds {
            threshold.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ContourConfig::default();
        assert_eq!(config.cell_size, [1.0, 1.0]);
        assert_eq!(config.precision, 5);
        assert!(config.thresholds.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_camel_case() {
        let config = ContourConfig::from_json(
            r#"{
                "gridOrigin": [100, 200],
                "cellSize": [10, 20],
                "thresholds": [6, [2, 4]],
                "closeBoundary": true
            }"#,
        )
        .unwrap();
        assert_eq!(config.origin(), Point::new(100.0, 200.0));
        assert_eq!(config.cell_size, [10.0, 20.0]);
        assert_eq!(
            config.thresholds,
            vec![Threshold::line(6.0), Threshold::band(2.0, 4.0)]
        );
        assert!(config.close_boundary);
        assert!(!config.interpolate);
        assert_eq!(config.precision, 5);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            ContourConfig::from_json(r#"{ "cellSize": [0, 1] }"#),
            Err(ContourError::InvalidCellSize(..))
        ));
        assert!(matches!(
            ContourConfig::from_json(r#"{ "thresholds": [[4, 2]] }"#),
            Err(ContourError::InvertedBand { .. })
        ));
        assert!(matches!(
            ContourConfig::from_json(r#"{ "thresholds": "six" }"#),
            Err(ContourError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_bounds_precision() {
        assert!(matches!(
            ContourConfig::from_json(r#"{ "thresholds": [5], "precision": 400 }"#),
            Err(ContourError::InvalidPrecision(400))
        ));
        let config = ContourConfig::from_json(r#"{ "thresholds": [5], "precision": 15 }"#).unwrap();
        assert_eq!(config.precision, 15);
    }

    #[test]
    fn test_non_finite_origin() {
        let config = ContourConfig {
            grid_origin: [f64::NAN, 0.0],
            ..ContourConfig::default()
        };
        assert!(matches!(config.validate(), Err(ContourError::InvalidOrigin(..))));
    }
}
