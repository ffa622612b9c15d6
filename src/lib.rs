//! # cell-contours
//!
//! Per-cell marching squares kernel for iso-lines and iso-bands.
//!
//! A scalar field is sampled on a regular grid of `width * height` weights,
//! stored row-major with row 0 at the bottom. Every square of four adjacent
//! grid points is a cell. Contouring a cell is two steps:
//!
//! 1. [`get_code`] classifies the four corners against a threshold and packs
//!    the classes into a case code, plus the class of the cell mean.
//! 2. [`get_vertices`] turns the case code into world-space geometry: segment
//!    endpoints for iso-lines, polygons for iso-bands. Saddle codes use the
//!    mean class to choose which corners connect.
//!
//! ## Case codes
//!
//! Iso-lines use one bit per corner (`tl<<3 | tr<<2 | br<<1 | bl`, 0-15); a
//! corner at or above the threshold is 1. Iso-bands use two bits per corner
//! (`tl<<6 | tr<<4 | br<<2 | bl`): 0 below the band, 1 within it (both bounds
//! inclusive), 2 above.
//!
//! ## Examples
//!
//! Classifying and generating one cell:
//!
//! ```rust
//! use cell_contours::{get_code, get_vertices, CodeParams, ContourType, Point, Threshold, VertexParams};
//!
//! // row-1: 5 10 / row-0: 5 5
//! let weights = [5.0, 5.0, 5.0, 10.0];
//! let code = get_code(&CodeParams {
//!     cell_weights: &weights,
//!     threshold: Threshold::line(6.0),
//!     x: 0,
//!     y: 0,
//!     width: 2,
//!     height: 2,
//! });
//! assert_eq!(code.code, 4);
//!
//! let params = VertexParams::new(Point::new(100.0, 200.0), [10.0, 20.0], 0, 0, code.code, ContourType::IsoLines);
//! let vertices = get_vertices(&params);
//! assert_eq!(vertices.lines().unwrap(), &[Point::new(110.0, 230.0), Point::new(115.0, 220.0)]);
//! ```
//!
//! Running a whole grid, one rayon task per threshold:
//!
//! ```rust
//! use cell_contours::{do_concurrent, to_feature_collection, ContourConfig, Grid};
//!
//! let weights = [0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 0.0];
//! let grid = Grid::new(&weights, 3, 3)?;
//! let config = ContourConfig::from_json(r#"{ "thresholds": [5, [2, 8]] }"#)?;
//!
//! let contours = do_concurrent(&grid, &config)?;
//! let collection = to_feature_collection(&contours, &config.thresholds, config.precision);
//! assert_eq!(collection.features.len(), 2);
//! # Ok::<(), cell_contours::ContourError>(())
//! ```

mod cell;
mod config;
mod edge;
mod error;
mod grid;
pub mod lookup_tables;
mod marching_squares;
mod point;
mod shape;
mod threshold;
mod vertices;

pub use cell::{get_code, Cell, CellCode, CodeParams, Corner};
pub use config::ContourConfig;
pub use edge::{Anchor, Edge};
pub use error::{ContourError, Result};
pub use grid::Grid;
pub use marching_squares::{
    do_concurrent, generate_contours, process_level, to_feature_collection, ContourPolygon,
    ContourSegment, ContourSet,
};
pub use point::{Point, Side};
pub use shape::ShapeType;
pub use threshold::{ContourType, Level, Ternary, Threshold};
pub use vertices::{get_vertices, Polygon, VertexParams, Vertices};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_feeds_vertices() {
        // tl(2), tr(1), br(2), bl(2) = 154
        let weights = [5.0, 5.0, 5.0, 3.0];
        let code = get_code(&CodeParams {
            cell_weights: &weights,
            threshold: Threshold::band(2.0, 4.0),
            x: 0,
            y: 0,
            width: 2,
            height: 2,
        });
        assert_eq!(code.code, 154);
        assert_eq!(ShapeType::from_code(code.code), Some(ShapeType::Triangle));

        let params = VertexParams::new(
            Point::new(100.0, 200.0),
            [10.0, 20.0],
            0,
            0,
            code.code,
            ContourType::IsoBands,
        )
        .with_mean_code(code.mean_code);
        let polygons = get_vertices(&params);
        assert_eq!(polygons.polygons().unwrap()[0].len(), 3);
    }
}
