//! Grid pass: run the classifier and vertex generator over every cell
//!
//! Each threshold is processed independently into per-cell segments and
//! polygons. Stitching cell geometry into longer lines or rings is left to
//! the caller; [`to_feature_collection`] only groups it per threshold.

use crate::config::ContourConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::point::Point;
use crate::threshold::Threshold;
use crate::vertices::{get_vertices, VertexParams, Vertices};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Position, Value as GeoValue};
use rayon::prelude::*;
use tracing::{debug, trace};

/// One iso-line segment inside a single cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourSegment {
    pub start: Point,
    pub end: Point,
    /// Position of the threshold in the config's list
    pub threshold_index: usize,
}

/// One iso-band polygon inside a single cell, as an open ring
#[derive(Debug, Clone, PartialEq)]
pub struct ContourPolygon {
    pub vertices: Vec<Point>,
    pub threshold_index: usize,
}

/// Geometry produced by a grid pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContourSet {
    pub segments: Vec<ContourSegment>,
    pub polygons: Vec<ContourPolygon>,
}

impl ContourSet {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.polygons.is_empty()
    }

    /// Append `other`, keeping its order after ours
    pub fn append(&mut self, mut other: ContourSet) {
        self.segments.append(&mut other.segments);
        self.polygons.append(&mut other.polygons);
    }
}

/// Contour one threshold over the whole grid
///
/// With `close_boundary` the pass also visits the ring of cells straddling
/// the grid border, whose outside corners are `-inf`, so every contour is
/// closed. Cells with a NaN corner produce nothing.
pub fn process_level(
    grid: &Grid,
    threshold: Threshold,
    threshold_index: usize,
    config: &ContourConfig,
) -> ContourSet {
    let contour_type = threshold.contour_type();
    let (cols, rows) = grid.cell_dims();
    let (cols, rows) = (cols as isize, rows as isize);

    // Padded cells start at -1; shift indices so they stay unsigned and move
    // the origin back by one cell to compensate.
    let pad: isize = if config.close_boundary { 1 } else { 0 };
    let [cell_w, cell_h] = config.cell_size;
    let origin = Point::new(
        config.grid_origin[0] - pad as f64 * cell_w,
        config.grid_origin[1] - pad as f64 * cell_h,
    );

    let mut set = ContourSet::default();
    let mut skipped = 0usize;

    for y in -pad..rows + pad {
        for x in -pad..cols + pad {
            let cell = if config.close_boundary {
                grid.padded_cell(x, y)
            } else {
                grid.cell(x as usize, y as usize)
            };
            if cell.has_nan() {
                trace!(x, y, "Skipping cell with NaN corner");
                skipped += 1;
                continue;
            }

            let code = cell.classify(&threshold);
            let mut params = VertexParams::new(
                origin,
                config.cell_size,
                (x + pad) as usize,
                (y + pad) as usize,
                code.code,
                contour_type,
            )
            .with_mean_code(code.mean_code);
            if config.interpolate {
                params = params.with_interpolation(cell, threshold);
            }

            match get_vertices(&params) {
                Vertices::Lines(points) => {
                    for pair in points.chunks_exact(2) {
                        set.segments.push(ContourSegment {
                            start: pair[0],
                            end: pair[1],
                            threshold_index,
                        });
                    }
                }
                Vertices::Bands(polygons) => {
                    for polygon in polygons {
                        set.polygons.push(ContourPolygon {
                            vertices: polygon.to_vec(),
                            threshold_index,
                        });
                    }
                }
            }
        }
    }

    debug!(
        threshold_index,
        segments = set.segments.len(),
        polygons = set.polygons.len(),
        skipped,
        "Processed contour level"
    );
    set
}

/// Contour every configured threshold in order
pub fn generate_contours(grid: &Grid, config: &ContourConfig) -> Result<ContourSet> {
    config.validate()?;

    let mut set = ContourSet::default();
    for (index, &threshold) in config.thresholds.iter().enumerate() {
        set.append(process_level(grid, threshold, index, config));
    }
    Ok(set)
}

/// Contour every configured threshold in parallel
///
/// Each rayon task processes one threshold against the shared grid. The
/// result is identical to [`generate_contours`], in threshold order.
pub fn do_concurrent(grid: &Grid, config: &ContourConfig) -> Result<ContourSet> {
    config.validate()?;

    debug!(
        thresholds = config.thresholds.len(),
        width = grid.width(),
        height = grid.height(),
        "Contouring levels concurrently"
    );

    let levels: Vec<ContourSet> = config
        .thresholds
        .par_iter()
        .enumerate()
        .map(|(index, &threshold)| process_level(grid, threshold, index, config))
        .collect();

    let mut set = ContourSet::default();
    for level in levels {
        set.append(level);
    }
    Ok(set)
}

/// Build one GeoJSON Feature per threshold that produced geometry
///
/// Iso-lines become a `MultiLineString` with an `isovalue` property. Bands
/// become a `MultiPolygon` of closed single-ring polygons with `lower_level`
/// and `upper_level` properties. Coordinates are rounded to `precision`
/// decimal places.
pub fn to_feature_collection(
    set: &ContourSet,
    thresholds: &[Threshold],
    precision: u32,
) -> FeatureCollection {
    let position = |point: &Point| point.rounded(precision).to_position();

    let mut lines: Vec<Vec<Vec<Position>>> = vec![Vec::new(); thresholds.len()];
    for segment in &set.segments {
        if let Some(level) = lines.get_mut(segment.threshold_index) {
            level.push(vec![position(&segment.start), position(&segment.end)]);
        }
    }

    let mut bands: Vec<Vec<Vec<Vec<Position>>>> = vec![Vec::new(); thresholds.len()];
    for polygon in &set.polygons {
        let (Some(level), Some(first)) = (
            bands.get_mut(polygon.threshold_index),
            polygon.vertices.first(),
        ) else {
            continue;
        };
        let mut ring: Vec<Position> = polygon.vertices.iter().map(position).collect();
        ring.push(position(first));
        level.push(vec![ring]);
    }

    let mut features = Vec::new();
    for ((threshold, lines), bands) in thresholds.iter().zip(lines).zip(bands) {
        let feature = match *threshold {
            Threshold::Line(isovalue) if !lines.is_empty() => {
                let mut feature = new_feature(GeoValue::MultiLineString(lines));
                if let Some(props) = feature.properties.as_mut() {
                    props.insert("isovalue".to_string(), serde_json::json!(isovalue));
                }
                feature
            }
            Threshold::Band(lower, upper) if !bands.is_empty() => {
                let mut feature = new_feature(GeoValue::MultiPolygon(bands));
                if let Some(props) = feature.properties.as_mut() {
                    props.insert("lower_level".to_string(), serde_json::json!(lower));
                    props.insert("upper_level".to_string(), serde_json::json!(upper));
                }
                feature
            }
            _ => continue,
        };
        features.push(feature);
    }

    FeatureCollection {
        bbox: None,
        foreign_members: None,
        features,
    }
}

fn new_feature(value: GeoValue) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(JsonObject::new()),
        foreign_members: None,
    }
}
