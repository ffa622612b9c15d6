//! Vertex generation: case code to world-space geometry.
//!
//! Offsets come from [`crate::lookup_tables`] relative to the cell centre,
//! which sits at `origin + (x + 1, y + 1) * cell_size`. Crossings land on
//! nominal edge positions unless the caller supplies the cell's weights, in
//! which case they are linearly interpolated.

use crate::cell::Cell;
use crate::edge::{Anchor, Edge};
use crate::lookup_tables::{isoband_case, isoline_case};
use crate::point::Point;
use crate::threshold::{ContourType, Level, Threshold};
use arrayvec::ArrayVec;
use tracing::warn;

/// Vertices of one band polygon; a cell yields at most eight
pub type Polygon = ArrayVec<Point, 8>;

/// Geometry emitted for one cell
#[derive(Debug, Clone, PartialEq)]
pub enum Vertices {
    /// Segment endpoints, consecutive pairs form one segment
    Lines(ArrayVec<Point, 4>),
    /// Band polygons, each an open ring
    Bands(ArrayVec<Polygon, 2>),
}

impl Vertices {
    pub fn is_empty(&self) -> bool {
        match self {
            Vertices::Lines(points) => points.is_empty(),
            Vertices::Bands(polygons) => polygons.is_empty(),
        }
    }

    pub fn lines(&self) -> Option<&[Point]> {
        match self {
            Vertices::Lines(points) => Some(points),
            Vertices::Bands(_) => None,
        }
    }

    pub fn polygons(&self) -> Option<&[Polygon]> {
        match self {
            Vertices::Bands(polygons) => Some(polygons),
            Vertices::Lines(_) => None,
        }
    }
}

/// Inputs of [`get_vertices`]
#[derive(Debug, Clone, Copy)]
pub struct VertexParams {
    /// World position of the grid's lower-left corner
    pub grid_origin: Point,
    /// World size of one cell along x and y
    pub cell_size: [f64; 2],
    pub x: usize,
    pub y: usize,
    pub code: u8,
    /// Only read for saddle codes
    pub mean_code: u8,
    pub contour_type: ContourType,
    /// Cell weights and threshold for interpolated crossings
    pub interpolate: Option<(Cell, Threshold)>,
}

impl VertexParams {
    /// Nominal-position parameters for cell `(x, y)`
    pub fn new(
        grid_origin: Point,
        cell_size: [f64; 2],
        x: usize,
        y: usize,
        code: u8,
        contour_type: ContourType,
    ) -> Self {
        Self {
            grid_origin,
            cell_size,
            x,
            y,
            code,
            mean_code: 0,
            contour_type,
            interpolate: None,
        }
    }

    pub fn with_mean_code(mut self, mean_code: u8) -> Self {
        self.mean_code = mean_code;
        self
    }

    pub fn with_interpolation(mut self, cell: Cell, threshold: Threshold) -> Self {
        self.interpolate = Some((cell, threshold));
        self
    }

    /// Map a cell-local offset into world space
    fn place(&self, (dx, dy): (f64, f64)) -> Point {
        Point::new(
            self.grid_origin.x() + (self.x as f64 + 1.0 + dx) * self.cell_size[0],
            self.grid_origin.y() + (self.y as f64 + 1.0 + dy) * self.cell_size[1],
        )
    }

    fn resolve(&self, anchor: Anchor) -> Point {
        let offset = match anchor {
            Anchor::Corner(corner) => corner.offset(),
            Anchor::Crossing(side, level) => {
                let edge = Edge::of(side);
                edge.point_at(self.fraction(&edge, level))
            }
        };
        self.place(offset)
    }

    fn fraction(&self, edge: &Edge, level: Level) -> f64 {
        match &self.interpolate {
            Some((cell, threshold)) => edge.interpolated_fraction(cell, threshold, level),
            None => edge.nominal_fraction(self.code, self.contour_type, level),
        }
    }
}

/// Vertices of cell `(x, y)` for an already classified case code
///
/// Iso-lines yield segment endpoint pairs; iso-bands yield polygons. Uniform
/// codes yield nothing, and so do invalid codes after a warning.
pub fn get_vertices(params: &VertexParams) -> Vertices {
    match params.contour_type {
        ContourType::IsoLines => Vertices::Lines(line_vertices(params)),
        ContourType::IsoBands => Vertices::Bands(band_vertices(params)),
    }
}

fn line_vertices(params: &VertexParams) -> ArrayVec<Point, 4> {
    let mut points = ArrayVec::new();
    let Some(case) = isoline_case(params.code) else {
        warn!("Unknown iso-line code: {}", params.code);
        return points;
    };

    for [from, to] in case.segments(params.mean_code) {
        points.push(params.resolve(Anchor::Crossing(*from, Level::Lower)));
        points.push(params.resolve(Anchor::Crossing(*to, Level::Lower)));
    }
    points
}

fn band_vertices(params: &VertexParams) -> ArrayVec<Polygon, 2> {
    let mut polygons = ArrayVec::new();
    let Some(case) = isoband_case(params.code) else {
        warn!("Unknown iso-band code: {}", params.code);
        return polygons;
    };

    for anchors in case.polygons(params.mean_code) {
        polygons.push(anchors.iter().map(|&anchor| params.resolve(anchor)).collect());
    }
    polygons
}
