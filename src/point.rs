use geojson::Position;
use std::hash::{Hash, Hasher};

/// Most decimal places an `f64` coordinate can meaningfully keep
pub const MAX_PRECISION: u32 = 15;

/// Side of a cell, named as seen with y growing upward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Sides in clockwise order, starting with the top edge
    pub const CLOCKWISE: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// A vertex in world space
///
/// Emitted by the vertex generator after mapping a cell-local offset through
/// the grid origin and cell size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Round both coordinates to `precision` decimal places, at most [`MAX_PRECISION`]
    pub fn rounded(&self, precision: u32) -> Self {
        let factor = 10_f64.powi(precision.min(MAX_PRECISION) as i32);
        Self {
            x: (self.x * factor).round() / factor,
            y: (self.y * factor).round() / factor,
        }
    }

    /// GeoJSON position `[x, y]`
    pub fn to_position(&self) -> Position {
        vec![self.x, self.y]
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 and 0.0 compare equal, so they must hash equal
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}
