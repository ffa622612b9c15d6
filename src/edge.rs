use crate::cell::{Cell, Corner};
use crate::point::Side;
use crate::threshold::{ContourType, Level, Threshold};

/// One side of a cell, walked clockwise from its start corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    start: Corner,
    end: Corner,
}

impl Edge {
    pub fn of(side: Side) -> Self {
        let (start, end) = match side {
            Side::Top => (Corner::TopLeft, Corner::TopRight),
            Side::Right => (Corner::TopRight, Corner::BottomRight),
            Side::Bottom => (Corner::BottomRight, Corner::BottomLeft),
            Side::Left => (Corner::BottomLeft, Corner::TopLeft),
        };
        Self { start, end }
    }

    pub fn start(&self) -> Corner {
        self.start
    }

    pub fn end(&self) -> Corner {
        self.end
    }

    /// Cell-local offset of the point a fraction `t` of the way from start to end
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let (sx, sy) = self.start.offset();
        let (ex, ey) = self.end.offset();
        (sx + (ex - sx) * t, sy + (ey - sy) * t)
    }

    /// Fraction along the edge where a crossing of `level` sits, from class data alone
    ///
    /// An edge spanning one class step is crossed at its midpoint. An edge
    /// spanning a whole band (0 to 2) carries both crossings, at 1/3 and 2/3.
    pub fn nominal_fraction(&self, code: u8, contour_type: ContourType, level: Level) -> f64 {
        let from = self.start.class_in(code, contour_type);
        let to = self.end.class_in(code, contour_type);
        if from.abs_diff(to) < 2 {
            return 0.5;
        }
        let rising = from < to;
        match (rising, level) {
            (true, Level::Lower) | (false, Level::Upper) => 1.0 / 3.0,
            (true, Level::Upper) | (false, Level::Lower) => 2.0 / 3.0,
        }
    }

    /// Fraction along the edge where the field reaches `level`, by linear interpolation
    ///
    /// An infinite corner pulls the crossing onto its finite neighbour. Falls
    /// back to the midpoint when the corner weights give no finite fraction.
    pub fn interpolated_fraction(&self, cell: &Cell, threshold: &Threshold, level: Level) -> f64 {
        let from = cell.weight(self.start);
        let to = cell.weight(self.end);
        if from.is_infinite() && to.is_finite() {
            return 1.0;
        }
        let t = (threshold.level_value(level) - from) / (to - from);
        if t.is_finite() {
            t.clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}

/// A vertex of the per-cell geometry, before it is placed in world space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// A cell corner that lies inside the band
    Corner(Corner),
    /// Where the field crosses one threshold along a side
    Crossing(Side, Level),
}
