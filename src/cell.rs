use crate::threshold::{ContourType, Threshold};

/// A corner of a cell
///
/// The top-left corner is grid point `(x, y+1)`; rows grow upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Corners in clockwise order, starting at the top-left
    pub const CLOCKWISE: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Offset from the cell centre, in cell units
    pub fn offset(self) -> (f64, f64) {
        match self {
            Corner::TopLeft => (-0.5, 0.5),
            Corner::TopRight => (0.5, 0.5),
            Corner::BottomRight => (0.5, -0.5),
            Corner::BottomLeft => (-0.5, -0.5),
        }
    }

    /// Bit position of this corner's class inside a packed case code
    fn shift(self, contour_type: ContourType) -> u32 {
        let slot = match self {
            Corner::TopLeft => 3,
            Corner::TopRight => 2,
            Corner::BottomRight => 1,
            Corner::BottomLeft => 0,
        };
        slot * contour_type.bits_per_corner()
    }

    /// Extract this corner's class from a case code
    pub fn class_in(self, code: u8, contour_type: ContourType) -> u8 {
        let mask = (1u8 << contour_type.bits_per_corner()) - 1;
        (code >> self.shift(contour_type)) & mask
    }
}

/// The four corner weights of one grid square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    top_left: f64,
    top_right: f64,
    bottom_right: f64,
    bottom_left: f64,
}

/// Case code of a classified cell
///
/// `mean_code` is the class of the cell mean. It only matters for saddle
/// codes; for every other code the vertex generator ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellCode {
    pub code: u8,
    pub mean_code: u8,
}

impl Cell {
    pub fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn weight(&self, corner: Corner) -> f64 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// Weights in clockwise order from the top-left corner
    pub fn weights(&self) -> [f64; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    pub fn mean(&self) -> f64 {
        (self.top_left + self.top_right + self.bottom_right + self.bottom_left) / 4.0
    }

    pub fn has_nan(&self) -> bool {
        self.weights().iter().any(|w| w.is_nan())
    }

    /// Classify every corner and pack the classes into a case code
    ///
    /// Iso-lines: `tl<<3 | tr<<2 | br<<1 | bl` (0-15).
    /// Iso-bands: `tl<<6 | tr<<4 | br<<2 | bl`, one 0-2 class per 2-bit field.
    pub fn classify(&self, threshold: &Threshold) -> CellCode {
        let contour_type = threshold.contour_type();
        let code = Corner::CLOCKWISE.iter().fold(0u8, |code, &corner| {
            code | threshold.classify(self.weight(corner)) << corner.shift(contour_type)
        });

        CellCode {
            code,
            mean_code: threshold.classify(self.mean()),
        }
    }
}

/// Inputs of [`get_code`]
#[derive(Debug, Clone, Copy)]
pub struct CodeParams<'a> {
    /// Row-major weights, row 0 at the bottom
    pub cell_weights: &'a [f64],
    pub threshold: Threshold,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Classify cell `(x, y)` of a flat weight grid
///
/// The caller guarantees `x < width - 1`, `y < height - 1` and
/// `cell_weights.len() >= width * height`; debug builds assert it.
pub fn get_code(params: &CodeParams) -> CellCode {
    let CodeParams {
        cell_weights,
        threshold,
        x,
        y,
        width,
        height,
    } = *params;
    debug_assert!(x + 1 < width && y + 1 < height, "cell ({x}, {y}) outside {width}x{height} grid");
    debug_assert!(cell_weights.len() >= width * height);

    let bottom = y * width + x;
    let top = (y + 1) * width + x;
    let cell = Cell::new(
        cell_weights[top],
        cell_weights[top + 1],
        cell_weights[bottom + 1],
        cell_weights[bottom],
    );

    cell.classify(&threshold)
}
