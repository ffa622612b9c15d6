//! Borrowed view over a flat, row-major weight grid.
//!
//! Rows grow upward: index `y * width + x` is the grid point `(x, y)` and row
//! 0 is the bottom row.

use crate::cell::Cell;
use crate::error::{ContourError, Result};

/// A `width` x `height` grid of scalar weights
///
/// Stores a borrowed slice rather than per-point structs; a 1799x1059 grid is
/// 15 MB of `f64` with no per-point coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    weights: &'a [f64],
    width: usize,
    height: usize,
}

impl<'a> Grid<'a> {
    /// Wrap `weights` as a grid, checking it has at least one cell
    ///
    /// Trailing weights past `width * height` are ignored.
    pub fn new(weights: &'a [f64], width: usize, height: usize) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(ContourError::GridTooSmall { width, height });
        }
        let count_error = |expected| ContourError::WeightCount {
            width,
            height,
            expected,
            actual: weights.len(),
        };
        let expected = width.checked_mul(height).ok_or_else(|| count_error(usize::MAX))?;
        if weights.len() < expected {
            return Err(count_error(expected));
        }
        Ok(Self {
            weights,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn weights(&self) -> &'a [f64] {
        self.weights
    }

    /// Number of cells along x and y
    pub fn cell_dims(&self) -> (usize, usize) {
        (self.width - 1, self.height - 1)
    }

    pub fn weight(&self, x: usize, y: usize) -> f64 {
        self.weights[y * self.width + x]
    }

    /// Corner weights of cell `(x, y)`; requires `x < width - 1`, `y < height - 1`
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        Cell::new(
            self.weight(x, y + 1),
            self.weight(x + 1, y + 1),
            self.weight(x + 1, y),
            self.weight(x, y),
        )
    }

    /// Weight at a possibly out-of-grid point, `-inf` outside
    fn padded_weight(&self, x: isize, y: isize) -> f64 {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            f64::NEG_INFINITY
        } else {
            self.weight(x as usize, y as usize)
        }
    }

    /// Corner weights of cell `(x, y)` on the grid padded by one ring of `-inf`
    ///
    /// Valid for `-1 <= x < width` and `-1 <= y < height`. The padding
    /// classifies below every threshold so contours close along the border.
    pub fn padded_cell(&self, x: isize, y: isize) -> Cell {
        Cell::new(
            self.padded_weight(x, y + 1),
            self.padded_weight(x + 1, y + 1),
            self.padded_weight(x + 1, y),
            self.padded_weight(x, y),
        )
    }
}
