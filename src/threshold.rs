//! Thresholds and per-corner classification.
//!
//! A single threshold splits weights into below/above (iso-lines); a pair
//! splits them into below/within/above (iso-bands).

use crate::error::{ContourError, Result};
use serde::{Deserialize, Serialize};

/// Which kind of geometry a threshold produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContourType {
    IsoLines,
    IsoBands,
}

impl ContourType {
    /// Width of one corner's class in the packed case code
    pub fn bits_per_corner(self) -> u32 {
        match self {
            ContourType::IsoLines => 1,
            ContourType::IsoBands => 2,
        }
    }
}

/// A contour threshold
///
/// Deserializes from a bare number (`6`) or a two-element array (`[2, 4]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    /// Iso-line at a single value
    Line(f64),
    /// Iso-band between `lower` and `upper`, both inclusive
    Band(f64, f64),
}

/// Which threshold of a band a crossing belongs to
///
/// Iso-lines only have [`Level::Lower`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Lower,
    Upper,
}

/// Class of a corner against a band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Ternary {
    Below = 0,
    Within = 1,
    Above = 2,
}

impl Ternary {
    #[inline]
    pub fn classify(value: f64, lower: f64, upper: f64) -> Self {
        if value.is_nan() || value < lower {
            Ternary::Below
        } else if value <= upper {
            Ternary::Within
        } else {
            Ternary::Above
        }
    }
}

impl Threshold {
    pub fn line(value: f64) -> Self {
        Threshold::Line(value)
    }

    pub fn band(lower: f64, upper: f64) -> Self {
        Threshold::Band(lower, upper)
    }

    /// Check the threshold values are finite and, for bands, ordered
    pub fn validate(&self) -> Result<()> {
        match *self {
            Threshold::Line(value) => finite(value),
            Threshold::Band(lower, upper) => {
                finite(lower)?;
                finite(upper)?;
                if lower > upper {
                    return Err(ContourError::InvertedBand { lower, upper });
                }
                Ok(())
            }
        }
    }

    pub fn contour_type(&self) -> ContourType {
        match self {
            Threshold::Line(_) => ContourType::IsoLines,
            Threshold::Band(..) => ContourType::IsoBands,
        }
    }

    /// Class of a single weight: `0|1` for lines, `0|1|2` for bands
    ///
    /// A weight equal to a line threshold counts as above. NaN is below.
    #[inline]
    pub fn classify(&self, weight: f64) -> u8 {
        match *self {
            Threshold::Line(value) => u8::from(weight >= value),
            Threshold::Band(lower, upper) => Ternary::classify(weight, lower, upper) as u8,
        }
    }

    /// Threshold value a crossing of `level` interpolates toward
    pub fn level_value(&self, level: Level) -> f64 {
        match (*self, level) {
            (Threshold::Line(value), _) => value,
            (Threshold::Band(lower, _), Level::Lower) => lower,
            (Threshold::Band(_, upper), Level::Upper) => upper,
        }
    }
}

fn finite(value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ContourError::NonFiniteThreshold(value))
    }
}
