//! Case code lookup tables.
//!
//! Offsets are expressed as [`Anchor`]s: cell corners and threshold
//! crossings on the four sides. The vertex generator places them in world
//! space, so the same table serves midpoint and interpolated output.
//!
//! Band polygons walk the cell boundary clockwise from the top-left corner,
//! collecting every corner inside the band and every crossing. A saddle code
//! stores one polygon set per mean class, indexed `[below, within, above]`:
//! corners that share the centre's class are joined through the centre, so
//! the band splits exactly when the centre falls outside it on the side of
//! a diagonal pair.

use crate::cell::Corner;
use crate::edge::Anchor;
use crate::point::Side;
use crate::threshold::Level;

/// A segment as the pair of sides its endpoints lie on
pub type SidePair = [Side; 2];

/// Iso-line geometry for one case code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCase {
    Fixed(&'static [SidePair]),
    /// Pairings selected by mean code `0` and `1`
    Saddle([&'static [SidePair]; 2]),
}

/// Iso-band geometry for one case code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandCase {
    Empty,
    Fixed(&'static [&'static [Anchor]]),
    /// Polygon sets selected by mean code `0`, `1` and `2`
    Saddle([&'static [&'static [Anchor]]; 3]),
}

impl LineCase {
    pub fn segments(&self, mean_code: u8) -> &'static [SidePair] {
        match *self {
            LineCase::Fixed(segments) => segments,
            LineCase::Saddle(pairings) => pairings[usize::from(mean_code.min(1))],
        }
    }
}

impl BandCase {
    pub fn polygons(&self, mean_code: u8) -> &'static [&'static [Anchor]] {
        match *self {
            BandCase::Empty => &[],
            BandCase::Fixed(polygons) => polygons,
            BandCase::Saddle(variants) => variants[usize::from(mean_code.min(2))],
        }
    }

    pub fn is_saddle(&self) -> bool {
        matches!(self, BandCase::Saddle(_))
    }
}

const N: Side = Side::Top;
const E: Side = Side::Right;
const S: Side = Side::Bottom;
const W: Side = Side::Left;

/// Iso-line cases indexed by code `tl<<3 | tr<<2 | br<<1 | bl`
///
/// Saddle pairing: mean code 0 keeps the above-threshold diagonal joined,
/// mean code 1 cuts it apart.
pub const ISOLINE_CASES: [LineCase; 16] = [
    LineCase::Fixed(&[]),           // 0000
    LineCase::Fixed(&[[W, S]]),     // 0001
    LineCase::Fixed(&[[S, E]]),     // 0010
    LineCase::Fixed(&[[W, E]]),     // 0011
    LineCase::Fixed(&[[N, E]]),     // 0100
    LineCase::Saddle([&[[W, N], [S, E]], &[[W, S], [N, E]]]), // 0101
    LineCase::Fixed(&[[N, S]]),     // 0110
    LineCase::Fixed(&[[W, N]]),     // 0111
    LineCase::Fixed(&[[W, N]]),     // 1000
    LineCase::Fixed(&[[N, S]]),     // 1001
    LineCase::Saddle([&[[W, S], [N, E]], &[[W, N], [S, E]]]), // 1010
    LineCase::Fixed(&[[N, E]]),     // 1011
    LineCase::Fixed(&[[W, E]]),     // 1100
    LineCase::Fixed(&[[S, E]]),     // 1101
    LineCase::Fixed(&[[W, S]]),     // 1110
    LineCase::Fixed(&[]),           // 1111
];

pub fn isoline_case(code: u8) -> Option<LineCase> {
    ISOLINE_CASES.get(usize::from(code)).copied()
}

const NW: Anchor = Anchor::Corner(Corner::TopLeft);
const NE: Anchor = Anchor::Corner(Corner::TopRight);
const SE: Anchor = Anchor::Corner(Corner::BottomRight);
const SW: Anchor = Anchor::Corner(Corner::BottomLeft);

const TOP_LO: Anchor = Anchor::Crossing(Side::Top, Level::Lower);
const TOP_HI: Anchor = Anchor::Crossing(Side::Top, Level::Upper);
const RIGHT_LO: Anchor = Anchor::Crossing(Side::Right, Level::Lower);
const RIGHT_HI: Anchor = Anchor::Crossing(Side::Right, Level::Upper);
const BOTTOM_LO: Anchor = Anchor::Crossing(Side::Bottom, Level::Lower);
const BOTTOM_HI: Anchor = Anchor::Crossing(Side::Bottom, Level::Upper);
const LEFT_LO: Anchor = Anchor::Crossing(Side::Left, Level::Lower);
const LEFT_HI: Anchor = Anchor::Crossing(Side::Left, Level::Upper);

/// Iso-band case for a code `tl<<6 | tr<<4 | br<<2 | bl`
///
/// `None` for codes holding a `3` in any corner field.
pub fn isoband_case(code: u8) -> Option<BandCase> {
    let case = match code {
        0 => BandCase::Empty, // 0000
        1 => BandCase::Fixed(&[&[BOTTOM_LO, SW, LEFT_LO]]), // 0001
        2 => BandCase::Fixed(&[&[BOTTOM_LO, BOTTOM_HI, LEFT_HI, LEFT_LO]]), // 0002
        4 => BandCase::Fixed(&[&[RIGHT_LO, SE, BOTTOM_LO]]), // 0010
        5 => BandCase::Fixed(&[&[RIGHT_LO, SE, SW, LEFT_LO]]), // 0011
        6 => BandCase::Fixed(&[&[RIGHT_LO, SE, BOTTOM_HI, LEFT_HI, LEFT_LO]]), // 0012
        8 => BandCase::Fixed(&[&[RIGHT_LO, RIGHT_HI, BOTTOM_HI, BOTTOM_LO]]), // 0020
        9 => BandCase::Fixed(&[&[RIGHT_LO, RIGHT_HI, BOTTOM_HI, SW, LEFT_LO]]), // 0021
        10 => BandCase::Fixed(&[&[RIGHT_LO, RIGHT_HI, LEFT_HI, LEFT_LO]]), // 0022
        16 => BandCase::Fixed(&[&[TOP_LO, NE, RIGHT_LO]]), // 0100
        // 0101
        17 => BandCase::Saddle([
            &[&[TOP_LO, NE, RIGHT_LO], &[BOTTOM_LO, SW, LEFT_LO]],
            &[&[TOP_LO, NE, RIGHT_LO, BOTTOM_LO, SW, LEFT_LO]],
            &[&[TOP_LO, NE, RIGHT_LO, BOTTOM_LO, SW, LEFT_LO]],
        ]),
        // 0102
        18 => BandCase::Saddle([
            &[&[TOP_LO, NE, RIGHT_LO], &[BOTTOM_LO, BOTTOM_HI, LEFT_HI, LEFT_LO]],
            &[&[TOP_LO, NE, RIGHT_LO, BOTTOM_LO, BOTTOM_HI, LEFT_HI, LEFT_LO]],
            &[&[TOP_LO, NE, RIGHT_LO, BOTTOM_LO, BOTTOM_HI, LEFT_HI, LEFT_LO]],
        ]),
        20 => BandCase::Fixed(&[&[TOP_LO, NE, SE, BOTTOM_LO]]), // 0110
        21 => BandCase::Fixed(&[&[TOP_LO, NE, SE, SW, LEFT_LO]]), // 0111
        22 => BandCase::Fixed(&[&[TOP_LO, NE, SE, BOTTOM_HI, LEFT_HI, LEFT_LO]]), // 0112
        24 => BandCase::Fixed(&[&[TOP_LO, NE, RIGHT_HI, BOTTOM_HI, BOTTOM_LO]]), // 0120
        25 => BandCase::Fixed(&[&[TOP_LO, NE, RIGHT_HI, BOTTOM_HI, SW, LEFT_LO]]), // 0121
        26 => BandCase::Fixed(&[&[TOP_LO, NE, RIGHT_HI, LEFT_HI, LEFT_LO]]), // 0122
        32 => BandCase::Fixed(&[&[TOP_LO, TOP_HI, RIGHT_HI, RIGHT_LO]]), // 0200
        // 0201
        33 => BandCase::Saddle([
            &[&[TOP_LO, TOP_HI, RIGHT_HI, RIGHT_LO], &[BOTTOM_LO, SW, LEFT_LO]],
            &[&[TOP_LO, TOP_HI, RIGHT_HI, RIGHT_LO, BOTTOM_LO, SW, LEFT_LO]],
            &[&[TOP_LO, TOP_HI, RIGHT_HI, RIGHT_LO, BOTTOM_LO, SW, LEFT_LO]],
        ]),
        // 0202
        34 => BandCase::Saddle([
            &[&[TOP_LO, TOP_HI, RIGHT_HI, RIGHT_LO], &[BOTTOM_LO, BOTTOM_HI, LEFT_HI, LEFT_LO]],
            &[&[TOP_LO, TOP_HI, RIGHT_HI, RIGHT_LO, BOTTOM_LO, BOTTOM_HI, LEFT_HI, LEFT_LO]],
            &[&[TOP_LO, TOP_HI, LEFT_HI, LEFT_LO], &[RIGHT_HI, RIGHT_LO, BOTTOM_LO, BOTTOM_HI]],
        ]),
        36 => BandCase::Fixed(&[&[TOP_LO, TOP_HI, RIGHT_HI, SE, BOTTOM_LO]]), // 0210
        37 => BandCase::Fixed(&[&[TOP_LO, TOP_HI, RIGHT_HI, SE, SW, LEFT_LO]]), // 0211
        // 0212
        38 => BandCase::Saddle([
            &[&[TOP_LO, TOP_HI, RIGHT_HI, SE, BOTTOM_HI, LEFT_HI, LEFT_LO]],
            &[&[TOP_LO, TOP_HI, RIGHT_HI, SE, BOTTOM_HI, LEFT_HI, LEFT_LO]],
            &[&[TOP_LO, TOP_HI, LEFT_HI, LEFT_LO], &[RIGHT_HI, SE, BOTTOM_HI]],
        ]),
        40 => BandCase::Fixed(&[&[TOP_LO, TOP_HI, BOTTOM_HI, BOTTOM_LO]]), // 0220
        41 => BandCase::Fixed(&[&[TOP_LO, TOP_HI, BOTTOM_HI, SW, LEFT_LO]]), // 0221
        42 => BandCase::Fixed(&[&[TOP_LO, TOP_HI, LEFT_HI, LEFT_LO]]), // 0222
        64 => BandCase::Fixed(&[&[NW, TOP_LO, LEFT_LO]]), // 1000
        65 => BandCase::Fixed(&[&[NW, TOP_LO, BOTTOM_LO, SW]]), // 1001
        66 => BandCase::Fixed(&[&[NW, TOP_LO, BOTTOM_LO, BOTTOM_HI, LEFT_HI]]), // 1002
        // 1010
        68 => BandCase::Saddle([
            &[&[NW, TOP_LO, LEFT_LO], &[RIGHT_LO, SE, BOTTOM_LO]],
            &[&[NW, TOP_LO, RIGHT_LO, SE, BOTTOM_LO, LEFT_LO]],
            &[&[NW, TOP_LO, RIGHT_LO, SE, BOTTOM_LO, LEFT_LO]],
        ]),
        69 => BandCase::Fixed(&[&[NW, TOP_LO, RIGHT_LO, SE, SW]]), // 1011
        70 => BandCase::Fixed(&[&[NW, TOP_LO, RIGHT_LO, SE, BOTTOM_HI, LEFT_HI]]), // 1012
        // 1020
        72 => BandCase::Saddle([
            &[&[NW, TOP_LO, LEFT_LO], &[RIGHT_LO, RIGHT_HI, BOTTOM_HI, BOTTOM_LO]],
            &[&[NW, TOP_LO, RIGHT_LO, RIGHT_HI, BOTTOM_HI, BOTTOM_LO, LEFT_LO]],
            &[&[NW, TOP_LO, RIGHT_LO, RIGHT_HI, BOTTOM_HI, BOTTOM_LO, LEFT_LO]],
        ]),
        73 => BandCase::Fixed(&[&[NW, TOP_LO, RIGHT_LO, RIGHT_HI, BOTTOM_HI, SW]]), // 1021
        74 => BandCase::Fixed(&[&[NW, TOP_LO, RIGHT_LO, RIGHT_HI, LEFT_HI]]), // 1022
        80 => BandCase::Fixed(&[&[NW, NE, RIGHT_LO, LEFT_LO]]), // 1100
        81 => BandCase::Fixed(&[&[NW, NE, RIGHT_LO, BOTTOM_LO, SW]]), // 1101
        82 => BandCase::Fixed(&[&[NW, NE, RIGHT_LO, BOTTOM_LO, BOTTOM_HI, LEFT_HI]]), // 1102
        84 => BandCase::Fixed(&[&[NW, NE, SE, BOTTOM_LO, LEFT_LO]]), // 1110
        85 => BandCase::Fixed(&[&[NW, NE, SE, SW]]), // 1111
        86 => BandCase::Fixed(&[&[NW, NE, SE, BOTTOM_HI, LEFT_HI]]), // 1112
        88 => BandCase::Fixed(&[&[NW, NE, RIGHT_HI, BOTTOM_HI, BOTTOM_LO, LEFT_LO]]), // 1120
        89 => BandCase::Fixed(&[&[NW, NE, RIGHT_HI, BOTTOM_HI, SW]]), // 1121
        90 => BandCase::Fixed(&[&[NW, NE, RIGHT_HI, LEFT_HI]]), // 1122
        96 => BandCase::Fixed(&[&[NW, TOP_HI, RIGHT_HI, RIGHT_LO, LEFT_LO]]), // 1200
        97 => BandCase::Fixed(&[&[NW, TOP_HI, RIGHT_HI, RIGHT_LO, BOTTOM_LO, SW]]), // 1201
        // 1202
        98 => BandCase::Saddle([
            &[&[NW, TOP_HI, RIGHT_HI, RIGHT_LO, BOTTOM_LO, BOTTOM_HI, LEFT_HI]],
            &[&[NW, TOP_HI, RIGHT_HI, RIGHT_LO, BOTTOM_LO, BOTTOM_HI, LEFT_HI]],
            &[&[NW, TOP_HI, LEFT_HI], &[RIGHT_HI, RIGHT_LO, BOTTOM_LO, BOTTOM_HI]],
        ]),
        100 => BandCase::Fixed(&[&[NW, TOP_HI, RIGHT_HI, SE, BOTTOM_LO, LEFT_LO]]), // 1210
        101 => BandCase::Fixed(&[&[NW, TOP_HI, RIGHT_HI, SE, SW]]), // 1211
        // 1212
        102 => BandCase::Saddle([
            &[&[NW, TOP_HI, RIGHT_HI, SE, BOTTOM_HI, LEFT_HI]],
            &[&[NW, TOP_HI, RIGHT_HI, SE, BOTTOM_HI, LEFT_HI]],
            &[&[NW, TOP_HI, LEFT_HI], &[RIGHT_HI, SE, BOTTOM_HI]],
        ]),
        104 => BandCase::Fixed(&[&[NW, TOP_HI, BOTTOM_HI, BOTTOM_LO, LEFT_LO]]), // 1220
        105 => BandCase::Fixed(&[&[NW, TOP_HI, BOTTOM_HI, SW]]), // 1221
        106 => BandCase::Fixed(&[&[NW, TOP_HI, LEFT_HI]]), // 1222
        128 => BandCase::Fixed(&[&[TOP_HI, TOP_LO, LEFT_LO, LEFT_HI]]), // 2000
        129 => BandCase::Fixed(&[&[TOP_HI, TOP_LO, BOTTOM_LO, SW, LEFT_HI]]), // 2001
        130 => BandCase::Fixed(&[&[TOP_HI, TOP_LO, BOTTOM_LO, BOTTOM_HI]]), // 2002
        // 2010
        132 => BandCase::Saddle([
            &[&[TOP_HI, TOP_LO, LEFT_LO, LEFT_HI], &[RIGHT_LO, SE, BOTTOM_LO]],
            &[&[TOP_HI, TOP_LO, RIGHT_LO, SE, BOTTOM_LO, LEFT_LO, LEFT_HI]],
            &[&[TOP_HI, TOP_LO, RIGHT_LO, SE, BOTTOM_LO, LEFT_LO, LEFT_HI]],
        ]),
        133 => BandCase::Fixed(&[&[TOP_HI, TOP_LO, RIGHT_LO, SE, SW, LEFT_HI]]), // 2011
        134 => BandCase::Fixed(&[&[TOP_HI, TOP_LO, RIGHT_LO, SE, BOTTOM_HI]]), // 2012
        // 2020
        136 => BandCase::Saddle([
            &[&[TOP_HI, TOP_LO, LEFT_LO, LEFT_HI], &[RIGHT_LO, RIGHT_HI, BOTTOM_HI, BOTTOM_LO]],
            &[&[TOP_HI, TOP_LO, RIGHT_LO, RIGHT_HI, BOTTOM_HI, BOTTOM_LO, LEFT_LO, LEFT_HI]],
            &[&[TOP_HI, TOP_LO, RIGHT_LO, RIGHT_HI], &[BOTTOM_HI, BOTTOM_LO, LEFT_LO, LEFT_HI]],
        ]),
        // 2021
        137 => BandCase::Saddle([
            &[&[TOP_HI, TOP_LO, RIGHT_LO, RIGHT_HI, BOTTOM_HI, SW, LEFT_HI]],
            &[&[TOP_HI, TOP_LO, RIGHT_LO, RIGHT_HI, BOTTOM_HI, SW, LEFT_HI]],
            &[&[TOP_HI, TOP_LO, RIGHT_LO, RIGHT_HI], &[BOTTOM_HI, SW, LEFT_HI]],
        ]),
        138 => BandCase::Fixed(&[&[TOP_HI, TOP_LO, RIGHT_LO, RIGHT_HI]]), // 2022
        144 => BandCase::Fixed(&[&[TOP_HI, NE, RIGHT_LO, LEFT_LO, LEFT_HI]]), // 2100
        145 => BandCase::Fixed(&[&[TOP_HI, NE, RIGHT_LO, BOTTOM_LO, SW, LEFT_HI]]), // 2101
        146 => BandCase::Fixed(&[&[TOP_HI, NE, RIGHT_LO, BOTTOM_LO, BOTTOM_HI]]), // 2102
        148 => BandCase::Fixed(&[&[TOP_HI, NE, SE, BOTTOM_LO, LEFT_LO, LEFT_HI]]), // 2110
        149 => BandCase::Fixed(&[&[TOP_HI, NE, SE, SW, LEFT_HI]]), // 2111
        150 => BandCase::Fixed(&[&[TOP_HI, NE, SE, BOTTOM_HI]]), // 2112
        // 2120
        152 => BandCase::Saddle([
            &[&[TOP_HI, NE, RIGHT_HI, BOTTOM_HI, BOTTOM_LO, LEFT_LO, LEFT_HI]],
            &[&[TOP_HI, NE, RIGHT_HI, BOTTOM_HI, BOTTOM_LO, LEFT_LO, LEFT_HI]],
            &[&[TOP_HI, NE, RIGHT_HI], &[BOTTOM_HI, BOTTOM_LO, LEFT_LO, LEFT_HI]],
        ]),
        // 2121
        153 => BandCase::Saddle([
            &[&[TOP_HI, NE, RIGHT_HI, BOTTOM_HI, SW, LEFT_HI]],
            &[&[TOP_HI, NE, RIGHT_HI, BOTTOM_HI, SW, LEFT_HI]],
            &[&[TOP_HI, NE, RIGHT_HI], &[BOTTOM_HI, SW, LEFT_HI]],
        ]),
        154 => BandCase::Fixed(&[&[TOP_HI, NE, RIGHT_HI]]), // 2122
        160 => BandCase::Fixed(&[&[RIGHT_HI, RIGHT_LO, LEFT_LO, LEFT_HI]]), // 2200
        161 => BandCase::Fixed(&[&[RIGHT_HI, RIGHT_LO, BOTTOM_LO, SW, LEFT_HI]]), // 2201
        162 => BandCase::Fixed(&[&[RIGHT_HI, RIGHT_LO, BOTTOM_LO, BOTTOM_HI]]), // 2202
        164 => BandCase::Fixed(&[&[RIGHT_HI, SE, BOTTOM_LO, LEFT_LO, LEFT_HI]]), // 2210
        165 => BandCase::Fixed(&[&[RIGHT_HI, SE, SW, LEFT_HI]]), // 2211
        166 => BandCase::Fixed(&[&[RIGHT_HI, SE, BOTTOM_HI]]), // 2212
        168 => BandCase::Fixed(&[&[BOTTOM_HI, BOTTOM_LO, LEFT_LO, LEFT_HI]]), // 2220
        169 => BandCase::Fixed(&[&[BOTTOM_HI, SW, LEFT_HI]]), // 2221
        170 => BandCase::Empty, // 2222
        _ => return None,
    };
    Some(case)
}
