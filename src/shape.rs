/// The polygon family a band code produces
///
/// Based on ternary classification (below/within/above threshold),
/// the 81 cell configurations minus the two empty ones map to these 7 types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Triangle,
    Pentagon,
    Rectangle,
    Trapezoid,
    Hexagon,
    Saddle,
    Square,
}

impl ShapeType {
    /// Shape of an iso-band code, `None` for empty, full and invalid codes
    pub fn from_code(code: u8) -> Option<Self> {
        let shape = match code {
            169 | 166 | 154 | 106 | 1 | 4 | 16 | 64 => ShapeType::Triangle,

            101 | 149 | 86 | 89 | 69 | 21 | 84 | 81 | 96 | 24 | 6 | 129 | 74 | 146 | 164 | 41 |
            66 | 144 | 36 | 9 | 104 | 26 | 134 | 161 => ShapeType::Pentagon,

            5 | 20 | 80 | 65 | 165 | 150 | 90 | 105 | 160 | 130 | 10 | 40 => ShapeType::Rectangle,

            168 | 2 | 162 | 8 | 138 | 32 | 42 | 128 => ShapeType::Trapezoid,

            37 | 133 | 148 | 22 | 82 | 88 | 73 | 97 | 145 | 25 | 70 | 100 => ShapeType::Hexagon,

            153 | 102 | 68 | 17 | 136 | 34 | 152 | 18 | 137 | 33 | 98 | 72 | 38 | 132 => ShapeType::Saddle,

            85 => ShapeType::Square,

            _ => return None,
        };
        Some(shape)
    }

    /// Vertex count of the single polygon a non-saddle shape emits
    pub fn vertex_count(self) -> Option<usize> {
        match self {
            ShapeType::Triangle => Some(3),
            ShapeType::Rectangle | ShapeType::Trapezoid | ShapeType::Square => Some(4),
            ShapeType::Pentagon => Some(5),
            ShapeType::Hexagon => Some(6),
            ShapeType::Saddle => None,
        }
    }
}
