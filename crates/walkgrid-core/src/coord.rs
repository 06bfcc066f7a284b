//! The [`Coord`] column/row pair.

use std::fmt;

/// A 2D grid coordinate. Columns grow right, rows grow down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub column: i32,
    pub row: i32,
}

impl Coord {
    /// Origin (column 0, row 0).
    pub const ZERO: Self = Self { column: 0, row: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Coord::new(3, 7).to_string(), "(3, 7)");
    }
}
