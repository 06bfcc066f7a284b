//! The [`Cell`] code — an integer tag for a grid cell's semantic role.

/// A cell code, wrapping an `i32`.
///
/// Different integer values represent different cell roles (empty, start,
/// finish, wall, terrain types) as determined by the user. The grid itself
/// only distinguishes obstacle codes from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// Create a new cell code with the given value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        let c = Cell::new(3);
        assert_eq!(c.value(), 3);
        assert_eq!(Cell::from(3), c);
        assert_eq!(i32::from(c), 3);
    }
}
