//! The [`Grid`] type — a fixed-geometry linear array of [`Cell`] codes.
//!
//! A `Grid` owns its cell storage directly. Geometry (`num_columns`,
//! `num_rows`) and the obstacle code set are fixed at construction; cell
//! contents are mutated freely for the life of the grid.

use std::collections::HashSet;
use std::fmt;
use std::fmt::Write as _;

use crate::cell::Cell;
use crate::coord::Coord;

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors raised by [`Grid`] construction.
///
/// These are programmer-error guards, surfaced immediately to the caller;
/// no grid operation retries or recovers internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `num_columns` was zero or negative.
    InvalidColumns(i32),
    /// `num_rows` was zero or negative.
    InvalidRows(i32),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColumns(n) => {
                write!(f, "num_columns must be a positive integer, got {n}")
            }
            Self::InvalidRows(n) => write!(f, "num_rows must be a positive integer, got {n}"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A 2D grid of [`Cell`] codes stored row-major in a flat array.
///
/// Index `i` maps to column `i % num_columns`, row `i / num_columns`;
/// [`coord_to_index`](Grid::coord_to_index) and
/// [`index_to_coord`](Grid::index_to_coord) are exact inverses over the
/// grid's range.
#[derive(Debug, Clone)]
pub struct Grid {
    num_columns: i32,
    num_rows: i32,
    data: Vec<Cell>,
    obstacles: Vec<Cell>,
    obstacle_set: HashSet<Cell>,
}

impl Grid {
    /// Create a new grid filled with `empty_cell`.
    ///
    /// `obstacle_cells` is the set of cell codes treated as impassable by
    /// consumers; the grid stores its own copy, so later changes to the
    /// caller's slice have no effect.
    pub fn new(
        num_columns: i32,
        num_rows: i32,
        empty_cell: Cell,
        obstacle_cells: &[Cell],
    ) -> Result<Self, GridError> {
        if num_columns <= 0 {
            return Err(GridError::InvalidColumns(num_columns));
        }
        if num_rows <= 0 {
            return Err(GridError::InvalidRows(num_rows));
        }
        let size = (num_columns as usize) * (num_rows as usize);
        Ok(Self {
            num_columns,
            num_rows,
            data: vec![empty_cell; size],
            obstacles: obstacle_cells.to_vec(),
            obstacle_set: obstacle_cells.iter().copied().collect(),
        })
    }

    /// Number of columns.
    #[inline]
    pub fn num_columns(&self) -> i32 {
        self.num_columns
    }

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> i32 {
        self.num_rows
    }

    /// Total cell count (`num_columns * num_rows`).
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The obstacle cell codes, in the order supplied at construction.
    #[inline]
    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    /// Whether `cell` is an obstacle code. O(1).
    #[inline]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacle_set.contains(&cell)
    }

    // -----------------------------------------------------------------------
    // Coordinate ⇄ index mapping
    // -----------------------------------------------------------------------

    /// Convert a column/row pair to a flat index.
    ///
    /// Performs no range validation: out-of-range coordinates silently
    /// compute an out-of-bounds index. Callers must not supply them.
    #[inline]
    pub fn coord_to_index(&self, column: i32, row: i32) -> usize {
        (column + row * self.num_columns) as usize
    }

    /// Convert a flat index back to a column/row pair.
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> Coord {
        let w = self.num_columns as usize;
        Coord::new((index % w) as i32, (index / w) as i32)
    }

    /// Like [`index_to_coord`](Grid::index_to_coord), but writes into a
    /// caller-supplied receiver instead of constructing a fresh value.
    /// Useful on hot paths that convert in a tight loop.
    #[inline]
    pub fn index_to_coord_into(&self, index: usize, receiver: &mut Coord) {
        let w = self.num_columns as usize;
        receiver.column = (index % w) as i32;
        receiver.row = (index / w) as i32;
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Read the cell at a flat index. Panics if `index >= size()`.
    #[inline]
    pub fn read_index(&self, index: usize) -> Cell {
        self.data[index]
    }

    /// Write the cell at a flat index. Panics if `index >= size()`.
    #[inline]
    pub fn write_index(&mut self, index: usize, cell: Cell) {
        self.data[index] = cell;
    }

    /// Read the cell at a column/row pair.
    #[inline]
    pub fn read_coord(&self, column: i32, row: i32) -> Cell {
        self.read_index(self.coord_to_index(column, row))
    }

    /// Write the cell at a column/row pair.
    #[inline]
    pub fn write_coord(&mut self, column: i32, row: i32, cell: Cell) {
        let index = self.coord_to_index(column, row);
        self.write_index(index, cell);
    }

    /// Borrowed view of the whole cell array, row-major.
    ///
    /// Zero-copy access for rendering collaborators that paint every cell
    /// per frame.
    #[inline]
    pub fn data(&self) -> &[Cell] {
        &self.data
    }

    /// Mutable view of the whole cell array.
    ///
    /// Escape hatch that bypasses [`write_index`](Grid::write_index); bulk
    /// editors (scenario seeding, map loaders) write through this directly.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Cell] {
        &mut self.data
    }

    // -----------------------------------------------------------------------
    // Snapshot
    // -----------------------------------------------------------------------

    /// Deterministic snapshot of the grid's dimensions and every cell code.
    ///
    /// Two grids with different contents or dimensions produce different
    /// strings; identical ones produce identical strings. The encoding is
    /// injective: hex dimensions separated by `x`, a `:` delimiter, then
    /// every cell code in hex separated by `.`.
    pub fn serialized(&self) -> String {
        let mut out = String::with_capacity(8 + self.data.len() * 2);
        // Infallible: fmt::Write on String never errors.
        let _ = write!(out, "{:x}x{:x}:", self.num_columns, self.num_rows);
        for (i, cell) in self.data.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            let _ = write!(out, "{:x}", cell.value());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: i32, rows: i32) -> Grid {
        Grid::new(columns, rows, Cell::new(0), &[Cell::new(3)]).unwrap()
    }

    #[test]
    fn new_rejects_non_positive_dimensions() {
        let e = Grid::new(0, 5, Cell::new(0), &[]).unwrap_err();
        assert_eq!(e, GridError::InvalidColumns(0));
        let e = Grid::new(5, -1, Cell::new(0), &[]).unwrap_err();
        assert_eq!(e, GridError::InvalidRows(-1));
    }

    #[test]
    fn new_fills_with_empty_cell() {
        let g = Grid::new(4, 3, Cell::new(9), &[]).unwrap();
        assert_eq!(g.size(), 12);
        assert!(g.data().iter().all(|&c| c == Cell::new(9)));
    }

    #[test]
    fn obstacles_are_copied_and_queryable() {
        let mut codes = vec![Cell::new(3), Cell::new(5)];
        let g = Grid::new(4, 4, Cell::new(0), &codes).unwrap();
        codes.clear(); // caller's list no longer matters
        assert_eq!(g.obstacles(), &[Cell::new(3), Cell::new(5)]);
        assert!(g.is_obstacle(Cell::new(3)));
        assert!(g.is_obstacle(Cell::new(5)));
        assert!(!g.is_obstacle(Cell::new(0)));
    }

    #[test]
    fn coord_index_round_trip() {
        let g = grid(7, 5);
        for index in 0..g.size() {
            let c = g.index_to_coord(index);
            assert!(c.column >= 0 && c.column < 7);
            assert!(c.row >= 0 && c.row < 5);
            assert_eq!(g.coord_to_index(c.column, c.row), index);
        }
        for row in 0..5 {
            for column in 0..7 {
                let index = g.coord_to_index(column, row);
                assert_eq!(g.index_to_coord(index), Coord::new(column, row));
            }
        }
    }

    #[test]
    fn index_to_coord_into_matches_owned_variant() {
        let g = grid(6, 4);
        let mut receiver = Coord::ZERO;
        for index in 0..g.size() {
            g.index_to_coord_into(index, &mut receiver);
            assert_eq!(receiver, g.index_to_coord(index));
        }
    }

    #[test]
    fn read_write_by_index_and_coord() {
        let mut g = grid(4, 3);
        g.write_index(5, Cell::new(2));
        assert_eq!(g.read_index(5), Cell::new(2));
        g.write_coord(3, 2, Cell::new(7));
        assert_eq!(g.read_coord(3, 2), Cell::new(7));
        assert_eq!(g.read_index(11), Cell::new(7));
    }

    #[test]
    fn data_mut_bypasses_write_index() {
        let mut g = grid(3, 3);
        g.data_mut()[4] = Cell::new(3);
        assert_eq!(g.read_index(4), Cell::new(3));
    }

    #[test]
    fn serialized_is_content_sensitive() {
        let a = grid(4, 3);
        let mut b = grid(4, 3);
        assert_eq!(a.serialized(), b.serialized());
        b.write_index(0, Cell::new(1));
        assert_ne!(a.serialized(), b.serialized());
    }

    #[test]
    fn serialized_is_dimension_sensitive() {
        // Same cell count, different geometry.
        let a = grid(4, 3);
        let b = grid(3, 4);
        assert_ne!(a.serialized(), b.serialized());
        // Same total digits, ambiguous without separators: 1x11 vs 11x1.
        let c = grid(1, 11);
        let d = grid(11, 1);
        assert_ne!(c.serialized(), d.serialized());
    }
}
