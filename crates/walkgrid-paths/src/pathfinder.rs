use std::collections::HashMap;

use walkgrid_core::{Coord, Grid};

use crate::neighbors::Neighbors;

/// Predecessor-table sentinel meaning "no node recorded".
pub(crate) const NO_NODE: usize = usize::MAX;

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Shortest-path query engine bound to a fixed grid geometry.
///
/// `PathFinder` copies `num_columns` / `num_rows` from a [`Grid`] at
/// construction and owns all per-query scratch (unvisited set, distance
/// table, predecessor table) plus the result cache, so repeated queries
/// allocate nothing beyond new cache entries.
///
/// Every query is assumed to target a grid of the bound geometry; a
/// mismatched grid is a caller error and is not validated.
///
/// The cache grows without bound: each distinct (grid snapshot, start,
/// finish, diagonal flag) combination adds a permanent entry for the
/// lifetime of the instance.
pub struct PathFinder {
    pub(crate) num_columns: i32,
    pub(crate) num_rows: i32,
    pub(crate) num_cells: usize,
    /// Distance sentinel, strictly larger than any real path cost.
    pub(crate) max_distance: f64,
    pub(crate) cache: HashMap<String, Vec<usize>>,
    // Per-query scratch, reset at the start of each uncached query.
    pub(crate) unvisited: Vec<bool>,
    pub(crate) distance: Vec<f64>,
    pub(crate) previous: Vec<usize>,
    pub(crate) neighbors: Neighbors,
}

impl PathFinder {
    /// Create a query engine for grids of `grid`'s geometry.
    pub fn new(grid: &Grid) -> Self {
        let num_columns = grid.num_columns();
        let num_rows = grid.num_rows();
        let num_cells = grid.size();
        Self {
            num_columns,
            num_rows,
            num_cells,
            max_distance: num_cells as f64,
            cache: HashMap::new(),
            unvisited: vec![false; num_cells],
            distance: vec![0.0; num_cells],
            previous: vec![NO_NODE; num_cells],
            neighbors: Neighbors::new(num_columns, num_rows),
        }
    }

    /// Number of columns in the bound geometry.
    #[inline]
    pub fn num_columns(&self) -> i32 {
        self.num_columns
    }

    /// Number of rows in the bound geometry.
    #[inline]
    pub fn num_rows(&self) -> i32 {
        self.num_rows
    }

    /// Number of memoized query results held by the cache.
    #[inline]
    pub fn cached_path_count(&self) -> usize {
        self.cache.len()
    }

    /// Convert a flat index back to a coordinate in the bound geometry.
    #[inline]
    pub(crate) fn coord_of(&self, index: usize) -> Coord {
        let w = self.num_columns as usize;
        Coord::new((index % w) as i32, (index / w) as i32)
    }

    /// Composite memoization key: grid snapshot, endpoints, diagonal flag.
    /// The separator keeps distinct queries from colliding.
    pub(crate) fn cache_key(
        grid: &Grid,
        start_index: usize,
        finish_index: usize,
        allow_diagonal_movement: bool,
    ) -> String {
        format!(
            "{}|{start_index}|{finish_index}|{allow_diagonal_movement}",
            grid.serialized()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkgrid_core::Cell;

    #[test]
    fn new_copies_geometry() {
        let grid = Grid::new(8, 6, Cell::new(0), &[]).unwrap();
        let finder = PathFinder::new(&grid);
        assert_eq!(finder.num_columns(), 8);
        assert_eq!(finder.num_rows(), 6);
        assert_eq!(finder.num_cells, 48);
        assert_eq!(finder.max_distance, 48.0);
        assert_eq!(finder.cached_path_count(), 0);
    }

    #[test]
    fn coord_of_matches_grid_mapping() {
        let grid = Grid::new(7, 5, Cell::new(0), &[]).unwrap();
        let finder = PathFinder::new(&grid);
        for index in 0..grid.size() {
            assert_eq!(finder.coord_of(index), grid.index_to_coord(index));
        }
    }

    #[test]
    fn cache_key_distinguishes_query_parts() {
        let mut grid = Grid::new(4, 4, Cell::new(0), &[Cell::new(3)]).unwrap();
        let base = PathFinder::cache_key(&grid, 0, 15, false);
        assert_ne!(PathFinder::cache_key(&grid, 1, 15, false), base);
        assert_ne!(PathFinder::cache_key(&grid, 0, 14, false), base);
        assert_ne!(PathFinder::cache_key(&grid, 0, 15, true), base);
        grid.write_index(5, Cell::new(3));
        assert_ne!(PathFinder::cache_key(&grid, 0, 15, false), base);
    }

    #[test]
    fn cache_key_separates_endpoint_digits() {
        let grid = Grid::new(12, 12, Cell::new(0), &[]).unwrap();
        // (1, 22) and (12, 2) must not collide.
        assert_ne!(
            PathFinder::cache_key(&grid, 1, 22, false),
            PathFinder::cache_key(&grid, 12, 2, false)
        );
    }
}
