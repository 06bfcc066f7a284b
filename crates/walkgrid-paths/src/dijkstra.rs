use log::{debug, trace};

use walkgrid_core::{Coord, Grid};

use crate::distance::euclidean;
use crate::pathfinder::{NO_NODE, PathFinder};

impl PathFinder {
    /// Compute the shortest path from `start_index` to `finish_index` over
    /// `grid`, as an ordered sequence of flat cell indices including both
    /// endpoints.
    ///
    /// Cells whose code is in `grid.obstacles()` are impassable, as
    /// destinations and as intermediate hops. Edges weigh 1.0 along
    /// cardinal directions and √2 along diagonals; diagonal adjacency is
    /// only considered when `allow_diagonal_movement` is set.
    ///
    /// Degenerate inputs never fail: an unreachable finish yields the empty
    /// sequence, and `start_index == finish_index` yields the
    /// single-element sequence `[start_index]`.
    ///
    /// Results are memoized by grid snapshot, endpoints and the diagonal
    /// flag; repeated identical queries return the same stored sequence
    /// without recomputation. `grid` must have the geometry this finder was
    /// constructed with; a mismatch is a caller error and is not checked.
    ///
    /// Uncached queries run array-based Dijkstra in O(V²), V = cell count.
    pub fn find_shortest_path(
        &mut self,
        grid: &Grid,
        start_index: usize,
        finish_index: usize,
        allow_diagonal_movement: bool,
    ) -> &[usize] {
        let key = Self::cache_key(grid, start_index, finish_index, allow_diagonal_movement);
        if self.cache.contains_key(&key) {
            trace!("cache hit for path from {start_index} to {finish_index}");
            return self.cache[&key].as_slice();
        }

        debug!("finding path from {start_index} to {finish_index}");

        // Reset scratch. Obstacle cells never enter the unvisited set, so
        // they can be neither hops nor destinations.
        let mut remaining = 0usize;
        for index in 0..self.num_cells {
            self.distance[index] = self.max_distance;
            self.previous[index] = NO_NODE;
            let passable = !grid.is_obstacle(grid.read_index(index));
            self.unvisited[index] = passable;
            if passable {
                remaining += 1;
            }
        }
        // A start on an obstacle cell keeps distance 0 but is never
        // selected, so every non-reflexive query from it comes back empty.
        self.distance[start_index] = 0.0;

        while remaining > 0 {
            let Some(current) = self.min_distance_unvisited() else {
                // Nothing left below the sentinel: remaining nodes are cut
                // off from the start.
                break;
            };
            self.unvisited[current] = false;
            remaining -= 1;
            if current == finish_index {
                break;
            }
            self.relax_neighbors_of(current, allow_diagonal_movement);
        }

        let path = self.unwind(start_index, finish_index);
        self.cache.entry(key).or_insert(path).as_slice()
    }

    /// Ascending scan for the unvisited node with the strictly smallest
    /// tentative distance. A later equal distance never replaces an earlier
    /// one, so ties break toward the smaller index.
    fn min_distance_unvisited(&self) -> Option<usize> {
        let mut best = NO_NODE;
        let mut best_distance = self.max_distance;
        for index in 0..self.num_cells {
            if self.unvisited[index] && self.distance[index] < best_distance {
                best_distance = self.distance[index];
                best = index;
            }
        }
        (best != NO_NODE).then_some(best)
    }

    /// Relax every still-unvisited neighbor of `current`.
    fn relax_neighbors_of(&mut self, current: usize, allow_diagonal_movement: bool) {
        let current_distance = self.distance[current];
        let from = self.coord_of(current);
        let w = self.num_columns as usize;

        let Self {
            neighbors,
            unvisited,
            distance,
            previous,
            ..
        } = self;

        let candidates = if allow_diagonal_movement {
            neighbors.all(current, |i| unvisited[i])
        } else {
            neighbors.cardinal(current, |i| unvisited[i])
        };

        for &neighbor in candidates {
            let to = Coord::new((neighbor % w) as i32, (neighbor / w) as i32);
            let candidate = current_distance + euclidean(from, to);
            if candidate < distance[neighbor] {
                distance[neighbor] = candidate;
                previous[neighbor] = current;
            }
        }
    }

    /// Walk predecessors backward from the finish and reverse.
    fn unwind(&self, start_index: usize, finish_index: usize) -> Vec<usize> {
        let mut path = Vec::new();
        if self.previous[finish_index] == NO_NODE && start_index != finish_index {
            return path;
        }
        let mut index = finish_index;
        loop {
            path.push(index);
            match self.previous[index] {
                NO_NODE => break,
                predecessor => index = predecessor,
            }
        }
        path.reverse();
        path
    }
}
