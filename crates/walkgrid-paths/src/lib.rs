//! Shortest-path queries for walkgrid cell grids.
//!
//! This crate implements the query engine behind the walkgrid visualizer:
//!
//! - **Dijkstra** single-pair shortest paths
//!   ([`PathFinder::find_shortest_path`]) with 4- or 8-directional
//!   adjacency and Euclidean edge weights (1 cardinal, √2 diagonal)
//! - **Neighbor enumeration** respecting grid boundaries ([`Neighbors`])
//! - **Result memoization** keyed on the grid snapshot, the endpoint pair
//!   and the diagonal flag
//!
//! All queries run through [`PathFinder`], which owns reusable scratch
//! tables so that repeated queries incur no allocations beyond cache
//! entries after warm-up.

mod dijkstra;
mod distance;
mod neighbors;
mod pathfinder;

pub use distance::euclidean;
pub use neighbors::Neighbors;
pub use pathfinder::PathFinder;
