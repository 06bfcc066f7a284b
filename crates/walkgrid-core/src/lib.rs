//! **walkgrid-core** — Obstacle-aware 2D cell grid (core types).
//!
//! This crate provides the data container underneath the walkgrid
//! path-finding engine: integer [`Cell`] codes, the [`Coord`] column/row
//! pair, and the [`Grid`] itself — a fixed-geometry linear cell array with
//! an exact coordinate ⇄ index bijection, an obstacle code set, and a
//! deterministic snapshot string used for query memoization.

pub mod cell;
pub mod coord;
pub mod grid;

pub use cell::Cell;
pub use coord::Coord;
pub use grid::{Grid, GridError};
