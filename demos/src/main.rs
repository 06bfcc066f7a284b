//! Headless replay of the walkgrid visualizer's seeded scenario.
//!
//! Builds the 10×10 demo grid, runs the shortest-path query with and
//! without diagonal movement, then exercises the interactive edits the
//! visualizer drives through mouse clicks: toggling a wall and relocating
//! the start and finish markers, re-querying after each edit.

mod logger;

use std::collections::HashSet;

use logger::ConsoleLogger;
use walkgrid_core::{Cell, Grid};
use walkgrid_paths::PathFinder;

const GRID_COLUMNS: i32 = 10;
const GRID_ROWS: i32 = 10;

const EMPTY: Cell = Cell::new(0);
const START: Cell = Cell::new(1);
const FINISH: Cell = Cell::new(2);
const WALL: Cell = Cell::new(3);

const SEED_START: usize = 22;
const SEED_FINISH: usize = 77;
const SEED_WALLS: [usize; 12] = [20, 41, 42, 43, 44, 45, 46, 47, 48, 49, 54, 64];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let console = ConsoleLogger::init();

    let mut grid = Grid::new(GRID_COLUMNS, GRID_ROWS, EMPTY, &[WALL])?;
    let mut start = SEED_START;
    let mut finish = SEED_FINISH;
    grid.write_index(start, START);
    grid.write_index(finish, FINISH);
    for &index in &SEED_WALLS {
        grid.write_index(index, WALL);
    }

    let mut finder = PathFinder::new(&grid);

    report(console, &grid, &mut finder, start, finish, false)?;

    // The diagonal-movement checkbox clears the console and re-queries.
    console.clear();
    report(console, &grid, &mut finder, start, finish, true)?;

    // Drawing or erasing a wall re-queries with the edited grid.
    console.clear();
    toggle_wall(console, &mut grid, 34);
    report(console, &grid, &mut finder, start, finish, false)?;

    // Relocating an endpoint clears its old cell, writes the new one and
    // re-queries.
    console.clear();
    start = move_endpoint(console, &mut grid, start, 2, START, "START");
    finish = move_endpoint(console, &mut grid, finish, 99, FINISH, "FINISH");
    report(console, &grid, &mut finder, start, finish, false)?;

    Ok(())
}

/// Run one query and log the outcome: step count, the path as a JSON
/// array, and the grid with interior path cells overlaid.
fn report(
    console: &ConsoleLogger,
    grid: &Grid,
    finder: &mut PathFinder,
    start: usize,
    finish: usize,
    allow_diagonal_movement: bool,
) -> Result<(), serde_json::Error> {
    let path = finder
        .find_shortest_path(grid, start, finish, allow_diagonal_movement)
        .to_vec();

    if path.is_empty() {
        console.print("No path to target!");
        return Ok(());
    }

    let steps = path.len() - 1;
    let plural = if steps == 1 { "" } else { "s" };
    console.print(format!("The shortest path to target is {steps} step{plural}"));
    console.print(serde_json::to_string(&path)?);
    console.print(render_grid(grid, &path));
    Ok(())
}

/// Paint the grid row by row as cell codes, with `*` over the interior
/// cells of `path`.
fn render_grid(grid: &Grid, path: &[usize]) -> String {
    let overlay: HashSet<usize> = if path.len() > 2 {
        path[1..path.len() - 1].iter().copied().collect()
    } else {
        HashSet::new()
    };

    let mut out = String::new();
    for row in 0..grid.num_rows() {
        if row > 0 {
            out.push('\n');
        }
        for column in 0..grid.num_columns() {
            if column > 0 {
                out.push(' ');
            }
            let index = grid.coord_to_index(column, row);
            if overlay.contains(&index) {
                out.push('*');
            } else {
                out.push_str(&grid.read_index(index).value().to_string());
            }
        }
    }
    out
}

/// Draw a wall at `index`, or erase the one already there.
fn toggle_wall(console: &ConsoleLogger, grid: &mut Grid, index: usize) {
    if grid.read_index(index) == WALL {
        console.print(format!("Erasing wall at {index}"));
        grid.write_index(index, EMPTY);
    } else {
        console.print(format!("Drawing wall at {index}"));
        grid.write_index(index, WALL);
    }
}

/// Clear an endpoint marker's old cell and write it at `to`.
fn move_endpoint(
    console: &ConsoleLogger,
    grid: &mut Grid,
    from: usize,
    to: usize,
    code: Cell,
    label: &str,
) -> usize {
    console.print(format!("Moving {label} to {to} {}", grid.index_to_coord(to)));
    grid.write_index(from, EMPTY);
    grid.write_index(to, code);
    to
}
