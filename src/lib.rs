//! # grid_pathwalk
//!
//! Shortest paths on a walled grid. Cells are connected to their four orthogonal neighbours with
//! unit cost and searched with
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm), which on a
//! uniform-cost grid expands cells in breadth-first order. Random walls are generated in batches
//! until the start and end cells are still connected, using the search itself as the check.
//! A [connected component](https://en.wikipedia.org/wiki/Component_(graph_theory)) view of the
//! grid is available as an independent reachability check.
pub mod error;
pub mod generator;
pub mod grid;
pub mod input;
pub mod render;
pub mod search;
pub mod solver;

use std::time::Duration;

pub use error::{GridError, Result};
pub use generator::{apply_random_walls, ensure_solvable, GeneratorConfig};
pub use grid::{CellKind, Grid};
pub use grid_util::Point;

use solver::{dijkstra::DijkstraSolver, GridSolver};

/// Number of grid rows used by the console program.
pub const ROWS: usize = 20;
/// Number of grid columns used by the console program.
pub const COLS: usize = 40;
/// Share of the cell count spent as wall sampling attempts per batch.
pub const WALL_FRACTION: f64 = 0.25;
/// Maximum number of wall batches before generation gives up.
pub const MAX_GENERATION_ATTEMPTS: usize = 64;
/// Pause between two animation frames.
pub const STEP_DELAY: Duration = Duration::from_millis(100);

/// Computes a minimum-step path from start to end over the traversable cells of the grid,
/// including both endpoints. The path is empty if end cannot be reached.
pub fn find_path(grid: &Grid, start: Point, end: Point) -> Vec<Point> {
    DijkstraSolver.find_path(grid, start, end)
}
