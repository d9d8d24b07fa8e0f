//! Random wall placement that keeps the start and end cells connected.
//!
//! Walls are placed in batches. Each batch spends a fixed budget of sampling attempts, and a
//! sample that lands on a wall, the start or the end is rejected but still uses up its attempt.
//! After every batch the solver is asked for a path; walls are never removed, so every retry
//! starts from the already walled grid.

use crate::error::{GridError, Result};
use crate::grid::{CellKind, Grid};
use crate::solver::{dijkstra::DijkstraSolver, GridSolver};
use crate::{MAX_GENERATION_ATTEMPTS, WALL_FRACTION};
use grid_util::Point;
use log::{debug, info, warn};
use rand::Rng;

/// Configuration for [ensure_solvable].
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Share of the grid's cell count used as sampling budget per batch.
    pub wall_fraction: f64,
    /// Maximum number of batches before giving up.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            wall_fraction: WALL_FRACTION,
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wall_fraction(mut self, wall_fraction: f64) -> Self {
        self.wall_fraction = wall_fraction;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.wall_fraction) {
            return Err(GridError::InvalidConfig(format!(
                "wall_fraction must be within [0, 1], got {}",
                self.wall_fraction
            )));
        }
        if self.max_attempts == 0 {
            return Err(GridError::InvalidConfig(
                "max_attempts must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Number of sampling attempts per batch: floor(rows * cols * wall_fraction).
pub fn wall_budget(grid: &Grid, wall_fraction: f64) -> usize {
    ((grid.rows() * grid.cols()) as f64 * wall_fraction).floor() as usize
}

/// Spends one batch of sampling attempts turning free cells into walls. Start and end cells are
/// never touched. Returns the number of walls actually placed.
pub fn apply_random_walls<R: Rng + ?Sized>(
    grid: &mut Grid,
    wall_fraction: f64,
    rng: &mut R,
) -> usize {
    let budget = wall_budget(grid, wall_fraction);
    let (rows, cols) = (grid.rows() as i32, grid.cols() as i32);
    let mut placed = 0;
    for _ in 0..budget {
        let point = Point::new(rng.gen_range(0..cols), rng.gen_range(0..rows));
        if let Ok(CellKind::Free) = grid.kind_at(point) {
            if grid.set_kind(point, CellKind::Wall).is_ok() {
                placed += 1;
            }
        }
    }
    info!("Placed {} walls out of {} attempts", placed, budget);
    placed
}

/// Adds batches of random walls until a path between start and end survives a batch, and
/// returns that path. Fails if no path survives within `config.max_attempts` batches or if the
/// grid runs out of free cells to wall.
pub fn ensure_solvable<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<Vec<Point>> {
    config.validate()?;
    let start = grid.start().ok_or(GridError::MissingEndpoint("start"))?;
    let end = grid.end().ok_or(GridError::MissingEndpoint("end"))?;
    let solver = DijkstraSolver;
    for attempt in 1..=config.max_attempts {
        let placed = apply_random_walls(grid, config.wall_fraction, rng);
        let path = solver.find_path(grid, start, end);
        if !path.is_empty() {
            info!(
                "Solvable grid after {} batch(es): {} walls, path of {} steps",
                attempt,
                grid.wall_count(),
                solver.path_cost(&path)
            );
            return Ok(path);
        }
        debug!("Batch {} placed {} walls and left no path", attempt, placed);
        if grid.free_count() == 0 {
            warn!("No free cells left after {} batch(es)", attempt);
            return Err(GridError::NonTerminatingGeneration { attempts: attempt });
        }
    }
    warn!(
        "Giving up after {} batches without a path from {} to {}",
        config.max_attempts, start, end
    );
    Err(GridError::NonTerminatingGeneration {
        attempts: config.max_attempts,
    })
}
