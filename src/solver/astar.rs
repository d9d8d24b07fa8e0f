use grid_util::Point;
use smallvec::SmallVec;

use crate::grid::Grid;
use crate::solver::{neighborhood_points_and_cost, GridSolver, N_SMALLVEC_SIZE};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Point, u32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &Grid, node: &Point) -> Self::Successors {
        neighborhood_points_and_cost(grid, node)
    }

    /// Manhattan distance times the heuristic factor. Only admissible for factors up to 1.
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as u32
    }
}
