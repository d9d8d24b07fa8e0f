use crate::grid::Grid;
use crate::search;
use grid_util::Point;
use log::info;
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

pub const N_SMALLVEC_SIZE: usize = 4;

/// A search strategy over the 4-connected traversable cells of a [Grid] with unit edge costs.
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Point, u32)>;

    /// Lower bound on the number of steps from p1 to p2.
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32;

    fn successors(&self, grid: &Grid, node: &Point) -> Self::Successors;

    /// Number of steps taken along a path.
    fn path_cost(&self, path: &[Point]) -> u32 {
        path.len().saturating_sub(1) as u32
    }

    /// Computes a shortest path from start to goal, including both. Returns [None] if goal
    /// cannot be reached or either endpoint is not traversable.
    fn get_path(&self, grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
        if !grid.is_traversable(start) || !grid.is_traversable(goal) {
            info!("{} or {} is not traversable", start, goal);
            return None;
        }
        search::astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        )
        .map(|(path, _cost)| path)
    }

    /// Like [get_path](Self::get_path) but reports an unreachable goal as an empty path.
    fn find_path(&self, grid: &Grid, start: Point, goal: Point) -> Vec<Point> {
        self.get_path(grid, start, goal).unwrap_or_default()
    }
}

/// Successors shared by the grid solvers: every traversable 4-neighbour at cost 1.
pub fn neighborhood_points_and_cost(
    grid: &Grid,
    pos: &Point,
) -> SmallVec<[(Point, u32); N_SMALLVEC_SIZE]> {
    grid.neighborhood_points(pos)
        .into_iter()
        .map(|p| (p, 1))
        .collect()
}

/// Checks that a path runs from start to end in single orthogonal steps over traversable
/// cells. An empty path is never valid.
pub fn path_is_valid(grid: &Grid, path: &[Point], start: Point, end: Point) -> bool {
    match (path.first(), path.last()) {
        (Some(first), Some(last)) if *first == start && *last == end => {
            path.iter().all(|p| grid.is_traversable(*p))
                && path.windows(2).all(|w| w[0].manhattan_distance(&w[1]) == 1)
        }
        _ => false,
    }
}
