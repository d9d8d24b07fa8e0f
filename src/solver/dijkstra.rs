use grid_util::Point;
use smallvec::SmallVec;

use crate::grid::Grid;
use crate::solver::{neighborhood_points_and_cost, GridSolver, N_SMALLVEC_SIZE};

/// Plain uniform-cost search. With unit edge costs this expands cells in breadth-first order.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Point, u32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &Grid, node: &Point) -> Self::Successors {
        neighborhood_points_and_cost(grid, node)
    }

    fn heuristic(&self, _: &Point, _: &Point) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind;

    fn walled(rows: usize, cols: usize, walls: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(row, col) in walls {
            grid.set_kind(Point::new(col, row), CellKind::Wall).unwrap();
        }
        grid
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = Grid::new(1, 1);
        let start = Point::new(0, 0);
        let path = DijkstraSolver.find_path(&grid, start, start);
        assert_eq!(path, vec![start]);
    }

    /// Asserts that the optimal 6 step detour around the wall column is found.
    #[test]
    fn detours_around_wall_column() {
        //  ___
        // |A|B|
        // |.|.|
        // |...|
        //  ___
        let grid = walled(3, 3, &[(0, 1), (1, 1)]);
        let start = Point::new(0, 0);
        let end = Point::new(2, 0);
        let path = DijkstraSolver.find_path(&grid, start, end);
        assert_eq!(path.len(), 7);
        assert_eq!(DijkstraSolver.path_cost(&path), 6);
        assert!(crate::solver::path_is_valid(&grid, &path, start, end));
    }

    // Fully blocked diagonal: no 4-connected route exists.
    #[test]
    fn blocked_diagonal_is_empty() {
        //  __
        // |A|
        // ||B
        //  __
        let grid = walled(2, 2, &[(0, 1), (1, 0)]);
        let path = DijkstraSolver.find_path(&grid, Point::new(0, 0), Point::new(1, 1));
        assert!(path.is_empty());
    }

    #[test]
    fn straight_line_on_open_grid() {
        let grid = Grid::new(20, 40);
        let path = DijkstraSolver.find_path(&grid, Point::new(0, 5), Point::new(39, 5));
        assert_eq!(path.len(), 40);
        assert!(path.iter().all(|p| p.y == 5));
    }

    #[test]
    fn manhattan_length_on_open_grid() {
        let grid = Grid::new(20, 40);
        let start = Point::new(3, 17);
        let end = Point::new(31, 2);
        let path = DijkstraSolver.find_path(&grid, start, end);
        assert_eq!(
            DijkstraSolver.path_cost(&path) as i32,
            start.manhattan_distance(&end)
        );
    }

    #[test]
    fn repeated_search_is_stable() {
        let grid = walled(5, 5, &[(1, 1), (1, 2), (1, 3), (3, 1), (3, 2), (3, 3)]);
        let start = Point::new(0, 2);
        let end = Point::new(4, 2);
        let first = DijkstraSolver.find_path(&grid, start, end);
        let second = DijkstraSolver.find_path(&grid, start, end);
        assert!(!first.is_empty());
        assert_eq!(first.len(), second.len());
        assert_eq!(first, second);
    }

    #[test]
    fn non_traversable_endpoints_have_no_path() {
        let grid = walled(3, 3, &[(0, 0)]);
        let open = Point::new(2, 2);
        assert!(DijkstraSolver.get_path(&grid, Point::new(0, 0), open).is_none());
        assert!(DijkstraSolver.get_path(&grid, open, Point::new(0, 0)).is_none());
        assert!(DijkstraSolver.get_path(&grid, open, Point::new(3, 0)).is_none());
        assert_eq!(DijkstraSolver.get_path(&grid, open, open), Some(vec![open]));
    }

    #[test]
    fn blocked_endpoint_yields_empty_path() {
        let grid = walled(3, 3, &[(2, 2)]);
        assert!(DijkstraSolver
            .find_path(&grid, Point::new(0, 0), Point::new(2, 2))
            .is_empty());
        assert!(DijkstraSolver
            .find_path(&grid, Point::new(0, 0), Point::new(7, 7))
            .is_empty());
    }
}
