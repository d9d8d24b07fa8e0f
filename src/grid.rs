use crate::error::{GridError, Result};
use core::fmt;
use grid_util::grid::{BoolGrid, Grid as _};
use grid_util::point::Point;
use itertools::iproduct;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets of the 4-neighbourhood as `(dx, dy)`, i.e. (column, row). The order is the
/// expansion order of the search: right, left, up, down.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// The kind of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Free,
    Wall,
    Start,
    End,
}

impl CellKind {
    /// Glyph used when printing the grid to the console.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Free => '.',
            CellKind::Wall => '|',
            CellKind::Start => 'A',
            CellKind::End => 'B',
        }
    }
}

/// [Grid] stores walls in a [BoolGrid] (blocked is [true]) and tracks the start and end cells
/// on top of it, so that start and end can never be walls at the same time.
///
/// Points use the [grid_util] convention: `x` is the column and `y` is the row.
#[derive(Clone, Debug)]
pub struct Grid {
    walls: BoolGrid,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell free and no endpoints.
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid {
            walls: BoolGrid::new(cols, rows, false),
            start: None,
            end: None,
        }
    }

    /// Creates a free grid and places the start and end cells on it.
    pub fn with_endpoints(rows: usize, cols: usize, start: Point, end: Point) -> Result<Grid> {
        let mut grid = Grid::new(rows, cols);
        grid.set_kind(start, CellKind::Start)?;
        grid.set_kind(end, CellKind::End)?;
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.walls.height()
    }

    pub fn cols(&self) -> usize {
        self.walls.width()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.cols()
            && (point.y as usize) < self.rows()
    }

    fn check_bounds(&self, point: Point) -> Result<()> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                point,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Sets the kind of a cell. Placing a start or end cell moves the existing one, while
    /// overwriting the current start or end with another kind removes that endpoint.
    pub fn set_kind(&mut self, point: Point, kind: CellKind) -> Result<()> {
        self.check_bounds(point)?;
        if self.start == Some(point) {
            self.start = None;
        }
        if self.end == Some(point) {
            self.end = None;
        }
        match kind {
            CellKind::Start => self.start = Some(point),
            CellKind::End => self.end = Some(point),
            _ => {}
        }
        self.walls.set_point(point, kind == CellKind::Wall);
        Ok(())
    }

    pub fn kind_at(&self, point: Point) -> Result<CellKind> {
        self.check_bounds(point)?;
        Ok(self.kind_unchecked(point))
    }

    fn kind_unchecked(&self, point: Point) -> CellKind {
        if self.start == Some(point) {
            CellKind::Start
        } else if self.end == Some(point) {
            CellKind::End
        } else if self.walls.get_point(point) {
            CellKind::Wall
        } else {
            CellKind::Free
        }
    }

    /// True iff the point is in bounds and not a wall.
    pub fn is_traversable(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.walls.get_point(point)
    }

    /// The traversable 4-neighbours of a point, in expansion order.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.is_traversable(*p))
            .collect()
    }

    /// All cells in row-major order together with their kind.
    pub fn cells(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        iproduct!(0..self.rows() as i32, 0..self.cols() as i32)
            .map(move |(y, x)| Point::new(x, y))
            .map(move |p| (p, self.kind_unchecked(p)))
    }

    pub fn wall_count(&self) -> usize {
        self.cells().filter(|(_, k)| *k == CellKind::Wall).count()
    }

    /// Number of free cells, which excludes the start and end cells.
    pub fn free_count(&self) -> usize {
        self.cells().filter(|(_, k)| *k == CellKind::Free).count()
    }

    fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.cols() + point.x as usize
    }

    /// Builds a [UnionFind] structure in which every pair of 4-adjacent traversable cells is
    /// linked, so that two cells share a component iff a path connects them.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.rows() * self.cols());
        for y in 0..self.rows() as i32 {
            for x in 0..self.cols() as i32 {
                let point = Point::new(x, y);
                if !self.is_traversable(point) {
                    continue;
                }
                let parent_ix = self.ix(&point);
                // Linking right and down is enough to cover every edge once.
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_traversable(p) {
                        components.union(parent_ix, self.ix(&p));
                    }
                }
            }
        }
        components
    }

    /// Checks if a and b are traversable and on the same connected component.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        if self.is_traversable(*a) && self.is_traversable(*b) {
            self.components().equiv(self.ix(a), self.ix(b))
        } else {
            false
        }
    }

    /// Checks if a and b are not on the same connected component.
    pub fn unreachable(&self, a: &Point, b: &Point) -> bool {
        !self.reachable(a, b)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cols = self.cols();
        for (i, (_, kind)) in self.cells().enumerate() {
            write!(f, "{}", kind.glyph())?;
            if (i + 1) % cols == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_free() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.cells().all(|(_, k)| k == CellKind::Free));
        assert_eq!(grid.free_count(), 6);
        assert!(grid.start().is_none() && grid.end().is_none());
    }

    #[test]
    fn wide_grid_dimensions_and_order() {
        // 2 rows, 4 columns: x runs along a row before y moves down.
        let mut grid = Grid::new(2, 4);
        grid.set_kind(Point::new(3, 1), CellKind::Wall).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 4);
        let cells = grid.cells().map(|(p, _)| p).collect::<Vec<_>>();
        assert_eq!(cells[1], Point::new(1, 0));
        assert_eq!(cells[4], Point::new(0, 1));
        assert_eq!(grid.kind_at(Point::new(3, 1)).unwrap(), CellKind::Wall);
        assert!(!grid.is_traversable(Point::new(3, 1)));
        assert!(grid.is_traversable(Point::new(3, 0)));
        assert_eq!(grid.to_string(), "....\n...|\n");
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut grid = Grid::new(2, 3);
        for p in [Point::new(3, 0), Point::new(0, 2), Point::new(-1, 0)] {
            assert!(matches!(
                grid.set_kind(p, CellKind::Wall),
                Err(GridError::OutOfBounds { .. })
            ));
            assert!(grid.kind_at(p).is_err());
            assert!(!grid.is_traversable(p));
        }
        assert!(Grid::with_endpoints(2, 3, Point::new(0, 0), Point::new(5, 5)).is_err());
    }

    #[test]
    fn endpoints_move_and_never_overlap_walls() {
        let mut grid = Grid::with_endpoints(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(grid.kind_at(Point::new(0, 0)).unwrap(), CellKind::Start);
        assert_eq!(grid.kind_at(Point::new(2, 2)).unwrap(), CellKind::End);

        grid.set_kind(Point::new(1, 0), CellKind::Start).unwrap();
        assert_eq!(grid.start(), Some(Point::new(1, 0)));
        assert_eq!(grid.kind_at(Point::new(0, 0)).unwrap(), CellKind::Free);

        grid.set_kind(Point::new(2, 2), CellKind::Wall).unwrap();
        assert_eq!(grid.end(), None);
        assert_eq!(grid.kind_at(Point::new(2, 2)).unwrap(), CellKind::Wall);

        grid.set_kind(Point::new(2, 2), CellKind::End).unwrap();
        assert!(grid.is_traversable(Point::new(2, 2)));
        assert_eq!(grid.wall_count(), 0);
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 2x3 grid:
        //  ___
        // | | |
        // | | |
        //  ___
        let mut grid = Grid::new(2, 3);
        grid.set_kind(Point::new(1, 0), CellKind::Wall).unwrap();
        grid.set_kind(Point::new(1, 1), CellKind::Wall).unwrap();
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 1)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    // A diagonal gap does not connect cells on a 4-grid.
    #[test]
    fn diagonal_is_not_connected() {
        //  __
        // |.|
        // ||.
        //  __
        let mut grid = Grid::new(2, 2);
        grid.set_kind(Point::new(1, 0), CellKind::Wall).unwrap();
        grid.set_kind(Point::new(0, 1), CellKind::Wall).unwrap();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn neighborhood_skips_walls_and_edges() {
        let mut grid = Grid::new(3, 3);
        grid.set_kind(Point::new(1, 0), CellKind::Wall).unwrap();
        let n = grid.neighborhood_points(&Point::new(1, 1));
        assert_eq!(
            n.as_slice(),
            &[Point::new(2, 1), Point::new(0, 1), Point::new(1, 2)]
        );
        assert_eq!(grid.neighborhood_points(&Point::new(0, 0)).len(), 1);
    }

    #[test]
    fn display_uses_console_glyphs() {
        let mut grid = Grid::with_endpoints(2, 3, Point::new(0, 0), Point::new(2, 1)).unwrap();
        grid.set_kind(Point::new(1, 0), CellKind::Wall).unwrap();
        assert_eq!(grid.to_string(), "A|.\n..B\n");
    }
}
