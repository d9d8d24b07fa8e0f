use grid_pathwalk::{find_path, CellKind, Grid, Point};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S#E|
// | # |
// |   |
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighbourhood, so the path has to go around the wall column.

fn main() {
    let start = Point::new(0, 0);
    let end = Point::new(2, 0);
    let mut grid = Grid::with_endpoints(3, 3, start, end).unwrap();
    grid.set_kind(Point::new(1, 0), CellKind::Wall).unwrap();
    grid.set_kind(Point::new(1, 1), CellKind::Wall).unwrap();
    println!("{}", grid);
    let path = find_path(&grid, start, end);
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
