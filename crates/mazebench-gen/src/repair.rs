//! Connectivity repair: merging disconnected open regions.

use mazebench_core::{Maze, Point};
use mazebench_paths::Region;

/// Carve a connector between each adjacent pair of regions in discovery
/// order, using the regions' deterministic representatives.
///
/// Representatives sharing a row get the row span between their columns
/// opened; sharing a column, the column span between their rows; otherwise
/// an L-shaped connector is carved: the row segment at the first
/// representative's row across both columns, then the column segment at
/// the second representative's column across both rows. Connectors may
/// punch straight through walls — the only post-condition that matters is
/// global reachability.
pub fn connect_regions(maze: &mut Maze, regions: &[Region]) {
    for pair in regions.windows(2) {
        connect(maze, pair[0].representative(), pair[1].representative());
    }
}

fn connect(maze: &mut Maze, a: Point, b: Point) {
    if a.y == b.y {
        open_row(maze, a.y, a.x, b.x);
    } else if a.x == b.x {
        open_column(maze, a.x, a.y, b.y);
    } else {
        open_row(maze, a.y, a.x, b.x);
        open_column(maze, b.x, a.y, b.y);
    }
}

fn open_row(maze: &mut Maze, y: i32, x0: i32, x1: i32) {
    for x in x0.min(x1)..=x0.max(x1) {
        maze.open(Point::new(x, y));
    }
}

fn open_column(maze: &mut Maze, x: i32, y0: i32, y1: i32) {
    for y in y0.min(y1)..=y0.max(y1) {
        maze.open(Point::new(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebench_paths::SearchRange;

    fn merge_and_count(maze: &mut Maze) -> usize {
        let mut sr = SearchRange::new(maze.size());
        let regions = sr.regions(maze);
        assert!(regions.len() > 1, "fixture must start disconnected");
        connect_regions(maze, &regions);
        sr.regions(maze).len()
    }

    #[test]
    fn merges_regions_sharing_a_row() {
        let mut maze = Maze::parse("101\n000\n000").unwrap();
        assert_eq!(merge_and_count(&mut maze), 1);
        // The span between the representatives was opened.
        assert!(maze.is_passable(Point::new(1, 0)));
    }

    #[test]
    fn merges_regions_sharing_a_column() {
        let mut maze = Maze::parse("100\n000\n100").unwrap();
        assert_eq!(merge_and_count(&mut maze), 1);
        assert!(maze.is_passable(Point::new(0, 1)));
    }

    #[test]
    fn merges_diagonal_regions_with_l_connector() {
        let mut maze = Maze::parse("100\n000\n001").unwrap();
        assert_eq!(merge_and_count(&mut maze), 1);
        // Row segment at the first representative's row, column segment at
        // the second's column.
        assert!(maze.is_passable(Point::new(1, 0)));
        assert!(maze.is_passable(Point::new(2, 0)));
        assert!(maze.is_passable(Point::new(2, 1)));
    }

    #[test]
    fn merges_many_regions_into_one() {
        let mut maze = Maze::parse(
            "1 0 1 0 1\n\
             0 0 0 0 0\n\
             1 0 1 0 1\n\
             0 0 0 0 0\n\
             1 0 1 0 1",
        )
        .unwrap();
        assert_eq!(merge_and_count(&mut maze), 1);
    }
}
