use mazebench_core::{Maze, Point};

use crate::distance::manhattan;

/// Minimal search interface over a grid-shaped graph.
pub trait Pather {
    /// Whether `p` is inside the grid and open.
    fn passable(&self, p: Point) -> bool;

    /// Append the passable neighbors of `p` into `buf`, in the fixed
    /// up, down, left, right order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors4() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

/// Pather with an admissible heuristic for A*. Edges are unit cost.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the remaining distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

impl Pather for Maze {
    fn passable(&self, p: Point) -> bool {
        self.is_passable(p)
    }
}

impl AstarPather for Maze {
    /// Manhattan distance: admissible and consistent on a 4-connected
    /// unit-cost grid.
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_neighbors_filters_walls_and_bounds() {
        let m = Maze::parse("110\n010\n000").unwrap();
        let mut buf = Vec::new();
        m.neighbors(Point::new(1, 0), &mut buf);
        // Up is out of bounds, right is a wall; down and left remain,
        // enumerated in the fixed order (down before left).
        assert_eq!(buf, vec![Point::new(1, 1), Point::new(0, 0)]);
    }

    #[test]
    fn estimate_is_manhattan() {
        let m = Maze::new(5);
        assert_eq!(m.estimate(Point::new(0, 0), Point::new(4, 4)), 8);
        assert_eq!(m.estimate(Point::new(2, 3), Point::new(2, 3)), 0);
    }
}
