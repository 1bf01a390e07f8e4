//! Recursive-backtracking passage carving.

use mazebench_core::{Cell, Maze, Point};
use rand::{Rng, RngExt};

/// The four carving directions (up, down, left, right).
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Carve passages into `maze` by iterative randomized depth-first search
/// with a stride of 2.
///
/// From the current cell, the directions are shuffled; for each direction
/// whose two-step destination is in bounds and still a wall, both the
/// intermediate and destination cells are opened and the destination is
/// pushed. Backtracking happens by popping when no two-step neighbor is
/// left unvisited.
///
/// The caller opens `start` beforehand. The result is a maze skeleton
/// whose open cells are **not** guaranteed to form a single component —
/// boundary effects and even sizes can strand regions, which is exactly
/// what connectivity repair is for.
pub fn carve_passages<R: Rng>(maze: &mut Maze, start: Point, rng: &mut R) {
    let mut dirs = DIRS;
    let mut stack = vec![start];

    while let Some(cur) = stack.pop() {
        shuffle(&mut dirs, rng);
        for d in dirs {
            let next = cur + d * 2;
            if maze.at(next) == Some(Cell::Wall) {
                maze.open(cur + d);
                maze.open(next);
                stack.push(next);
            }
        }
    }
}

/// Fisher-Yates shuffle of the direction array.
fn shuffle<R: Rng>(dirs: &mut [Point; 4], rng: &mut R) {
    for i in (1..dirs.len()).rev() {
        let j = rng.random_range(0..=i);
        dirs.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn carved(size: i32, seed: u64) -> Maze {
        let mut maze = Maze::new(size);
        maze.open(Point::ZERO);
        carve_passages(&mut maze, Point::ZERO, &mut StdRng::seed_from_u64(seed));
        maze
    }

    #[test]
    fn carving_opens_cells() {
        let maze = carved(9, 1);
        assert!(maze.is_passable(Point::ZERO));
        assert!(maze.count(Cell::Open) > 1);
    }

    #[test]
    fn stride_two_never_opens_odd_odd_cells() {
        // Destinations have both coordinates even and intermediates have
        // exactly one odd coordinate, so odd-odd cells stay walls.
        let maze = carved(11, 7);
        for (p, cell) in maze.iter() {
            if p.x % 2 == 1 && p.y % 2 == 1 {
                assert_eq!(cell, Cell::Wall, "odd-odd cell {p} was opened");
            }
        }
    }

    #[test]
    fn carving_is_deterministic_under_a_seed() {
        assert_eq!(carved(9, 42).to_string(), carved(9, 42).to_string());
    }
}
