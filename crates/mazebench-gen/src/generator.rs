//! The carve / repair / verify generation pipeline.

use std::fmt;

use mazebench_core::{Maze, Point};
use mazebench_paths::SearchRange;
use rand::Rng;

use crate::carve::carve_passages;
use crate::repair::connect_regions;

/// Default bound on carve/repair cycles before generation gives up.
///
/// A single attempt only fails verification in pathological cases, so this
/// leaves enormous margin while still terminating on misuse.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Maze generator carrying its random source and attempt bound.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    max_attempts: usize,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default attempt bound.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create a generator with an explicit attempt bound (minimum 1).
    pub fn with_max_attempts(rng: R, max_attempts: usize) -> Self {
        Self {
            rng,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Generate a maze whose corners (0,0) and (size-1,size-1) are open
    /// and mutually reachable.
    ///
    /// Each attempt carves a fresh skeleton, force-opens both corners,
    /// merges any disconnected open regions and verifies reachability with
    /// BFS. Failed attempts are discarded wholesale and re-carved; after
    /// `max_attempts` failures the error is surfaced instead of looping
    /// forever.
    pub fn generate(&mut self, size: i32) -> Result<Maze, GenerationError> {
        if size < 2 {
            return Err(GenerationError::InvalidSize(size));
        }

        let start = Point::ZERO;
        let goal = Point::new(size - 1, size - 1);
        let mut range = SearchRange::new(size);

        for attempt in 1..=self.max_attempts {
            let mut maze = Maze::new(size);
            maze.open(start);
            carve_passages(&mut maze, start, &mut self.rng);
            // The goal corner is opened before region discovery: for even
            // sizes the stride-2 carver can never reach it, and a corner
            // opened after merging would be a stranded singleton.
            maze.open(goal);

            let regions = range.regions(&maze);
            if regions.len() > 1 {
                log::debug!(
                    "attempt {attempt}: merging {} disconnected regions",
                    regions.len()
                );
                connect_regions(&mut maze, &regions);
            }

            // Both endpoints are corners of the grid, so the query cannot
            // be out of bounds.
            if range.bfs(&maze, start, goal).unwrap_or(false) {
                return Ok(maze);
            }
            log::debug!("attempt {attempt}: corners not connected after repair, recarving");
        }

        log::warn!(
            "maze generation failed after {} attempts (size {size})",
            self.max_attempts
        );
        Err(GenerationError::AttemptsExhausted {
            size,
            attempts: self.max_attempts,
        })
    }
}

/// Generate a valid maze with a fresh thread-local random source and the
/// default attempt bound.
///
/// Blocking, no partial results: an `Ok` maze always satisfies the
/// corner-reachability invariant.
pub fn generate_valid_maze(size: i32) -> Result<Maze, GenerationError> {
    MazeGen::new(rand::rng()).generate(size)
}

/// Errors from the generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// The requested size cannot hold two distinct corner cells.
    InvalidSize(i32),
    /// Every carve/repair cycle failed verification.
    AttemptsExhausted { size: i32, attempts: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => {
                write!(f, "invalid maze size {size}: must be at least 2")
            }
            Self::AttemptsExhausted { size, attempts } => {
                write!(
                    f,
                    "failed to generate a connected {size}x{size} maze after {attempts} attempts"
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corners_reachable(maze: &Maze) -> bool {
        let size = maze.size();
        let goal = Point::new(size - 1, size - 1);
        assert!(maze.is_passable(Point::ZERO));
        assert!(maze.is_passable(goal));
        SearchRange::new(size)
            .bfs(maze, Point::ZERO, goal)
            .unwrap()
    }

    #[test]
    fn rejects_sizes_below_two() {
        for size in [-5, 0, 1] {
            assert_eq!(
                generate_valid_maze(size).unwrap_err(),
                GenerationError::InvalidSize(size)
            );
        }
    }

    #[test]
    fn generates_smallest_valid_maze() {
        let maze = generate_valid_maze(2).unwrap();
        assert!(corners_reachable(&maze));
    }

    #[test]
    fn odd_and_even_sizes_satisfy_the_corner_invariant() {
        for size in [3, 4, 9, 10, 15] {
            let maze = generate_valid_maze(size).unwrap();
            assert_eq!(maze.size(), size);
            assert!(corners_reachable(&maze), "size {size} failed:\n{maze}");
        }
    }

    #[test]
    fn hundred_size_ten_mazes_never_fail() {
        for _ in 0..100 {
            let maze = generate_valid_maze(10).unwrap();
            assert!(corners_reachable(&maze));
        }
    }

    #[test]
    fn open_cells_form_a_single_region() {
        let maze = generate_valid_maze(9).unwrap();
        let mut sr = SearchRange::new(9);
        assert_eq!(sr.regions(&maze).len(), 1);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let mut a = MazeGen::new(StdRng::seed_from_u64(99));
        let mut b = MazeGen::new(StdRng::seed_from_u64(99));
        assert_eq!(
            a.generate(9).unwrap().to_string(),
            b.generate(9).unwrap().to_string()
        );
    }

    #[test]
    fn all_algorithms_agree_on_generated_mazes() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(7));
        for size in [5, 8, 12] {
            let maze = mg.generate(size).unwrap();
            let start = Point::ZERO;
            let goal = Point::new(size - 1, size - 1);
            let mut sr = SearchRange::new(size);
            assert!(sr.dfs(&maze, start, goal).unwrap());
            assert!(sr.bfs(&maze, start, goal).unwrap());
            assert!(sr.astar(&maze, start, goal).unwrap());

            // Optimality: the A* cost equals the BFS edge count.
            let bfs = sr.bfs_path(&maze, start, goal).unwrap().unwrap();
            let astar = sr.astar_path(&maze, start, goal).unwrap().unwrap();
            assert_eq!(astar.len(), bfs.len());
        }
    }
}
