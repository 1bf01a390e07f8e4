//! Search algorithms over the mazebench grid model.
//!
//! This crate answers reachability queries on 2D grids with three
//! strategies, all expanding neighbors in the same fixed order so results
//! are deterministic:
//!
//! - **DFS** ([`SearchRange::dfs_path`]) — explicit stack, order-dependent
//!   path, no shortest-path guarantee
//! - **BFS** ([`SearchRange::bfs_path`]) — FIFO queue, shortest path in
//!   edge count
//! - **A\*** ([`SearchRange::astar_path`]) — Manhattan heuristic, optimal
//!   on the unit-cost 4-connected grid
//!
//! It also provides **region discovery** ([`SearchRange::regions`]), the
//! connected-component partition of open cells used by connectivity repair.
//!
//! All queries run through [`SearchRange`], which owns and reuses internal
//! caches so that repeated queries incur no allocations after warm-up.

mod astar;
mod bfs;
mod cc;
mod dfs;
mod distance;
mod range;
mod traits;

pub use cc::Region;
pub use distance::manhattan;
pub use range::{QueryError, SearchRange};
pub use traits::{AstarPather, Pather};

use mazebench_core::{Maze, Point};

/// One-shot DFS reachability query.
///
/// Allocates a fresh [`SearchRange`]; construct one yourself for repeated
/// queries against the same grid size.
pub fn dfs(maze: &Maze, start: Point, goal: Point) -> Result<bool, QueryError> {
    SearchRange::new(maze.size()).dfs(maze, start, goal)
}

/// One-shot BFS reachability query.
pub fn bfs(maze: &Maze, start: Point, goal: Point) -> Result<bool, QueryError> {
    SearchRange::new(maze.size()).bfs(maze, start, goal)
}

/// One-shot A* reachability query.
pub fn astar(maze: &Maze, start: Point, goal: Point) -> Result<bool, QueryError> {
    SearchRange::new(maze.size()).astar(maze, start, goal)
}
