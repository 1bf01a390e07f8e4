//! Maze generation for mazebench.
//!
//! The pipeline carves a randomized depth-first skeleton
//! ([`carve_passages`]), patches disconnected open regions back together
//! ([`connect_regions`]) and verifies corner-to-corner reachability,
//! re-carving from scratch until a valid maze is produced or the attempt
//! bound is hit ([`MazeGen::generate`]).

mod carve;
mod generator;
mod repair;

pub use carve::carve_passages;
pub use generator::{DEFAULT_MAX_ATTEMPTS, GenerationError, MazeGen, generate_valid_maze};
pub use repair::connect_regions;
