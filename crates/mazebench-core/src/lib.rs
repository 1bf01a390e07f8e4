//! **mazebench-core** — the grid model shared by the maze generator and the
//! search algorithms.
//!
//! Provides the geometry primitive [`Point`] and the boolean-passable square
//! grid [`Maze`], including the row-of-0/1 text exchange format.

pub mod geom;
pub mod maze;

pub use geom::Point;
pub use maze::{Cell, Maze, ParseMazeError};
