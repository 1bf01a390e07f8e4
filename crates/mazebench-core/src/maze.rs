//! The boolean-passable maze grid.

use std::fmt;

use crate::geom::Point;

/// A single grid cell: impassable wall or open passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Impassable. Serialized as `0`.
    #[default]
    Wall,
    /// Passable. Serialized as `1`.
    Open,
}

impl Cell {
    /// Whether the cell is open (passable).
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }
}

/// A square grid of [`Cell`] values with flat row-major storage.
///
/// The grid is built by the generation pipeline and handed to the search
/// algorithms by shared reference; searches never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: i32,
    cells: Vec<Cell>,
}

impl Maze {
    /// Create a new maze of `size` × `size` cells, all walls.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        Self {
            size,
            cells: vec![Cell::default(); (size * size) as usize],
        }
    }

    /// Side length of the square grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size && p.y < self.size
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.size + p.x) as usize
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// Open the cell at `p` (no-op out of bounds).
    #[inline]
    pub fn open(&mut self, p: Point) {
        self.set(p, Cell::Open);
    }

    /// Whether `p` can be stepped on: inside the grid and open.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| {
            let p = Point::new(i as i32 % self.size, i as i32 / self.size);
            (p, c)
        })
    }

    /// Parse a maze from ASCII text.
    ///
    /// Each line is one row; `0` or `#` is a wall, `1` or `.` is open, and
    /// spaces are ignored (so [`Display`](fmt::Display) output round-trips).
    /// All rows must have the same width and the result must be square.
    pub fn parse(s: &str) -> Result<Self, ParseMazeError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for (y, line) in s.trim().lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars() {
                match ch {
                    '0' | '#' => row.push(Cell::Wall),
                    '1' | '.' => row.push(Cell::Open),
                    ' ' => {}
                    _ => {
                        return Err(ParseMazeError::InvalidChar {
                            ch,
                            pos: Point::new(row.len() as i32, y as i32),
                        });
                    }
                }
            }
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(ParseMazeError::Ragged);
                }
            }
            rows.push(row);
        }
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width != height {
            return Err(ParseMazeError::NotSquare { width, height });
        }
        Ok(Self {
            size: height as i32,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}

impl fmt::Display for Maze {
    /// The exchange format: rows of space-separated `0`/`1`, row-major.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                if x > 0 {
                    write!(f, " ")?;
                }
                let digit = match self.cells[self.index(Point::new(x, y))] {
                    Cell::Wall => '0',
                    Cell::Open => '1',
                };
                write!(f, "{digit}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a maze from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMazeError {
    /// Rows have inconsistent widths.
    Ragged,
    /// The row and column counts differ.
    NotSquare { width: usize, height: usize },
    /// A character other than `0`, `1`, `#`, `.` or space was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for ParseMazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged => write!(f, "maze rows have inconsistent widths"),
            Self::NotSquare { width, height } => {
                write!(f, "maze is not square: {width} columns, {height} rows")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "maze contains invalid character {ch:?} at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseMazeError {}
