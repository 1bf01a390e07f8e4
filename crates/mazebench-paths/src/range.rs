use std::collections::VecDeque;
use std::fmt;

use mazebench_core::Point;

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered for use in `BinaryHeap`.
///
/// Smallest `f` pops first; equal `f` breaks ties by the natural (row, col)
/// ordering of the position, so the priority order is a strict total order
/// and A* expansion is deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) pos: Point,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// Central coordinator for search queries on a square grid.
///
/// `SearchRange` owns all per-query state (frontier containers, visited
/// marks, parent indices, A* node array) so that repeated queries reuse
/// capacity instead of reallocating. A single value must not be shared
/// across threads mid-query; independent searches over the same `&Maze`
/// can each use their own `SearchRange`.
pub struct SearchRange {
    pub(crate) size: i32,
    // A* node cache, invalidated lazily via the generation counter.
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // DFS / BFS state.
    pub(crate) visited: Vec<bool>,
    pub(crate) parents: Vec<usize>,
    pub(crate) stack: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    // Region labels.
    pub(crate) labels: Vec<i32>,
    // Shared scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Point>,
}

impl SearchRange {
    /// Create a new `SearchRange` for a `size` × `size` grid.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        let len = (size * size) as usize;
        Self {
            size,
            nodes: vec![Node::default(); len],
            generation: 0,
            visited: vec![false; len],
            parents: vec![usize::MAX; len],
            stack: Vec::new(),
            queue: VecDeque::new(),
            labels: vec![-1; len],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the grid size, reallocating caches only when the new size
    /// exceeds existing capacity.
    pub fn set_size(&mut self, size: i32) {
        let size = size.max(0);
        let new_len = (size * size) as usize;
        let old_capacity = self.nodes.len();
        self.size = size;

        if new_len <= old_capacity {
            // Fits within existing capacity. The A* node cache is
            // invalidated by its generation counter and the DFS/BFS state
            // is reset per query, so nothing else to do.
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;

        self.visited.clear();
        self.visited.resize(new_len, false);
        self.parents.clear();
        self.parents.resize(new_len, usize::MAX);
        self.labels.clear();
        self.labels.resize(new_len, -1);
        self.stack.clear();
        self.queue.clear();
    }

    /// The grid side length being searched.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells in the current grid (may be less than cache capacity).
    #[inline]
    pub(crate) fn len(&self) -> usize {
        (self.size * self.size) as usize
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.size || p.y >= self.size {
            return None;
        }
        Some((p.y * self.size + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.size, idx as i32 / self.size)
    }

    /// Validate the endpoints of a query, converting them to flat indices.
    pub(crate) fn endpoints(
        &self,
        from: Point,
        to: Point,
    ) -> Result<(usize, usize), QueryError> {
        let start = self.idx(from).ok_or(QueryError::OutOfBounds {
            pos: from,
            size: self.size,
        })?;
        let goal = self.idx(to).ok_or(QueryError::OutOfBounds {
            pos: to,
            size: self.size,
        })?;
        Ok((start, goal))
    }

    /// Reset the visited marks and parent indices for a DFS/BFS query.
    pub(crate) fn reset_marks(&mut self) {
        for v in self.visited.iter_mut() {
            *v = false;
        }
        for p in self.parents.iter_mut() {
            *p = usize::MAX;
        }
    }

    /// Walk the parent indices back from `goal` and return the path in
    /// start-to-goal order.
    pub(crate) fn build_path(&self, goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.parents[ci];
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// QueryError
// ---------------------------------------------------------------------------

/// Errors for malformed search queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// A search endpoint lies outside the grid.
    OutOfBounds { pos: Point, size: i32 },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, size } => {
                write!(f, "query endpoint {pos} outside the {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for QueryError {}
