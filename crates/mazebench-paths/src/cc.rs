//! Region (connected-component) discovery.

use mazebench_core::Point;

use crate::SearchRange;
use crate::traits::Pather;

/// A maximal set of mutually reachable passable cells.
///
/// Regions are produced by [`SearchRange::regions`] in row-major discovery
/// order and together partition the passable cells of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    cells: Vec<Point>,
}

impl Region {
    /// The region's deterministic representative: the flood-fill seed,
    /// which is the row-major (lexicographically smallest (row, col))
    /// member of the region.
    #[inline]
    pub fn representative(&self) -> Point {
        self.cells[0]
    }

    /// The region's member cells, seed first, in discovery order.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells in the region (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl SearchRange {
    /// Partition the passable cells of the grid into connected regions.
    ///
    /// Seeds a stack-based flood fill from each not-yet-labelled passable
    /// cell in row-major order, so the returned regions are ordered by
    /// their seeds and each seed is its region's smallest (row, col)
    /// member.
    pub fn regions<P: Pather>(&mut self, pather: &P) -> Vec<Region> {
        let len = self.len();
        // Reset labels.
        for v in self.labels.iter_mut() {
            *v = -1;
        }

        let mut regions: Vec<Region> = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for start in 0..len {
            if self.labels[start] >= 0 {
                continue;
            }
            let sp = self.point(start);
            if !pather.passable(sp) {
                continue;
            }

            // Iterative flood fill from `sp`.
            let label = regions.len() as i32;
            let mut cells = vec![sp];
            self.stack.clear();
            self.stack.push(start);
            self.labels[start] = label;

            while let Some(ci) = self.stack.pop() {
                let cp = self.point(ci);
                nbuf.clear();
                pather.neighbors(cp, &mut nbuf);

                for &np in nbuf.iter() {
                    if let Some(ni) = self.idx(np) {
                        if self.labels[ni] < 0 {
                            self.labels[ni] = label;
                            self.stack.push(ni);
                            cells.push(np);
                        }
                    }
                }
            }

            regions.push(Region { cells });
        }

        self.nbuf = nbuf;
        regions
    }
}
