use mazebench_core::Point;

use crate::SearchRange;
use crate::range::QueryError;
use crate::traits::Pather;

impl SearchRange {
    /// Depth-first search from `from` to `to`.
    ///
    /// Cells are marked visited when pushed, the most recently pushed cell
    /// is expanded first, and neighbors are enumerated in the fixed
    /// up/down/left/right order, so the discovered path is deterministic
    /// but not necessarily shortest.
    ///
    /// Returns the discovered path (including both endpoints), `Ok(None)`
    /// if the goal is unreachable, or [`QueryError`] for out-of-bounds
    /// endpoints. `from == to` is immediately found.
    pub fn dfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Option<Vec<Point>>, QueryError> {
        let (start, goal) = self.endpoints(from, to)?;

        if start == goal {
            return Ok(Some(vec![from]));
        }

        self.reset_marks();
        self.stack.clear();
        self.stack.push(start);
        self.visited[start] = true;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.stack.pop() {
            if ci == goal {
                found = true;
                break;
            }
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                self.parents[ni] = ci;
                self.stack.push(ni);
            }
        }

        self.nbuf = nbuf;
        Ok(found.then(|| self.build_path(goal)))
    }

    /// Boolean DFS reachability query.
    pub fn dfs<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<bool, QueryError> {
        Ok(self.dfs_path(pather, from, to)?.is_some())
    }
}
