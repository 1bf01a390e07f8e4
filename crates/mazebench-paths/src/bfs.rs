use mazebench_core::Point;

use crate::SearchRange;
use crate::range::QueryError;
use crate::traits::Pather;

impl SearchRange {
    /// Breadth-first search from `from` to `to`.
    ///
    /// Same visited-on-push discipline and neighbor order as
    /// [`dfs_path`](Self::dfs_path), but with a FIFO frontier, so the
    /// returned path is shortest in edge count on the unit-cost grid.
    pub fn bfs_path<P: Pather>(
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
        self.queue.clear();
        self.queue.push_back(start);
        self.visited[start] = true;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.queue.pop_front() {
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
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        Ok(found.then(|| self.build_path(goal)))
    }

    /// Boolean BFS reachability query.
    pub fn bfs<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<bool, QueryError> {
        Ok(self.bfs_path(pather, from, to)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebench_core::Maze;

    #[test]
    fn shortest_path_around_center_wall() {
        // 3×3, all open except the center; the shortest corner-to-corner
        // path has 4 edges.
        let maze = Maze::parse("111\n101\n111").unwrap();
        let mut sr = SearchRange::new(3);
        let path = sr
            .bfs_path(&maze, Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .expect("path exists");
        assert_eq!(path.len() - 1, 4);
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(2, 2)));
    }

    #[test]
    fn two_by_two_path_has_two_edges() {
        let maze = Maze::parse("11\n11").unwrap();
        let mut sr = SearchRange::new(2);
        let path = sr
            .bfs_path(&maze, Point::new(0, 0), Point::new(1, 1))
            .unwrap()
            .expect("path exists");
        assert_eq!(path.len() - 1, 2);
    }

    #[test]
    fn start_equals_goal_is_immediately_found() {
        let maze = Maze::new(2);
        let mut sr = SearchRange::new(2);
        let p = Point::new(0, 1);
        assert_eq!(sr.bfs_path(&maze, p, p).unwrap(), Some(vec![p]));
    }

    #[test]
    fn walled_in_goal_is_unreachable() {
        let maze = Maze::parse("110\n110\n001").unwrap();
        let mut sr = SearchRange::new(3);
        assert!(!sr.bfs(&maze, Point::new(0, 0), Point::new(2, 2)).unwrap());
    }

    #[test]
    fn out_of_bounds_endpoint_is_an_error() {
        let maze = Maze::new(3);
        let mut sr = SearchRange::new(3);
        let err = sr
            .bfs(&maze, Point::new(3, 3), Point::new(0, 0))
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::OutOfBounds {
                pos: Point::new(3, 3),
                size: 3,
            }
        );
    }
}
