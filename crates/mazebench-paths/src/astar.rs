use std::collections::BinaryHeap;

use mazebench_core::Point;

use crate::SearchRange;
use crate::range::{NodeRef, QueryError};
use crate::traits::AstarPather;

impl SearchRange {
    /// A* search from `from` to `to`.
    ///
    /// The frontier is keyed by `f = g + h` with unit step costs and the
    /// pather's heuristic; ties on equal `f` are broken by the natural
    /// (row, col) ordering of the position. With an admissible, consistent
    /// heuristic the returned path is shortest in edge count.
    ///
    /// Relaxation updates a neighbor's `g` only on strict improvement and
    /// re-pushes it (lazy decrease-key); stale heap entries are skipped
    /// when popped.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Option<Vec<Point>>, QueryError> {
        let (start, goal) = self.endpoints(from, to)?;

        if start == goal {
            return Ok(Some(vec![from]));
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start,
            f: self.nodes[start].f,
            pos: from,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already reached this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    pos: np,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return Ok(None);
        }

        // Reconstruct the path from the node parents.
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Boolean A* reachability query.
    pub fn astar<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<bool, QueryError> {
        Ok(self.astar_path(pather, from, to)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebench_core::Maze;

    #[test]
    fn cost_around_center_wall_is_four() {
        let maze = Maze::parse("111\n101\n111").unwrap();
        let mut sr = SearchRange::new(3);
        let path = sr
            .astar_path(&maze, Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .expect("path exists");
        assert_eq!(path.len() - 1, 4);
    }

    #[test]
    fn cost_matches_bfs_shortest_path() {
        let maze = Maze::parse(
            "1 1 1 0 1\n\
             0 0 1 0 1\n\
             1 1 1 0 1\n\
             1 0 1 1 1\n\
             1 1 0 1 1",
        )
        .unwrap();
        let mut sr = SearchRange::new(5);
        let from = Point::new(0, 0);
        let to = Point::new(4, 4);
        let astar = sr.astar_path(&maze, from, to).unwrap().expect("path");
        let bfs = sr.bfs_path(&maze, from, to).unwrap().expect("path");
        assert_eq!(astar.len(), bfs.len());
    }

    #[test]
    fn tie_break_is_deterministic() {
        // Both L-shaped routes across the open 2×2 grid cost 2; the tie on
        // f is broken by the natural (row, col) ordering, so (1, 0) is
        // expanded before (0, 1).
        let maze = Maze::parse("11\n11").unwrap();
        let mut sr = SearchRange::new(2);
        let path = sr
            .astar_path(&maze, Point::new(0, 0), Point::new(1, 1))
            .unwrap()
            .expect("path exists");
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn start_equals_goal_is_immediately_found() {
        let maze = Maze::new(4);
        let mut sr = SearchRange::new(4);
        let p = Point::new(3, 3);
        assert_eq!(sr.astar_path(&maze, p, p).unwrap(), Some(vec![p]));
    }

    #[test]
    fn walled_in_goal_is_unreachable() {
        let maze = Maze::parse("110\n110\n001").unwrap();
        let mut sr = SearchRange::new(3);
        assert!(!sr.astar(&maze, Point::new(0, 0), Point::new(2, 2)).unwrap());
    }

    #[test]
    fn out_of_bounds_endpoint_is_an_error() {
        let maze = Maze::new(3);
        let mut sr = SearchRange::new(3);
        assert!(
            sr.astar(&maze, Point::new(0, 0), Point::new(5, 5)).is_err()
        );
    }

    #[test]
    fn all_three_algorithms_agree() {
        let mazes = [
            Maze::parse("111\n101\n111").unwrap(),
            Maze::parse("110\n110\n001").unwrap(),
            Maze::parse("11\n11").unwrap(),
            Maze::parse("10\n01").unwrap(),
        ];
        for maze in &mazes {
            let n = maze.size();
            let mut sr = SearchRange::new(n);
            let from = Point::new(0, 0);
            let to = Point::new(n - 1, n - 1);
            let d = sr.dfs(maze, from, to).unwrap();
            let b = sr.bfs(maze, from, to).unwrap();
            let a = sr.astar(maze, from, to).unwrap();
            assert_eq!(d, b, "DFS and BFS disagree on:\n{maze}");
            assert_eq!(b, a, "BFS and A* disagree on:\n{maze}");
        }
    }
}
