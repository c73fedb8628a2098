//! Breadth-first distance maps, the unit-cost baseline A* is checked
//! against.

use std::collections::VecDeque;

use mazer_core::Point;

use crate::PathRange;
use crate::pathrange::{PathNode, UNREACHABLE};
use crate::traits::Pather;

impl PathRange {
    /// Compute a multi-source breadth-first distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns every reached node in visiting order.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_dist: i32,
    ) -> &[PathNode] {
        self.dist.fill(UNREACHABLE);
        self.reached.clear();

        let mut queue: VecDeque<usize> = VecDeque::new();

        for &src in sources {
            let Some(si) = self.index(src) else {
                continue;
            };
            if self.dist[si] != UNREACHABLE {
                continue;
            }
            self.dist[si] = 0;
            queue.push_back(si);
            self.reached.push(PathNode { pos: src, cost: 0 });
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let nd = self.dist[ci] + 1;
            if nd > max_dist {
                continue;
            }
            nbuf.clear();
            pather.neighbors(self.position(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.index(np) else {
                    continue;
                };
                if self.dist[ni] != UNREACHABLE {
                    continue;
                }
                self.dist[ni] = nd;
                queue.push_back(ni);
                self.reached.push(PathNode { pos: np, cost: nd });
            }
        }

        self.nbuf = nbuf;
        &self.reached
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last `bfs_map` call.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.index(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Shortest unit-cost path from `from` to `to` found by exhaustive BFS.
    ///
    /// Runs a distance map from `to` and descends it from `from`. Returns
    /// `None` when `to` cannot be reached.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<Vec<Point>> {
        self.bfs_map(pather, &[to], UNREACHABLE);
        let mut dist = self.bfs_at(from);
        if dist == UNREACHABLE {
            return None;
        }

        let mut path = vec![from];
        let mut cur = from;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        while dist > 0 {
            nbuf.clear();
            pather.neighbors(cur, &mut nbuf);
            let Some(&next) = nbuf.iter().find(|&&n| self.bfs_at(n) == dist - 1) else {
                break;
            };
            path.push(next);
            cur = next;
            dist -= 1;
        }
        self.nbuf = nbuf;

        (cur == to).then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pather::{MazePather, is_walkable};
    use mazer_core::Snapshot;

    const ROOMS: &str = "\
#######
#Q    #
# ### #
#   # #
#######";

    #[test]
    fn distances_from_goal() {
        let snap = Snapshot::from_text(ROOMS);
        let mut pr = PathRange::new(snap.bounds());
        let reached = pr.bfs_map(&MazePather::new(&snap), &[Point::new(1, 1)], UNREACHABLE);
        assert_eq!(reached.len(), snap.iter().filter(|(_, s)| s.is_open()).count());
        assert_eq!(pr.bfs_at(Point::new(1, 1)), 0);
        assert_eq!(pr.bfs_at(Point::new(5, 3)), 6);
        assert_eq!(pr.bfs_at(Point::new(3, 3)), 4);
        assert_eq!(pr.bfs_at(Point::new(0, 0)), UNREACHABLE);
        assert_eq!(pr.bfs_at(Point::new(99, 0)), UNREACHABLE);
    }

    #[test]
    fn max_dist_bounds_expansion() {
        let snap = Snapshot::from_text(ROOMS);
        let mut pr = PathRange::new(snap.bounds());
        let reached = pr.bfs_map(&MazePather::new(&snap), &[Point::new(1, 1)], 2);
        assert!(reached.iter().all(|n| n.cost <= 2));
        assert_eq!(pr.bfs_at(Point::new(5, 3)), UNREACHABLE);
    }

    #[test]
    fn bfs_path_descends_distance_map() {
        let snap = Snapshot::from_text(ROOMS);
        let mut pr = PathRange::new(snap.bounds());
        let pather = MazePather::new(&snap);
        let path = pr.bfs_path(&pather, Point::new(5, 3), Point::new(1, 1)).unwrap();
        assert_eq!(path.len(), 7);
        assert!(is_walkable(&snap, &path));
        assert_eq!(pr.bfs_path(&pather, Point::new(0, 0), Point::new(1, 1)), None);
    }
}
