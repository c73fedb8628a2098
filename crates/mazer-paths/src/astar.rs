use std::collections::BinaryHeap;

use mazer_core::{Point, Snapshot};

use crate::PathRange;
use crate::pather::MazePather;
use crate::pathrange::{NO_PARENT, Queued, Visit};
use crate::traits::AstarPather;

impl PathRange {
    /// Shortest path from `from` to `to` by A*, both endpoints included.
    ///
    /// `None` when either endpoint lies outside the range or the frontier
    /// empties without reaching `to`. Predecessors are only followed from
    /// a goal that was actually closed, so a failed search never yields a
    /// partial path.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start = self.index(from)?;
        let goal = self.index(to)?;
        if start == goal {
            return Some(vec![from]);
        }

        self.stamp = self.stamp.wrapping_add(1);
        let stamp = self.stamp;
        self.visits[start] = Visit {
            g: 0,
            parent: NO_PARENT,
            stamp,
            closed: false,
        };

        let mut frontier = BinaryHeap::new();
        frontier.push(Queued {
            idx: start,
            f: pather.estimate(from, to),
            g: 0,
        });
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = false;

        while let Some(Queued { idx, g, .. }) = frontier.pop() {
            let visit = &mut self.visits[idx];
            // superseded by a cheaper entry, or already expanded
            if visit.closed || g > visit.g {
                continue;
            }
            if idx == goal {
                reached = true;
                break;
            }
            visit.closed = true;

            let here = self.position(idx);
            nbuf.clear();
            pather.neighbors(here, &mut nbuf);
            for &next in &nbuf {
                let Some(ni) = self.index(next) else {
                    continue;
                };
                let ng = g + pather.cost(here, next);
                let n = &mut self.visits[ni];
                if n.stamp == stamp && (n.closed || ng >= n.g) {
                    continue;
                }
                *n = Visit {
                    g: ng,
                    parent: idx,
                    stamp,
                    closed: false,
                };
                frontier.push(Queued {
                    idx: ni,
                    f: ng + pather.estimate(next, to),
                    g: ng,
                });
            }
        }
        self.nbuf = nbuf;

        reached.then(|| self.trace(goal))
    }

    // Follow parents back from `end` and return the path start-first.
    fn trace(&self, end: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut i = end;
        while i != NO_PARENT {
            path.push(self.position(i));
            i = self.visits[i].parent;
        }
        path.reverse();
        path
    }
}

/// One-shot A* over a maze snapshot.
///
/// Allocates a fresh [`PathRange`]; callers searching repeatedly should
/// keep their own and call [`PathRange::astar_path`] with a
/// [`MazePather`].
pub fn find_path(snapshot: &Snapshot, start: Point, goal: Point) -> Option<Vec<Point>> {
    let mut pr = PathRange::new(snapshot.bounds());
    pr.astar_path(&MazePather::new(snapshot), start, goal)
}
