//! [`MazePather`]: the pather for rendered maze snapshots.

use mazer_core::{Point, Snapshot};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Walks a [`Snapshot`] in the four cardinal directions.
///
/// A neighbour is valid when it is in bounds and not a wall; every
/// marker written by agents is walkable. Steps cost 1 and the estimate is
/// the Manhattan distance.
#[derive(Clone, Copy)]
pub struct MazePather<'a> {
    pub snapshot: &'a Snapshot,
}

impl<'a> MazePather<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }
}

impl Pather for MazePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        // a wall leads nowhere, or floods would bridge regions through it
        if !self.snapshot.is_open(p) {
            return;
        }
        for np in p.neighbors_4() {
            if self.snapshot.is_open(np) {
                buf.push(np);
            }
        }
    }
}

impl WeightedPather for MazePather<'_> {}

impl AstarPather for MazePather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Whether `path` is a walkable route on `snapshot`: non-empty, every
/// position open, and each consecutive pair one cardinal step apart.
pub fn is_walkable(snapshot: &Snapshot, path: &[Point]) -> bool {
    !path.is_empty()
        && path.iter().all(|&p| snapshot.is_open(p))
        && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}
