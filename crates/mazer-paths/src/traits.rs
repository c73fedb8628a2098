//! The seams between the searches in this crate and the grid they walk.

use mazer_core::Point;

/// Where a search may step next. Enough for BFS and component labelling.
pub trait Pather {
    /// Push every position one step away from `p` onto `buf`, which arrives
    /// empty.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A [`Pather`] whose steps have a positive cost. Maze steps all cost 1,
/// which is what the default returns.
pub trait WeightedPather: Pather {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

/// A [`WeightedPather`] with a lower bound on the remaining cost, as A*
/// needs. The bound must never exceed the true cost, and must not drop by
/// more than a step's cost across one step, or A* loses optimality.
pub trait AstarPather: WeightedPather {
    fn estimate(&self, from: Point, to: Point) -> i32;
}
