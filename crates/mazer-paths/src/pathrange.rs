use std::cmp::Ordering;

use mazer_core::{Point, Range};

/// A position with its distance from the nearest source, returned from BFS
/// map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Distance of a position no BFS source reached.
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;
pub(crate) const NO_LABEL: u32 = u32::MAX;

/// Per-position A* record. Only meaningful when `stamp` equals the
/// current search's stamp; older records read as never visited.
#[derive(Clone, Copy)]
pub(crate) struct Visit {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) stamp: u32,
    pub(crate) closed: bool,
}

impl Default for Visit {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            stamp: 0,
            closed: false,
        }
    }
}

/// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is inverted:
/// smallest `f` pops first, and among equal `f` the deeper entry (larger
/// `g`) wins, which in a corridor maze heads straight down the corridor
/// instead of fanning out.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Queued {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) g: i32,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then(self.g.cmp(&other.g))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search workspace for one rendered grid rectangle.
///
/// Holds the A* visit records, the BFS distance map and the component
/// labels, indexed row-major over `bounds`. Every search reuses them, so a
/// runner that searches repeatedly allocates only on its first query.
/// A `PathRange` is never shared: each concurrent solver owns its own.
pub struct PathRange {
    pub(crate) bounds: Range,
    pub(crate) width: usize,
    pub(crate) visits: Vec<Visit>,
    pub(crate) stamp: u32,
    pub(crate) dist: Vec<i32>,
    pub(crate) reached: Vec<PathNode>,
    pub(crate) labels: Vec<u32>,
    pub(crate) stack: Vec<usize>,
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a workspace covering `bounds`.
    pub fn new(bounds: Range) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            width: bounds.width().max(0) as usize,
            visits: vec![Visit::default(); len],
            stamp: 0,
            dist: vec![UNREACHABLE; len],
            reached: Vec::new(),
            labels: vec![NO_LABEL; len],
            stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Point the workspace at a new rectangle, e.g. after regenerating a
    /// maze of another size. Buffers only grow; a smaller rectangle reuses
    /// them and invalidates old A* records through the stamp.
    pub fn reset(&mut self, bounds: Range) {
        let len = bounds.len();
        self.bounds = bounds;
        self.width = bounds.width().max(0) as usize;
        self.reached.clear();
        self.stack.clear();
        self.stamp = self.stamp.wrapping_add(1);
        if len > self.visits.len() {
            self.visits.resize(len, Visit::default());
            self.dist.resize(len, UNREACHABLE);
            self.labels.resize(len, NO_LABEL);
        }
    }

    /// The rectangle searched.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of positions in the rectangle. Buffers may be longer after a
    /// shrinking [`reset`](Self::reset).
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Flat index of `p`, or `None` outside the rectangle.
    #[inline]
    pub(crate) fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let rel = p - self.bounds.min;
        Some(rel.y as usize * self.width + rel.x as usize)
    }

    #[inline]
    pub(crate) fn position(&self, i: usize) -> Point {
        self.bounds.min + Point::new((i % self.width) as i32, (i / self.width) as i32)
    }
}
