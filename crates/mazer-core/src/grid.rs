//! The [`Grid`] type: the rendered maze as a shared, lockable buffer.
//!
//! A `Grid` is a *handle* onto a backing buffer. Cloning a `Grid` yields
//! another handle onto the **same** storage, so the generator, every agent
//! thread and the renderer all observe one maze. Every access goes through
//! a single mutex; concurrent writers therefore never tear a cell, and when
//! two writers target the same position the last one wins.
//!
//! Readers that need a consistent view for longer than one call (path
//! search, drawing) take a [`Snapshot`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::geom::{Point, Range};
use crate::symbol::Symbol;

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct GridBuffer {
    cells: Vec<Symbol>,
    width: usize,
    height: usize,
}

impl GridBuffer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Symbol::default(); width * height],
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        index_in(p, self.width, self.height)
    }
}

#[inline]
fn index_in(p: Point, width: usize, height: usize) -> Option<usize> {
    if p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height {
        Some((p.y as usize) * width + (p.x as usize))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rendered maze backed by shared, mutex-guarded storage.
///
/// Cloning produces another handle to the same buffer. A new grid is all
/// walls.
#[derive(Debug, Clone)]
pub struct Grid {
    buffer: Arc<Mutex<GridBuffer>>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with walls.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            buffer: Arc::new(Mutex::new(GridBuffer::new(w as usize, h as usize))),
            bounds: Range::new(0, 0, w, h),
        }
    }

    // The buffer only holds `Copy` symbols, so a writer that panicked
    // mid-call cannot have left it half-updated.
    fn lock(&self) -> MutexGuard<'_, GridBuffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Read the symbol at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Symbol> {
        let buf = self.lock();
        buf.index(p).map(|i| buf.cells[i])
    }

    /// Set the symbol at `p`. No-op if `p` is out of bounds.
    pub fn set(&self, p: Point, sym: Symbol) {
        let mut buf = self.lock();
        if let Some(i) = buf.index(p) {
            buf.cells[i] = sym;
        }
    }

    /// Apply several writes under one lock, in order. Out-of-bounds
    /// positions are skipped.
    pub fn set_many(&self, writes: &[(Point, Symbol)]) {
        let mut buf = self.lock();
        for &(p, sym) in writes {
            if let Some(i) = buf.index(p) {
                buf.cells[i] = sym;
            }
        }
    }

    /// Count how many positions hold `sym`.
    pub fn count(&self, sym: Symbol) -> usize {
        self.lock().cells.iter().filter(|&&s| s == sym).count()
    }

    /// Copy the current contents into an owned [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        let buf = self.lock();
        Snapshot {
            cells: buf.cells.clone(),
            width: buf.width,
            height: buf.height,
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// An owned, immutable copy of a [`Grid`] at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    cells: Vec<Symbol>,
    width: usize,
    height: usize,
}

impl Snapshot {
    /// Build a snapshot from text, one line per row, using the
    /// [`Symbol::glyph`] characters for walls (`#`), passages and the goal
    /// (`Q`). Any other character is read as a passage. Short lines are
    /// padded with walls.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let height = lines.len();
        let mut cells = vec![Symbol::Wall; width * height];
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                cells[y * width + x] = match ch {
                    '#' => Symbol::Wall,
                    'Q' => Symbol::Goal,
                    _ => Symbol::Passage,
                };
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// The bounding range.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Symbol at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Symbol> {
        index_in(p, self.width, self.height).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Symbol::is_open)
    }

    /// Count how many positions hold `sym`.
    pub fn count(&self, sym: Symbol) -> usize {
        self.cells.iter().filter(|&&s| s == sym).count()
    }

    /// Row-major iterator over `(Point, Symbol)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Symbol)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Format the snapshot as text, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|s| s.glyph()));
            out.push('\n');
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single position that changed between snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub sym: Symbol,
    pub pos: Point,
}

/// A set of changes between two snapshots.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two snapshots.
///
/// Positions of `curr` missing from `prev` (e.g. `prev` is empty) count as
/// changed.
pub fn compute_frame(prev: &Snapshot, curr: &Snapshot) -> Frame {
    let cells = curr
        .iter()
        .filter(|&(p, sym)| prev.at(p) != Some(sym))
        .map(|(pos, sym)| FrameCell { sym, pos })
        .collect();
    Frame {
        cells,
        width: curr.width(),
        height: curr.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::AgentId;

    #[test]
    fn grid_new_is_all_walls() {
        let g = Grid::new(5, 3);
        assert_eq!(g.size(), Point::new(5, 3));
        assert_eq!(g.count(Symbol::Wall), 15);
        assert_eq!(g.at(Point::new(4, 2)), Some(Symbol::Wall));
        assert_eq!(g.at(Point::new(5, 0)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
    }

    #[test]
    fn grid_negative_size_is_empty() {
        let g = Grid::new(-3, 4);
        assert!(g.bounds().is_empty());
        assert_eq!(g.snapshot().to_text(), "");
    }

    #[test]
    fn clones_share_buffer() {
        let g = Grid::new(3, 3);
        let h = g.clone();
        h.set(Point::new(1, 1), Symbol::Goal);
        assert_eq!(g.at(Point::new(1, 1)), Some(Symbol::Goal));
        assert_eq!(Grid::new(3, 3).at(Point::new(1, 1)), Some(Symbol::Wall));
    }

    #[test]
    fn set_out_of_bounds_is_noop() {
        let g = Grid::new(2, 2);
        g.set(Point::new(9, 9), Symbol::Passage);
        g.set_many(&[(Point::new(-1, 0), Symbol::Passage), (Point::new(0, 0), Symbol::Goal)]);
        assert_eq!(g.count(Symbol::Passage), 0);
        assert_eq!(g.at(Point::new(0, 0)), Some(Symbol::Goal));
    }

    #[test]
    fn set_many_applies_in_order() {
        let g = Grid::new(2, 1);
        let a = Symbol::Agent(AgentId(0));
        let t = Symbol::Trail(AgentId(0));
        g.set_many(&[(Point::new(0, 0), a), (Point::new(0, 0), t)]);
        assert_eq!(g.at(Point::new(0, 0)), Some(t));
    }

    #[test]
    fn concurrent_writers_do_not_tear() {
        let g = Grid::new(8, 8);
        std::thread::scope(|s| {
            for i in 0..4usize {
                let g = g.clone();
                s.spawn(move || {
                    for p in g.bounds().iter() {
                        g.set(p, Symbol::Trail(AgentId(i)));
                    }
                });
            }
        });
        let snap = g.snapshot();
        assert!(snap.iter().all(|(_, s)| matches!(s, Symbol::Trail(a) if a.0 < 4)));
    }

    #[test]
    fn snapshot_is_detached() {
        let g = Grid::new(3, 3);
        let snap = g.snapshot();
        g.set(Point::new(1, 1), Symbol::Passage);
        assert_eq!(snap.at(Point::new(1, 1)), Some(Symbol::Wall));
        assert!(!snap.is_open(Point::new(1, 1)));
        assert!(g.snapshot().is_open(Point::new(1, 1)));
    }

    #[test]
    fn text_round_trip() {
        let text = "#####\n#Q  #\n#####\n";
        let snap = Snapshot::from_text(text);
        assert_eq!(snap.width(), 5);
        assert_eq!(snap.height(), 3);
        assert_eq!(snap.at(Point::new(1, 1)), Some(Symbol::Goal));
        assert_eq!(snap.to_text(), text);
    }

    #[test]
    fn compute_frame_diff() {
        let g = Grid::new(3, 2);
        let a = g.snapshot();
        g.set(Point::new(1, 0), Symbol::Agent(AgentId(1)));
        let b = g.snapshot();
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Point::new(1, 0));
        assert_eq!(frame.cells[0].sym, Symbol::Agent(AgentId(1)));

        let empty = Grid::new(0, 0).snapshot();
        assert_eq!(compute_frame(&empty, &b).cells.len(), 6);
    }
}
