//! The logical [`Cell`] type and its mapping onto rendered positions.

use std::fmt;

use crate::geom::Point;

/// A position in the logical `rows × cols` maze.
///
/// Logical cell `(row, col)` is drawn at rendered position
/// `(2·col + 1, 2·row + 1)`; the positions in between hold the walls or
/// open joints separating neighbouring cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Rendered position of this cell.
    #[inline]
    pub const fn rendered(self) -> Point {
        Point::new(2 * self.col + 1, 2 * self.row + 1)
    }

    /// Logical cell drawn at rendered position `p`, if `p` is a cell centre
    /// rather than a wall or joint position.
    #[inline]
    pub fn from_rendered(p: Point) -> Option<Self> {
        if p.x < 1 || p.y < 1 || p.x % 2 == 0 || p.y % 2 == 0 {
            return None;
        }
        Some(Self::new((p.y - 1) / 2, (p.x - 1) / 2))
    }

    /// Rendered position strictly between two 4-adjacent cells.
    ///
    /// Same row gives a horizontal joint, same column a vertical one.
    #[inline]
    pub fn joint(a: Cell, b: Cell) -> Point {
        Point::new(a.col + b.col + 1, a.row + b.row + 1)
    }

    /// Whether this cell lies inside a `rows × cols` maze.
    #[inline]
    pub fn in_bounds(self, rows: i32, cols: i32) -> bool {
        self.row >= 0 && self.row < rows && self.col >= 0 && self.col < cols
    }

    /// Dense row-major index in a maze with `cols` columns.
    #[inline]
    pub fn index(self, cols: i32) -> usize {
        (self.row * cols + self.col) as usize
    }

    /// Inverse of [`index`](Cell::index).
    #[inline]
    pub fn from_index(idx: usize, cols: i32) -> Self {
        let cols = cols as usize;
        Self::new((idx / cols) as i32, (idx % cols) as i32)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}
