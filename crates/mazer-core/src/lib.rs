//! **mazer-core**: core types shared by the maze crates.
//!
//! This crate provides geometry primitives, the logical [`Cell`] and its
//! mapping onto the doubled-resolution rendered grid, the [`Symbol`] stored
//! in each rendered position, and the thread-safe shared [`Grid`] buffer
//! that generators fill in and concurrent solvers annotate.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod symbol;

pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::{Frame, FrameCell, Grid, Snapshot, compute_frame};
pub use symbol::{AgentId, Symbol};

/// Rendered position of the goal. Logical cell (0, 0) always holds it.
pub const GOAL: Point = Point::new(1, 1);
