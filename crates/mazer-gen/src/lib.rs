//! Perfect-maze generation.
//!
//! A [`Carver`] picks the spanning tree ([`Kruskal`] over random edge
//! weights with a [`UnionFind`], or the depth-first [`Backtracker`]) and
//! [`MazeGen`] rasterizes it onto a rendered grid, marks the goal and
//! places start markers.

pub mod carve;
pub mod mapgen;
pub mod unionfind;

pub use carve::{Backtracker, Carver, Edge, Kruskal, Strategy, dual_graph};
pub use mapgen::{Maze, MazeGen};
pub use unionfind::UnionFind;
