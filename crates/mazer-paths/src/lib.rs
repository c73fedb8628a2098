//! Pathfinding over rendered maze grids.
//!
//! - **A\*** shortest-path search ([`PathRange::astar_path`], [`find_path`])
//! - **BFS** unit-cost distance maps and paths ([`PathRange::bfs_map`],
//!   [`PathRange::bfs_path`])
//! - **Connected Components** labelling ([`PathRange::cc_map_all`],
//!   [`PathRange::cc_map`])
//!
//! All algorithms operate through [`PathRange`], which owns and reuses its
//! bookkeeping so that repeated queries incur zero allocations after
//! warm-up. [`MazePather`] adapts a [`mazer_core::Snapshot`] to the traits.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, connected components |
//! | [`WeightedPather`] : [`Pather`] | (edge costs) |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod cc;
mod distance;
mod pather;
mod pathrange;
mod traits;

pub use astar::find_path;
pub use distance::manhattan;
pub use pather::{MazePather, is_walkable};
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
