//! Spanning-tree carvers.
//!
//! A [`Carver`] decides which walls of a `rows × cols` maze come down by
//! returning the edges of a spanning tree over the maze's dual graph.
//! Two carvers are provided:
//! - [`Kruskal`]: random edge weights, minimum spanning tree via
//!   [`UnionFind`].
//! - [`Backtracker`]: depth-first carving with an explicit stack.

use mazer_core::Cell;
use rand::{Rng, RngExt};

use crate::unionfind::UnionFind;

/// An undirected passage between two 4-adjacent logical cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: Cell,
    pub b: Cell,
    pub weight: u32,
}

/// Strategy producing the spanning tree of a maze.
pub trait Carver {
    /// Return the accepted edges. For `rows·cols` cells there must be
    /// exactly `rows·cols − 1` of them, forming a tree.
    fn carve(&self, rows: i32, cols: i32, rng: &mut impl Rng) -> Vec<Edge>;
}

/// Every 4-adjacent pair of cells in a `rows × cols` maze, each unordered
/// pair exactly once, in row-major order of the first cell.
pub fn dual_graph(rows: i32, cols: i32) -> Vec<(Cell, Cell)> {
    let mut pairs = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let cell = Cell::new(row, col);
            // Up and left were already paired from the other side.
            let neighbors = [Cell::new(row + 1, col), Cell::new(row, col + 1)];
            for n in neighbors {
                if n.in_bounds(rows, cols) {
                    pairs.push((cell, n));
                }
            }
        }
    }
    pairs
}

// ---------------------------------------------------------------------------
// Kruskal
// ---------------------------------------------------------------------------

/// Minimum spanning tree over uniformly random edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kruskal {
    /// Weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
}

impl Default for Kruskal {
    fn default() -> Self {
        Self { max_weight: 100 }
    }
}

impl Carver for Kruskal {
    fn carve(&self, rows: i32, cols: i32, rng: &mut impl Rng) -> Vec<Edge> {
        let max_weight = self.max_weight.max(1);
        let mut edges: Vec<Edge> = dual_graph(rows, cols)
            .into_iter()
            .map(|(a, b)| Edge {
                a,
                b,
                weight: rng.random_range(1..=max_weight),
            })
            .collect();
        edges.sort_by_key(|e| e.weight);

        let cells = (rows.max(0) * cols.max(0)) as usize;
        let mut clusters = UnionFind::new(cells);
        let mut tree = Vec::with_capacity(cells.saturating_sub(1));
        for e in &edges {
            let ra = clusters.find(e.a.index(cols));
            let rb = clusters.find(e.b.index(cols));
            if ra != rb {
                clusters.union(ra, rb);
                tree.push(*e);
            }
        }

        log::debug!(
            "kruskal {rows}x{cols}: {} candidate edges, {} accepted",
            edges.len(),
            tree.len()
        );
        tree
    }
}

// ---------------------------------------------------------------------------
// Backtracker
// ---------------------------------------------------------------------------

/// Depth-first carving from a random cell.
///
/// Uses an explicit stack and a dense `visited` vector, so stack depth is
/// bounded by the heap rather than the call stack. Edge weights record the
/// carving order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Backtracker;

impl Carver for Backtracker {
    fn carve(&self, rows: i32, cols: i32, rng: &mut impl Rng) -> Vec<Edge> {
        if rows <= 0 || cols <= 0 {
            return Vec::new();
        }
        let cells = (rows * cols) as usize;
        let mut visited = vec![false; cells];
        let mut tree = Vec::with_capacity(cells - 1);

        let first = Cell::from_index(rng.random_range(0..cells), cols);
        visited[first.index(cols)] = true;
        let mut stack = vec![first];
        let mut options = Vec::with_capacity(4);

        while let Some(&cur) = stack.last() {
            options.clear();
            let around = [
                Cell::new(cur.row - 1, cur.col),
                Cell::new(cur.row + 1, cur.col),
                Cell::new(cur.row, cur.col - 1),
                Cell::new(cur.row, cur.col + 1),
            ];
            options.extend(
                around
                    .into_iter()
                    .filter(|n| n.in_bounds(rows, cols) && !visited[n.index(cols)]),
            );

            if options.is_empty() {
                stack.pop();
                continue;
            }
            let next = options[rng.random_range(0..options.len())];
            visited[next.index(cols)] = true;
            tree.push(Edge {
                a: cur,
                b: next,
                weight: tree.len() as u32,
            });
            stack.push(next);
        }

        log::debug!("backtracker {rows}x{cols}: {} edges carved", tree.len());
        tree
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Carver chosen at runtime, e.g. from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Kruskal(Kruskal),
    Backtracker,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Kruskal(Kruskal::default())
    }
}

impl Carver for Strategy {
    fn carve(&self, rows: i32, cols: i32, rng: &mut impl Rng) -> Vec<Edge> {
        match self {
            Strategy::Kruskal(k) => k.carve(rows, cols, rng),
            Strategy::Backtracker => Backtracker.carve(rows, cols, rng),
        }
    }
}
