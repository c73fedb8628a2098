//! Maze generation: carve a spanning tree, then rasterize it onto a
//! rendered [`Grid`].

use mazer_core::{AgentId, Cell, GOAL, Grid, Point, Symbol};
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};

use crate::carve::{Carver, Edge};

/// A generated maze.
///
/// `grid` is `(2·cols + 1) × (2·rows + 1)` rendered positions. The outer
/// border is always wall and rendered (1, 1) always holds the goal.
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: Grid,
    pub rows: i32,
    pub cols: i32,
    /// Spanning-tree edges that were opened.
    pub passages: Vec<Edge>,
}

impl Maze {
    /// Rasterize a spanning tree onto a fresh all-wall grid and mark the
    /// goal.
    ///
    /// For every passage `(a, b)` the rendered cells of `a` and `b` are
    /// opened together with the joint between them.
    pub fn from_passages(rows: i32, cols: i32, passages: Vec<Edge>) -> Self {
        let grid = Grid::new(2 * cols + 1, 2 * rows + 1);
        let mut writes = Vec::with_capacity(passages.len() * 3 + 1);
        for e in &passages {
            writes.push((e.a.rendered(), Symbol::Passage));
            writes.push((e.b.rendered(), Symbol::Passage));
            writes.push((Cell::joint(e.a, e.b), Symbol::Passage));
        }
        writes.push((GOAL, Symbol::Goal));
        grid.set_many(&writes);
        Self {
            grid,
            rows,
            cols,
            passages,
        }
    }

    /// Rendered position of the goal.
    #[inline]
    pub fn goal(&self) -> Point {
        GOAL
    }

    /// Number of logical cells.
    #[inline]
    pub fn cells(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    /// Rendered positions of every logical cell except the goal's.
    pub fn start_candidates(&self) -> Vec<Point> {
        (0..self.cells())
            .map(|i| Cell::from_index(i, self.cols).rendered())
            .filter(|&p| p != GOAL)
            .collect()
    }
}

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows × cols` perfect maze with `carver`.
    ///
    /// Non-positive dimensions yield a 1×1 maze holding only the goal.
    pub fn generate(&mut self, carver: &impl Carver, rows: i32, cols: i32) -> Maze {
        let (rows, cols) = if rows <= 0 || cols <= 0 {
            log::warn!("invalid maze size {rows}x{cols}, generating 1x1");
            (1, 1)
        } else {
            (rows, cols)
        };
        let passages = carver.carve(rows, cols, &mut self.rng);
        Maze::from_passages(rows, cols, passages)
    }

    /// Choose one random start cell (never the goal) and render a
    /// `Start(agent)` marker there. `None` for a 1×1 maze.
    pub fn place_start(&mut self, maze: &Maze, agent: AgentId) -> Option<Point> {
        let candidates = maze.start_candidates();
        if candidates.is_empty() {
            return None;
        }
        let p = candidates[self.rng.random_range(0..candidates.len())];
        maze.grid.set(p, Symbol::Start(agent));
        Some(p)
    }

    /// Choose up to `n` distinct random start cells, never the goal, and
    /// render `Start(i)` on the `i`-th. Fewer than `n` are returned when the
    /// maze has fewer candidate cells.
    pub fn pick_starts(&mut self, maze: &Maze, n: usize) -> Vec<Point> {
        let mut candidates = maze.start_candidates();
        candidates.shuffle(&mut self.rng);
        candidates.truncate(n);
        let writes: Vec<(Point, Symbol)> = candidates
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, Symbol::Start(AgentId::from(i))))
            .collect();
        maze.grid.set_many(&writes);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carve::{Backtracker, Kruskal};
    use mazer_core::Snapshot;
    use mazer_paths::{MazePather, PathRange, find_path};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    // Flood fill from the goal must reach every logical cell, and the open
    // positions must form a tree: V open positions joined by V - 1
    // adjacencies.
    fn assert_perfect(maze: &Maze) {
        let snap = maze.grid.snapshot();
        assert_eq!(snap.width(), 2 * maze.cols + 1);
        assert_eq!(snap.height(), 2 * maze.rows + 1);

        let mut pr = PathRange::new(snap.bounds());
        let reached = pr.cc_map(&MazePather::new(&snap), maze.goal());
        let logical = reached
            .iter()
            .filter(|&&p| Cell::from_rendered(p).is_some())
            .count();
        assert_eq!(logical, maze.cells());

        let open: Vec<Point> = snap.iter().filter(|(_, s)| s.is_open()).map(|(p, _)| p).collect();
        assert_eq!(open.len(), reached.len());
        let adjacencies = open
            .iter()
            .map(|&p| [p.shift(1, 0), p.shift(0, 1)].iter().filter(|&&n| snap.is_open(n)).count())
            .sum::<usize>();
        assert_eq!(adjacencies, open.len() - 1);

        assert_border_intact(&snap);
    }

    fn assert_border_intact(snap: &Snapshot) {
        for (p, s) in snap.iter() {
            let border = p.x == 0 || p.y == 0 || p.x == snap.width() - 1 || p.y == snap.height() - 1;
            if border {
                assert_eq!(s, Symbol::Wall, "border breached at {p}");
            }
        }
    }

    #[test]
    fn kruskal_mazes_are_perfect() {
        for seed in 0..20 {
            let maze = seeded(seed).generate(&Kruskal::default(), 10, 20);
            assert_eq!(maze.passages.len(), 10 * 20 - 1);
            assert_perfect(&maze);
        }
    }

    #[test]
    fn backtracker_mazes_are_perfect() {
        for seed in 0..20 {
            let maze = seeded(seed).generate(&Backtracker, 8, 5);
            assert_eq!(maze.passages.len(), 8 * 5 - 1);
            assert_perfect(&maze);
        }
    }

    #[test]
    fn unique_path_between_any_two_cells() {
        let maze = seeded(11).generate(&Kruskal::default(), 4, 4);
        let snap = maze.grid.snapshot();
        let cells: Vec<Point> = (0..maze.cells())
            .map(|i| Cell::from_index(i, maze.cols).rendered())
            .collect();
        for &a in &cells {
            for &b in &cells {
                let path = find_path(&snap, a, b).expect("perfect maze is connected");
                // Removing any interior joint of the path must disconnect
                // its ends, otherwise a second route exists.
                for &cut in path.iter().filter(|&&p| Cell::from_rendered(p).is_none()) {
                    maze.grid.set(cut, Symbol::Wall);
                    assert_eq!(find_path(&maze.grid.snapshot(), a, b), None);
                    maze.grid.set(cut, Symbol::Passage);
                }
            }
        }
    }

    #[test]
    fn two_by_two_scenario() {
        for seed in 0..30 {
            let maze = seeded(seed).generate(&Kruskal::default(), 2, 2);
            assert_eq!(maze.passages.len(), 3);
            let snap = maze.grid.snapshot();
            assert_eq!((snap.width(), snap.height()), (5, 5));
            // 4 cells plus 3 open joints
            assert_eq!(snap.iter().filter(|(_, s)| s.is_open()).count(), 7);
            let path = find_path(&snap, Point::new(3, 3), Point::new(1, 1)).unwrap();
            assert!(path.len() - 1 <= 4);
        }
    }

    #[test]
    fn goal_is_always_marked() {
        let maze = seeded(2).generate(&Backtracker, 3, 3);
        assert_eq!(maze.grid.at(Point::new(1, 1)), Some(Symbol::Goal));
        assert_eq!(maze.grid.count(Symbol::Goal), 1);
    }

    #[test]
    fn invalid_dimensions_yield_goal_only_maze() {
        for (rows, cols) in [(0, 5), (5, 0), (-3, -3)] {
            let maze = seeded(0).generate(&Kruskal::default(), rows, cols);
            assert_eq!((maze.rows, maze.cols), (1, 1));
            assert!(maze.passages.is_empty());
            let snap = maze.grid.snapshot();
            assert_eq!(snap.to_text(), "###\n#Q#\n###\n");
        }
    }

    #[test]
    fn place_start_avoids_goal() {
        let mut mg = seeded(4);
        let maze = mg.generate(&Kruskal::default(), 3, 3);
        for _ in 0..20 {
            let p = mg.place_start(&maze, AgentId(0)).unwrap();
            assert_ne!(p, maze.goal());
            assert!(Cell::from_rendered(p).is_some());
            assert_eq!(maze.grid.at(p), Some(Symbol::Start(AgentId(0))));
        }

        let tiny = mg.generate(&Kruskal::default(), 1, 1);
        assert_eq!(mg.place_start(&tiny, AgentId(0)), None);
    }

    #[test]
    fn pick_starts_are_distinct_and_rendered() {
        let mut mg = seeded(8);
        let maze = mg.generate(&Kruskal::default(), 3, 4);
        let starts = mg.pick_starts(&maze, 5);
        assert_eq!(starts.len(), 5);
        for (i, &p) in starts.iter().enumerate() {
            assert_ne!(p, maze.goal());
            assert_eq!(maze.grid.at(p), Some(Symbol::Start(AgentId::from(i))));
            assert!(!starts[i + 1..].contains(&p));
        }
        // only 11 non-goal cells exist
        let maze = mg.generate(&Kruskal::default(), 3, 4);
        assert_eq!(mg.pick_starts(&maze, 50).len(), 11);
    }

    #[test]
    fn start_markers_keep_large_agent_indices() {
        let mut mg = seeded(5);
        let maze = mg.generate(&Backtracker, 1, 65_540);
        let starts = mg.pick_starts(&maze, 65_538);
        assert_eq!(starts.len(), 65_538);
        let snap = maze.grid.snapshot();
        assert_eq!(snap.at(starts[0]), Some(Symbol::Start(AgentId(0))));
        assert_eq!(snap.at(starts[65_536]), Some(Symbol::Start(AgentId(65_536))));
        assert_eq!(snap.count(Symbol::Start(AgentId(0))), 1);
    }
}
