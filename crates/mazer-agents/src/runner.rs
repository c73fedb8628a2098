//! [`AgentRunner`]: one independently scheduled solver.

use std::sync::mpsc::Sender;
use std::time::Duration;

use mazer_core::{AgentId, Grid, Point, Symbol};
use mazer_paths::{MazePather, PathRange};

use crate::events::AgentEvent;

/// Result of one agent's run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOutcome {
    pub agent: AgentId,
    pub start: Point,
    /// Start to goal inclusive, or `None` if the goal was unreachable.
    pub path: Option<Vec<Point>>,
}

/// Searches from one start to the shared goal, then walks the path,
/// burning its markers into the shared grid.
///
/// All search bookkeeping lives in the runner's own [`PathRange`]; the
/// only shared state is the [`Grid`] buffer.
pub struct AgentRunner {
    id: AgentId,
    start: Point,
    goal: Point,
    grid: Grid,
    paths: PathRange,
    step_delay: Duration,
    events: Option<Sender<AgentEvent>>,
}

impl AgentRunner {
    /// Create a runner for agent `id` on `grid`.
    pub fn new(id: AgentId, start: Point, goal: Point, grid: Grid) -> Self {
        let paths = PathRange::new(grid.bounds());
        Self {
            id,
            start,
            goal,
            grid,
            paths,
            step_delay: Duration::ZERO,
            events: None,
        }
    }

    /// Pause between steps so intermediate states can be watched.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Report progress through `events`.
    pub fn with_events(mut self, events: Option<Sender<AgentEvent>>) -> Self {
        self.events = events;
        self
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Shortest path from the runner's start to the goal on the grid as it
    /// is right now.
    pub fn search(&mut self) -> Option<Vec<Point>> {
        let snapshot = self.grid.snapshot();
        self.paths
            .astar_path(&MazePather::new(&snapshot), self.start, self.goal)
    }

    /// Walk `path`, marking the shared grid step by step.
    ///
    /// Leaving the first cell leaves `Start`, leaving any later cell leaves
    /// `Trail`, and the cell entered shows `Agent` unless it is the goal.
    /// Both writes of a step happen under one lock.
    pub fn walk(&self, path: &[Point]) {
        for (step, pair) in path.windows(2).enumerate() {
            let (prev, pos) = (pair[0], pair[1]);
            let left = if step == 0 {
                Symbol::Start(self.id)
            } else {
                Symbol::Trail(self.id)
            };
            if pos == self.goal {
                self.grid.set(prev, left);
            } else {
                self.grid.set_many(&[(prev, left), (pos, Symbol::Agent(self.id))]);
            }
            self.emit(AgentEvent::Moved {
                agent: self.id,
                pos,
                step: step + 1,
            });
            if !self.step_delay.is_zero() {
                std::thread::sleep(self.step_delay);
            }
        }
    }

    /// Search, then walk. Consumes the runner.
    pub fn run(mut self) -> AgentOutcome {
        let path = self.search();
        match &path {
            Some(p) => {
                self.emit(AgentEvent::Started {
                    agent: self.id,
                    start: self.start,
                });
                self.walk(p);
                let steps = p.len() - 1;
                log::info!("{} reached the goal in {steps} steps", self.id);
                self.emit(AgentEvent::Arrived {
                    agent: self.id,
                    steps,
                });
            }
            None => {
                log::warn!("{}: goal unreachable from {}", self.id, self.start);
                self.emit(AgentEvent::Unreachable { agent: self.id });
            }
        }
        AgentOutcome {
            agent: self.id,
            start: self.start,
            path,
        }
    }

    // A dropped receiver only means nobody is watching.
    fn emit(&self, event: AgentEvent) {
        if let Some(tx) = &self.events {
            tx.send(event).ok();
        }
    }
}
