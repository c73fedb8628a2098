//! [`MazeSession`]: generate one maze, then race agents across it.

use std::fmt;
use std::sync::mpsc::Sender;
use std::time::Duration;

use mazer_core::{AgentId, Grid, Point};
use mazer_gen::{Maze, MazeGen, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::events::AgentEvent;
use crate::runner::{AgentOutcome, AgentRunner};

/// Configuration for a [`MazeSession`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Logical rows.
    pub rows: i32,
    /// Logical columns.
    pub cols: i32,
    /// Number of concurrent agents, each on its own start cell.
    pub agents: usize,
    pub strategy: Strategy,
    /// Pause after every agent step; zero runs flat out.
    pub step_delay: Duration,
    /// Seed for reproducible mazes and start cells.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 20,
            agents: 1,
            strategy: Strategy::default(),
            step_delay: Duration::ZERO,
            seed: None,
        }
    }
}

/// Errors that can occur while running a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// More agents than there are cells besides the goal.
    TooManyAgents { requested: usize, available: usize },
    /// An agent's thread panicked before reporting.
    AgentPanicked(AgentId),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyAgents {
                requested,
                available,
            } => write!(
                f,
                "session: {requested} agents requested but only {available} start cells exist"
            ),
            Self::AgentPanicked(agent) => write!(f, "session: {agent} panicked"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Final state of a session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// The maze with every agent's markers burned in.
    pub grid: Grid,
    /// One outcome per agent, in agent order.
    pub outcomes: Vec<AgentOutcome>,
}

/// Owns the generator and runs whole sessions: generate, place starts,
/// solve concurrently, report.
pub struct MazeSession<R: Rng> {
    config: SessionConfig,
    mazes: MazeGen<R>,
}

impl MazeSession<StdRng> {
    /// Session seeded from `config.seed`, or from fresh entropy.
    pub fn from_config(config: SessionConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeSession<R> {
    pub fn new(config: SessionConfig, rng: R) -> Self {
        Self {
            config,
            mazes: MazeGen::new(rng),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Generate a maze and render every agent's start marker on it.
    ///
    /// Agent `i` starts at the `i`-th returned point. Nothing has been
    /// searched yet when this returns.
    pub fn prepare(&mut self) -> Result<(Maze, Vec<Point>), SessionError> {
        let c = &self.config;
        let maze = self.mazes.generate(&c.strategy, c.rows, c.cols);
        let available = maze.cells() - 1;
        if c.agents > available {
            return Err(SessionError::TooManyAgents {
                requested: c.agents,
                available,
            });
        }
        let starts = self.mazes.pick_starts(&maze, c.agents);
        Ok((maze, starts))
    }

    /// Run a whole session without progress events.
    pub fn run(&mut self) -> Result<SessionReport, SessionError> {
        self.run_with(None)
    }

    /// Run a whole session, reporting agent progress through `events`.
    pub fn run_observed(&mut self, events: Sender<AgentEvent>) -> Result<SessionReport, SessionError> {
        self.run_with(Some(events))
    }

    fn run_with(&mut self, events: Option<Sender<AgentEvent>>) -> Result<SessionReport, SessionError> {
        let (maze, starts) = self.prepare()?;
        let outcomes = solve(&maze, &starts, &self.config, events)?;
        Ok(SessionReport {
            grid: maze.grid,
            outcomes,
        })
    }
}

/// Run one [`AgentRunner`] per start on its own thread and wait for all of
/// them.
///
/// Runners share `maze.grid` and nothing else. The join is the only
/// synchronization point: every thread is joined even if an earlier one
/// panicked, and the first panic is reported.
pub fn solve(
    maze: &Maze,
    starts: &[Point],
    config: &SessionConfig,
    events: Option<Sender<AgentEvent>>,
) -> Result<Vec<AgentOutcome>, SessionError> {
    log::info!(
        "solving {}x{} maze with {} agent(s)",
        maze.rows,
        maze.cols,
        starts.len()
    );
    let goal = maze.goal();

    let results: Vec<Result<AgentOutcome, SessionError>> = std::thread::scope(|s| {
        let handles: Vec<_> = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let id = AgentId::from(i);
                let runner = AgentRunner::new(id, start, goal, maze.grid.clone())
                    .with_step_delay(config.step_delay)
                    .with_events(events.clone());
                (id, s.spawn(move || runner.run()))
            })
            .collect();

        handles
            .into_iter()
            .map(|(id, h)| h.join().map_err(|_| SessionError::AgentPanicked(id)))
            .collect()
    });

    let outcomes = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    let arrived = outcomes.iter().filter(|o| o.path.is_some()).count();
    log::info!("{arrived}/{} agent(s) reached the goal", outcomes.len());
    Ok(outcomes)
}
