//! Concurrent maze solving.
//!
//! A [`MazeSession`] generates one maze, renders a start marker per agent
//! and hands each start to an [`AgentRunner`] on its own thread. Runners
//! search privately and share only the maze's grid buffer, into which they
//! burn their trails; the session joins them all and returns the final
//! grid.

pub mod events;
pub mod runner;
pub mod session;

pub use events::AgentEvent;
pub use runner::{AgentOutcome, AgentRunner};
pub use session::{MazeSession, SessionConfig, SessionError, SessionReport, solve};
