//! Progress notifications sent by agents while they run.

use mazer_core::{AgentId, Point};

/// One step of an agent's progress.
///
/// Agents send these over an optional `std::sync::mpsc::Sender`; by the
/// time a receiver sees an event, the matching grid write has already
/// happened, so a renderer can snapshot the grid on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentEvent {
    /// The agent found a path and is about to walk it.
    Started { agent: AgentId, start: Point },
    /// The agent entered `pos` on step `step` (1-based).
    Moved { agent: AgentId, pos: Point, step: usize },
    /// The agent reached the goal after `steps` moves.
    Arrived { agent: AgentId, steps: usize },
    /// No route to the goal exists from the agent's start.
    Unreachable { agent: AgentId },
}

impl AgentEvent {
    /// The agent the event is about.
    pub fn agent(&self) -> AgentId {
        match *self {
            AgentEvent::Started { agent, .. }
            | AgentEvent::Moved { agent, .. }
            | AgentEvent::Arrived { agent, .. }
            | AgentEvent::Unreachable { agent } => agent,
        }
    }

    /// Whether this is the agent's last event.
    pub fn is_final(&self) -> bool {
        matches!(self, AgentEvent::Arrived { .. } | AgentEvent::Unreachable { .. })
    }
}
