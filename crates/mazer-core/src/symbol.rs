//! The [`Symbol`] stored at each rendered grid position.

use std::fmt;

/// Index of a solving agent, used to tag the markers it writes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub usize);

impl AgentId {
    /// The agent index as a `usize`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Single-character label: `0-9` then `a-z`, wrapping after 36 agents.
    pub fn label(self) -> char {
        char::from_digit((self.0 % 36) as u32, 36).unwrap_or('?')
    }
}

impl From<usize> for AgentId {
    fn from(i: usize) -> Self {
        Self(i)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent {}", self.0)
    }
}

/// Content of one rendered grid position.
///
/// Only [`Symbol::Wall`] blocks movement; every marker is walkable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    #[default]
    Wall,
    Passage,
    Goal,
    /// Where an agent began.
    Start(AgentId),
    /// A cell an agent has walked through.
    Trail(AgentId),
    /// An agent's current position.
    Agent(AgentId),
}

impl Symbol {
    /// Whether the position can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, Symbol::Wall)
    }

    /// The agent that wrote this marker, if any.
    #[inline]
    pub const fn agent(self) -> Option<AgentId> {
        match self {
            Symbol::Start(a) | Symbol::Trail(a) | Symbol::Agent(a) => Some(a),
            _ => None,
        }
    }

    /// Character used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Symbol::Wall => '#',
            Symbol::Passage => ' ',
            Symbol::Goal => 'Q',
            Symbol::Start(_) => 'S',
            Symbol::Trail(_) => '*',
            Symbol::Agent(a) => a.label(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        let s = Symbol::Trail(AgentId(4));
        let json = serde_json::to_string(&s).unwrap();
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
