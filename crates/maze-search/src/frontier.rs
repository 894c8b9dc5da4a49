//! Pending-node collections and their removal disciplines.
//!
//! [`StackFrontier`] and [`QueueFrontier`] share the [`Frontier`] interface
//! but no removal logic. Both keep a state-count index next to the ordered
//! storage so [`Frontier::contains_state`] is a hash lookup instead of a scan.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use maze_core::Cell;
use thiserror::Error;

use crate::error::{Result, SearchError};
use crate::node::NodeRef;

/// An ordered collection of nodes waiting to be expanded.
pub trait Frontier {
    /// Insert a node.
    fn add(&mut self, node: NodeRef);

    /// Evict and return the next node according to the discipline.
    ///
    /// Fails with [`SearchError::EmptyFrontier`] when there is nothing left.
    fn remove(&mut self) -> Result<NodeRef>;

    /// Whether no nodes are pending.
    fn is_empty(&self) -> bool;

    /// Whether some pending node has the given state.
    fn contains_state(&self, state: Cell) -> bool;

    /// Number of pending nodes.
    fn len(&self) -> usize;
}

// ---------------------------------------------------------------------------
// State index shared by both frontiers
// ---------------------------------------------------------------------------

/// Multiset of states, updated in lock-step with the ordered storage.
#[derive(Debug, Default)]
struct StateIndex {
    counts: HashMap<Cell, usize>,
}

impl StateIndex {
    fn insert(&mut self, state: Cell) {
        *self.counts.entry(state).or_insert(0) += 1;
    }

    fn remove(&mut self, state: Cell) {
        if let Entry::Occupied(mut e) = self.counts.entry(state) {
            *e.get_mut() -= 1;
            if *e.get() == 0 {
                e.remove();
            }
        }
    }

    fn contains(&self, state: Cell) -> bool {
        self.counts.contains_key(&state)
    }
}

// ---------------------------------------------------------------------------
// StackFrontier
// ---------------------------------------------------------------------------

/// Last-in first-out frontier. Drives a depth-first search.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<NodeRef>,
    index: StateIndex,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: NodeRef) {
        self.index.insert(node.state);
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Result<NodeRef> {
        let node = self.nodes.pop().ok_or(SearchError::EmptyFrontier)?;
        self.index.remove(node.state);
        Ok(node)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn contains_state(&self, state: Cell) -> bool {
        self.index.contains(state)
    }

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

// ---------------------------------------------------------------------------
// QueueFrontier
// ---------------------------------------------------------------------------

/// First-in first-out frontier. Drives a breadth-first search, so the first
/// goal removed is reached by the fewest actions.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<NodeRef>,
    index: StateIndex,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: NodeRef) {
        self.index.insert(node.state);
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Result<NodeRef> {
        let node = self.nodes.pop_front().ok_or(SearchError::EmptyFrontier)?;
        self.index.remove(node.state);
        Ok(node)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn contains_state(&self, state: Cell) -> bool {
        self.index.contains(state)
    }

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

// ---------------------------------------------------------------------------
// Discipline
// ---------------------------------------------------------------------------

/// Selects which frontier a search run uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Discipline {
    /// Stack: depth-first.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "stack", alias = "dfs"))]
    Lifo,
    /// Queue: breadth-first.
    #[cfg_attr(feature = "serde", serde(alias = "queue", alias = "bfs"))]
    Fifo,
}

impl Discipline {
    pub const fn as_str(self) -> &'static str {
        match self {
            Discipline::Lifo => "lifo",
            Discipline::Fifo => "fifo",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown discipline name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown frontier discipline {0:?} (expected lifo/stack/dfs or fifo/queue/bfs)")]
pub struct ParseDisciplineError(String);

impl FromStr for Discipline {
    type Err = ParseDisciplineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lifo" | "stack" | "dfs" => Ok(Discipline::Lifo),
            "fifo" | "queue" | "bfs" => Ok(Discipline::Fifo),
            _ => Err(ParseDisciplineError(s.to_string())),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn discipline_round_trip() {
        let json = serde_json::to_string(&Discipline::Fifo).unwrap();
        assert_eq!(json, "\"fifo\"");
        let back: Discipline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Discipline::Fifo);
    }

    #[test]
    fn discipline_accepts_the_same_aliases_as_from_str() {
        for (name, want) in [
            ("stack", Discipline::Lifo),
            ("dfs", Discipline::Lifo),
            ("queue", Discipline::Fifo),
            ("bfs", Discipline::Fifo),
        ] {
            let json = format!("\"{name}\"");
            let back: Discipline = serde_json::from_str(&json).unwrap();
            assert_eq!(back, want);
            assert_eq!(name.parse::<Discipline>().unwrap(), want);
        }
        assert!(serde_json::from_str::<Discipline>("\"astar\"").is_err());
    }
}
