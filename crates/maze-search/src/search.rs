//! The generic graph-search loop.

use std::collections::HashSet;

use maze_core::{Action, Cell};

use crate::error::{Result, SearchError};
use crate::frontier::{Discipline, Frontier, QueueFrontier, StackFrontier};
use crate::node::{Node, NodeArena};
use crate::traits::SearchProblem;

/// The moves from start to goal.
///
/// `cells[i]` is the cell reached by `actions[i]`. The start cell is not
/// included; the goal is the last cell. Both are empty when start == goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub actions: Vec<Action>,
    pub cells: Vec<Cell>,
}

impl Solution {
    /// Number of actions.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Result of one successful search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    pub solution: Solution,
    /// Expanded cells, in expansion order.
    pub explored: Vec<Cell>,
}

impl Search {
    /// Number of expanded states.
    #[inline]
    pub fn num_explored(&self) -> usize {
        self.explored.len()
    }
}

/// Search `problem` with a fresh frontier of type `F`.
///
/// The frontier is built here, so it only ever holds nodes of this run's
/// arena. Nodes are goal-tested when removed and marked explored when
/// expanded. A successor is only added if its state is neither explored nor
/// already pending, so every cell is expanded at most once.
pub fn solve<P, F>(problem: &P) -> Result<Search>
where
    P: SearchProblem + ?Sized,
    F: Frontier + Default,
{
    let goal = problem.goal();
    let mut arena = NodeArena::new();
    let mut frontier = F::default();
    frontier.add(arena.push(Node::root(problem.start())));

    let mut explored: HashSet<Cell> = HashSet::new();
    let mut order: Vec<Cell> = Vec::new();
    let mut nbuf: Vec<(Action, Cell)> = Vec::with_capacity(4);

    loop {
        if frontier.is_empty() {
            log::debug!("frontier exhausted after {} expansions", order.len());
            return Err(SearchError::NoSolution {
                explored: order.len(),
            });
        }

        let current = frontier.remove()?;

        if current.state == goal {
            let (actions, cells) = arena.path_to(current.id);
            log::debug!(
                "reached goal {goal} in {} actions, {} states explored, {} nodes allocated",
                actions.len(),
                order.len(),
                arena.len()
            );
            return Ok(Search {
                solution: Solution { actions, cells },
                explored: order,
            });
        }

        explored.insert(current.state);
        order.push(current.state);
        log::trace!("expand {} (frontier {})", current.state, frontier.len());

        nbuf.clear();
        problem.neighbors(current.state, &mut nbuf);

        for &(action, state) in nbuf.iter() {
            if explored.contains(&state) || frontier.contains_state(state) {
                continue;
            }
            frontier.add(arena.push(Node::child(state, current.id, action)));
        }
    }
}

/// Search `problem` with a fresh frontier of the given discipline.
pub fn solve_with<P>(problem: &P, discipline: Discipline) -> Result<Search>
where
    P: SearchProblem + ?Sized,
{
    log::debug!("solving with {discipline} frontier");
    match discipline {
        Discipline::Lifo => solve::<_, StackFrontier>(problem),
        Discipline::Fifo => solve::<_, QueueFrontier>(problem),
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn solution_round_trip() {
        let s = Solution {
            actions: vec![Action::Up, Action::Right],
            cells: vec![Cell::new(0, 1), Cell::new(1, 1)],
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
