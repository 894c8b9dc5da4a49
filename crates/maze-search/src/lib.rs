//! Uninformed graph search over maze grids.
//!
//! One generic loop ([`solve`]) expands nodes from a frontier type it builds
//! fresh for every run (any [`Frontier`] that is `Default`):
//!
//! - [`StackFrontier`] (last-in first-out) gives depth-first search
//! - [`QueueFrontier`] (first-in first-out) gives breadth-first search, whose
//!   first solution uses the fewest actions
//!
//! Nodes live in a per-run [`NodeArena`] and point at their parent by index.
//! Every run owns its frontier, arena and explored set, and returns them
//! (the explored cells at least) as part of the [`Search`] result instead of
//! storing them on the maze.
//!
//! # Problem interface
//!
//! | Trait | Provides |
//! |---|---|
//! | [`SearchProblem`] | start, goal, successor enumeration |
//!
//! [`maze_core::Maze`] implements [`SearchProblem`] with the four axis moves.

mod error;
mod frontier;
mod neighbors;
mod node;
mod search;
mod traits;

pub use error::SearchError;
pub use frontier::{Discipline, Frontier, ParseDisciplineError, QueueFrontier, StackFrontier};
pub use node::{Node, NodeArena, NodeId, NodeRef};
pub use search::{Search, Solution, solve, solve_with};
pub use traits::SearchProblem;
