use thiserror::Error;

/// Search failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `remove` was called on an empty frontier.
    #[error("empty frontier")]
    EmptyFrontier,

    /// The frontier ran dry before the goal was reached.
    #[error("no solution: goal is unreachable ({explored} states explored)")]
    NoSolution { explored: usize },
}

pub type Result<T> = std::result::Result<T, SearchError>;
