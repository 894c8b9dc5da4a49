use thiserror::Error;

/// Which start/goal invariant a maze text violates.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    #[error("maze must have exactly one start point, found none")]
    MissingStart,

    #[error("maze must have exactly one start point, found {0}")]
    MultipleStarts(usize),

    #[error("maze must have exactly one goal, found none")]
    MissingGoal,

    #[error("maze must have exactly one goal, found {0}")]
    MultipleGoals(usize),
}

/// Errors raised while building a [`Maze`](crate::Maze).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("malformed maze: {0}")]
    Malformed(#[from] Malformed),

    /// Two of the start/goal/open markers are the same character.
    #[error("marker {0:?} is assigned to more than one role")]
    DuplicateMarker(char),

    /// A line index or column index does not fit a [`Cell`](crate::Cell)
    /// coordinate.
    #[error("maze too large: position ({row}, {col}) exceeds the coordinate range")]
    TooLarge { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
