use maze_core::{Action, Cell};

/// What the search engine needs from a maze: two endpoints and successor
/// enumeration.
pub trait SearchProblem {
    /// Cell the search starts from.
    fn start(&self) -> Cell;

    /// Cell the search is looking for.
    fn goal(&self) -> Cell;

    /// Append the `(action, cell)` successors of `cell` into `buf`, in a
    /// fixed order. The caller clears `buf` before calling.
    fn neighbors(&self, cell: Cell, buf: &mut Vec<(Action, Cell)>);
}
