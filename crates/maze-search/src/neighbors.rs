use maze_core::{Action, Cell, Maze};

use crate::traits::SearchProblem;

impl SearchProblem for Maze {
    #[inline]
    fn start(&self) -> Cell {
        Maze::start(self)
    }

    #[inline]
    fn goal(&self) -> Cell {
        Maze::goal(self)
    }

    /// Emits in [`Action::ALL`] order, skipping walls and anything outside
    /// the row count or the length of the target row.
    fn neighbors(&self, cell: Cell, buf: &mut Vec<(Action, Cell)>) {
        for (action, n) in cell.candidates() {
            if self.is_passable(n) {
                buf.push((action, n));
            }
        }
    }
}
