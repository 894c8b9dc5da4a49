//! Geometry primitives: [`Cell`] and [`Action`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward through the maze
//! text, columns grow rightward along a line.

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. Signed so that candidate neighbours of edge cells can
/// be represented before they are rejected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The cell reached from `self` by taking `action`.
    #[inline]
    pub const fn step(self, action: Action) -> Self {
        let (drow, dcol) = action.delta();
        self.shift(drow, dcol)
    }

    /// Whether both components are non-negative.
    #[inline]
    pub const fn is_non_negative(self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    /// Whether `other` is exactly one axis step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// The four candidate neighbours in emission order, paired with the
    /// action that reaches them. Bounds and walls are not checked.
    #[inline]
    pub fn candidates(self) -> [(Action, Cell); 4] {
        Action::ALL.map(|a| (a, self.step(a)))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A move between two adjacent cells.
///
/// The labels follow the maze format's historical naming: `Left`/`Right`
/// change the row, `Down`/`Up` change the column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    /// `(row - 1, col)`
    Left,
    /// `(row + 1, col)`
    Right,
    /// `(row, col - 1)`
    Down,
    /// `(row, col + 1)`
    Up,
}

impl Action {
    /// Every action, in neighbour emission order. Search tie-breaking
    /// depends on this order.
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Down, Action::Up];

    /// `(drow, dcol)` offset applied by this action.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
            Action::Down => (0, -1),
            Action::Up => (0, 1),
        }
    }

    /// Lowercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Down => "down",
            Action::Up => "up",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn action_uses_lowercase_labels() {
        let json = serde_json::to_string(&Action::Left).unwrap();
        assert_eq!(json, "\"left\"");
        let back: Action = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(back, Action::Up);
    }

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(4, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
