//! The occupancy grid parsed from maze text.
//!
//! A [`Maze`] is built once from text and never changes afterwards. Rows
//! keep the length of their source line, so the grid may be ragged.

use crate::error::{Malformed, MazeError, Result};
use crate::geom::Cell;
use crate::markers::{Markers, Tile};

/// Cell for line `row`, character `col` of the source text.
fn cell_at(row: usize, col: usize) -> Result<Cell> {
    match (i32::try_from(row), i32::try_from(col)) {
        (Ok(r), Ok(c)) => Ok(Cell::new(r, c)),
        _ => Err(MazeError::TooLarge { row, col }),
    }
}

/// Walls plus the start and goal cells of one maze.
///
/// Every row index and column index fits an `i32`; text with more lines or
/// longer lines is rejected with [`MazeError::TooLarge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    walls: Vec<Vec<bool>>,
    start: Cell,
    goal: Cell,
}

impl Maze {
    /// Parse maze text using the default [`Markers`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &Markers::default())
    }

    /// Parse maze text using a custom marker set.
    ///
    /// The start and goal markers must each appear exactly once in the
    /// whole text. Lines are split on `\n` (a trailing `\r` is dropped) and
    /// are not padded.
    pub fn parse_with(text: &str, markers: &Markers) -> Result<Self> {
        markers.validate()?;

        let starts = text.chars().filter(|&c| c == markers.start).count();
        match starts {
            0 => return Err(Malformed::MissingStart.into()),
            1 => {}
            n => return Err(Malformed::MultipleStarts(n).into()),
        }
        let goals = text.chars().filter(|&c| c == markers.goal).count();
        match goals {
            0 => return Err(Malformed::MissingGoal.into()),
            1 => {}
            n => return Err(Malformed::MultipleGoals(n).into()),
        }

        let mut walls = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (i, line) in text.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (j, ch) in line.chars().enumerate() {
                let cell = cell_at(i, j)?;
                match markers.classify(ch) {
                    Tile::Start => {
                        start = Some(cell);
                        row.push(false);
                    }
                    Tile::Goal => {
                        goal = Some(cell);
                        row.push(false);
                    }
                    Tile::Open => row.push(false),
                    Tile::Wall => row.push(true),
                }
            }
            walls.push(row);
        }

        // The counts above guarantee both markers were seen; these only
        // trip if a marker is a line-break character.
        let start = start.ok_or(MazeError::Malformed(Malformed::MissingStart))?;
        let goal = goal.ok_or(MazeError::Malformed(Malformed::MissingGoal))?;

        log::debug!(
            "parsed maze: {} rows, widest {}, start {start}, goal {goal}",
            walls.len(),
            walls.iter().map(Vec::len).max().unwrap_or(0)
        );

        Ok(Self { walls, start, goal })
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.walls.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.walls.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Length of a single row, or `None` past the last row.
    #[inline]
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.walls.get(row).map(Vec::len)
    }

    /// Whether `cell` lies inside the grid. Both the row count and the
    /// length of that particular row are checked.
    pub fn contains(&self, cell: Cell) -> bool {
        if !cell.is_non_negative() {
            return false;
        }
        match self.row_len(cell.row as usize) {
            Some(len) => (cell.col as usize) < len,
            None => false,
        }
    }

    /// Wall flag at `cell`, or `None` if out of bounds.
    pub fn wall_at(&self, cell: Cell) -> Option<bool> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.walls[cell.row as usize][cell.col as usize])
    }

    /// Whether `cell` is a wall. Out-of-bounds cells count as walls.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.wall_at(cell).unwrap_or(true)
    }

    /// Whether `cell` is in bounds and open.
    #[inline]
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.wall_at(cell) == Some(false)
    }

    /// Iterate over rows of wall flags, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.walls.iter().map(Vec::as_slice)
    }
}
