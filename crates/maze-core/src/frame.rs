//! Character rendering of a [`Maze`] with optional path and explored overlays.
//!
//! A [`Frame`] is a row-per-line snapshot of [`Glyph`]s. It is independent of
//! how it gets displayed: `Display` writes the plain symbols, terminal
//! back-ends can style each glyph.

use std::collections::HashSet;
use std::fmt;

use crate::geom::Cell;
use crate::grid::Maze;

/// What is drawn at a single position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Wall,
    Start,
    Goal,
    /// On the solution path, excluding the endpoints.
    Path,
    /// Expanded during search but not on the path.
    Explored,
    Open,
}

impl Glyph {
    /// The fixed display symbol.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Glyph::Wall => '#',
            Glyph::Start => 'A',
            Glyph::Goal => 'B',
            Glyph::Path => '*',
            Glyph::Explored => '.',
            Glyph::Open => ' ',
        }
    }
}

/// Rendering switches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Mark explored cells with [`Glyph::Explored`].
    pub show_explored: bool,
}

/// A rendered maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<Vec<Glyph>>,
}

impl Frame {
    /// Render `maze` with no overlays.
    pub fn new(maze: &Maze) -> Self {
        Self::render(maze, None, None, RenderOptions::default())
    }

    /// Render `maze`, marking the cells of `path` and, when
    /// `options.show_explored` is set, the cells of `explored`.
    pub fn render(
        maze: &Maze,
        path: Option<&[Cell]>,
        explored: Option<&[Cell]>,
        options: RenderOptions,
    ) -> Self {
        let path: HashSet<Cell> = path.unwrap_or_default().iter().copied().collect();
        let explored: HashSet<Cell> = if options.show_explored {
            explored.unwrap_or_default().iter().copied().collect()
        } else {
            HashSet::new()
        };

        // `Maze` guarantees every index fits an `i32`.
        let rows = (0..)
            .zip(maze.rows())
            .map(|(i, row)| {
                (0..)
                    .zip(row.iter())
                    .map(|(j, &wall)| {
                        let cell = Cell::new(i, j);
                        if wall {
                            Glyph::Wall
                        } else if cell == maze.start() {
                            Glyph::Start
                        } else if cell == maze.goal() {
                            Glyph::Goal
                        } else if path.contains(&cell) {
                            Glyph::Path
                        } else if explored.contains(&cell) {
                            Glyph::Explored
                        } else {
                            Glyph::Open
                        }
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Glyph at `cell`, or `None` if out of bounds.
    pub fn at(&self, cell: Cell) -> Option<Glyph> {
        if !cell.is_non_negative() {
            return None;
        }
        self.rows
            .get(cell.row as usize)
            .and_then(|r| r.get(cell.col as usize))
            .copied()
    }

    /// Iterate over rows of glyphs, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Count glyphs of one kind.
    pub fn count(&self, glyph: Glyph) -> usize {
        self.rows.iter().flatten().filter(|&&g| g == glyph).count()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for g in row {
                write!(f, "{}", g.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
