//! The characters that carry meaning in maze text.

use crate::error::{MazeError, Result};

/// Start, goal and open-space characters. Anything else is a wall.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Markers {
    pub start: char,
    pub goal: char,
    pub open: char,
}

impl Markers {
    /// `A` start, `B` goal, space open.
    pub const DEFAULT: Self = Self {
        start: 'A',
        goal: 'B',
        open: ' ',
    };

    /// Reject marker sets where two roles share a character.
    pub fn validate(&self) -> Result<()> {
        if self.start == self.goal || self.start == self.open {
            return Err(MazeError::DuplicateMarker(self.start));
        }
        if self.goal == self.open {
            return Err(MazeError::DuplicateMarker(self.goal));
        }
        Ok(())
    }

    /// Classify one character of maze text.
    #[inline]
    pub fn classify(&self, ch: char) -> Tile {
        if ch == self.start {
            Tile::Start
        } else if ch == self.goal {
            Tile::Goal
        } else if ch == self.open {
            Tile::Open
        } else {
            Tile::Wall
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What a single character of maze text stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Start,
    Goal,
    Open,
    Wall,
}
