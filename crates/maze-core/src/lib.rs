//! **maze-core** — maze text parsing and rendering (core types).
//!
//! This crate provides the value types shared by the maze workspace:
//! coordinates and moves, the marker set, the immutable occupancy grid built
//! from text, and a character frame for display. It performs no I/O.

pub mod error;
pub mod frame;
pub mod geom;
pub mod grid;
pub mod markers;

pub use error::{Malformed, MazeError};
pub use frame::{Frame, Glyph, RenderOptions};
pub use geom::{Action, Cell};
pub use grid::Maze;
pub use markers::{Markers, Tile};
