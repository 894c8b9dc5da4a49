//! Maze — a command-line maze solver built on the maze crates.

pub mod app;
pub mod config;
pub mod error;

pub use app::{Outcome, read_maze, run};
pub use config::{Args, Config, Settings};
pub use error::CliError;
