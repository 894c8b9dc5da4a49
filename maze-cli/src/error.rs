use std::io;
use std::path::PathBuf;

use maze_core::MazeError;
use maze_search::SearchError;
use thiserror::Error;

/// Everything that can stop the command short of printing a result.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
