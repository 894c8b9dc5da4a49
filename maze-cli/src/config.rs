//! Command-line arguments, the optional TOML file, and the merged
//! [`Settings`] a run uses.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use maze_core::{Markers, RenderOptions};
use maze_search::Discipline;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Solve a text maze with a depth-first or breadth-first search.
#[derive(Parser, Debug)]
#[command(name = "maze", author, version, about, long_about = None)]
pub struct Args {
    /// Maze text file
    pub path: PathBuf,

    /// Frontier discipline: lifo (depth-first) or fifo (breadth-first)
    #[arg(short, long)]
    pub frontier: Option<Discipline>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mark explored cells in the solved maze
    #[arg(long)]
    pub show_explored: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// `[search]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub frontier: Discipline,
}

/// `[render]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub show_explored: bool,
    /// `None` means color only when stdout is a terminal.
    pub color: Option<bool>,
}

/// Contents of the configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub markers: Markers,
    pub search: SearchConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// What a single run does, after merging defaults, file and flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub markers: Markers,
    pub discipline: Discipline,
    pub render: RenderOptions,
    pub color: Option<bool>,
}

impl Settings {
    /// Flags win over the file, the file wins over defaults.
    pub fn merge(config: Config, args: &Args) -> Self {
        let color = if args.no_color {
            Some(false)
        } else {
            config.render.color
        };
        Self {
            markers: config.markers,
            discipline: args.frontier.unwrap_or(config.search.frontier),
            render: RenderOptions {
                show_explored: args.show_explored || config.render.show_explored,
            },
            color,
        }
    }

    /// Read the config file named by `args`, if any, and merge.
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(Self::merge(config, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_path_is_required() {
        assert!(Args::try_parse_from(["maze"]).is_err());
        assert!(Args::try_parse_from(["maze", "a.txt", "b.txt"]).is_err());
        let args = Args::try_parse_from(["maze", "maze.txt"]).unwrap();
        assert_eq!(args.path, PathBuf::from("maze.txt"));
        assert_eq!(args.frontier, None);
    }

    #[test]
    fn frontier_flag_accepts_aliases() {
        let args = Args::try_parse_from(["maze", "m.txt", "--frontier", "bfs"]).unwrap();
        assert_eq!(args.frontier, Some(Discipline::Fifo));
        let args = Args::try_parse_from(["maze", "-f", "stack", "m.txt"]).unwrap();
        assert_eq!(args.frontier, Some(Discipline::Lifo));
        assert!(Args::try_parse_from(["maze", "m.txt", "-f", "astar"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::try_parse_from(["maze", "-vv", "m.txt"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.markers, Markers::default());
    }

    #[test]
    fn partial_config() {
        let config: Config = toml::from_str(
            r#"
            [markers]
            open = "."

            [search]
            frontier = "fifo"

            [render]
            color = false
            "#,
        )
        .unwrap();
        assert_eq!(config.markers.start, 'A');
        assert_eq!(config.markers.open, '.');
        assert_eq!(config.search.frontier, Discipline::Fifo);
        assert_eq!(config.render.color, Some(false));
        assert!(!config.render.show_explored);
    }

    #[test]
    fn config_frontier_accepts_flag_aliases() {
        let config: Config = toml::from_str("[search]\nfrontier = \"dfs\"").unwrap();
        assert_eq!(config.search.frontier, Discipline::Lifo);
        let config: Config = toml::from_str("[search]\nfrontier = \"queue\"").unwrap();
        assert_eq!(config.search.frontier, Discipline::Fifo);
    }

    #[test]
    fn unknown_frontier_in_config_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[search]\nfrontier = \"astar\"");
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_file() {
        let config = Config {
            search: SearchConfig {
                frontier: Discipline::Fifo,
            },
            render: RenderConfig {
                show_explored: false,
                color: Some(true),
            },
            ..Config::default()
        };
        let args =
            Args::try_parse_from(["maze", "m.txt", "-f", "lifo", "--show-explored", "--no-color"])
                .unwrap();
        let s = Settings::merge(config.clone(), &args);
        assert_eq!(s.discipline, Discipline::Lifo);
        assert!(s.render.show_explored);
        assert_eq!(s.color, Some(false));

        let args = Args::try_parse_from(["maze", "m.txt"]).unwrap();
        let s = Settings::merge(config, &args);
        assert_eq!(s.discipline, Discipline::Fifo);
        assert_eq!(s.color, Some(true));
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let err = Config::load(Path::new("/nonexistent/maze.toml")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
