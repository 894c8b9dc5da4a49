//! The load / print / solve / print flow.

use std::fs;
use std::io::Write;
use std::path::Path;

use maze_core::{Frame, Maze};
use maze_crossterm::CrosstermPrinter;
use maze_search::{Search, SearchError, solve_with};

use crate::config::Settings;
use crate::error::{CliError, Result};

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Search),
    /// The goal cannot be reached from the start.
    Unsolvable { explored: usize },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// Read the maze file at `path`.
pub fn read_maze(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `text`, print it, solve it, and print the result to `out`.
pub fn run<W: Write>(
    text: &str,
    settings: &Settings,
    printer: &CrosstermPrinter,
    out: &mut W,
) -> Result<Outcome> {
    writeln!(out, "Loading maze...")?;
    let maze = Maze::parse_with(text, &settings.markers)?;
    printer.print(out, &Frame::new(&maze))?;

    writeln!(out, "Solving maze ({} frontier)...", settings.discipline)?;
    let search = match solve_with(&maze, settings.discipline) {
        Ok(search) => search,
        Err(SearchError::NoSolution { explored }) => {
            log::info!("goal {} unreachable from {}", maze.goal(), maze.start());
            writeln!(out, "No solution.")?;
            writeln!(out, "States explored: {explored}")?;
            return Ok(Outcome::Unsolvable { explored });
        }
        Err(e) => return Err(e.into()),
    };

    let frame = Frame::render(
        &maze,
        Some(search.solution.cells.as_slice()),
        Some(search.explored.as_slice()),
        settings.render,
    );
    printer.print(out, &frame)?;

    let actions: Vec<&str> = search.solution.actions.iter().map(|a| a.as_str()).collect();
    writeln!(out, "Actions ({}): {}", actions.len(), actions.join(", "))?;
    writeln!(out, "States explored: {}", search.num_explored())?;

    Ok(Outcome::Solved(search))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Action, Malformed, MazeError};
    use maze_search::Discipline;

    fn plain() -> CrosstermPrinter {
        CrosstermPrinter::new().with_color(false)
    }

    fn fifo() -> Settings {
        Settings {
            discipline: Discipline::Fifo,
            ..Settings::default()
        }
    }

    #[test]
    fn prints_before_and_after() {
        let mut out = Vec::new();
        let outcome = run("A  #\n## #\n B #\n", &fifo(), &plain(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Loading maze...\n\
             A  #\n\
             ## #\n \
             B #\n\
             Solving maze (fifo frontier)...\n\
             A**#\n\
             ##*#\n \
             B*#\n\
             Actions (5): up, up, right, right, down\n\
             States explored: 5\n"
        );
        match outcome {
            Outcome::Solved(search) => assert_eq!(search.solution.actions[0], Action::Up),
            other => panic!("expected a solution, got {other:?}"),
        }
    }

    #[test]
    fn unsolvable_is_an_outcome_not_an_error() {
        let mut out = Vec::new();
        let outcome = run("A#B", &Settings::default(), &plain(), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Unsolvable { explored: 1 });
        assert!(!outcome.is_solved());
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("No solution.\nStates explored: 1\n"));
    }

    #[test]
    fn malformed_maze_is_an_error() {
        let mut out = Vec::new();
        let err = run("A A B", &Settings::default(), &plain(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            CliError::Maze(MazeError::Malformed(Malformed::MultipleStarts(2)))
        ));
    }

    #[test]
    fn explored_overlay_is_printed_when_enabled() {
        let mut settings = fifo();
        settings.render.show_explored = true;
        let mut out = Vec::new();
        run("A  \n # \nB  ", &settings, &plain(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // (0, 1) was expanded but is not on the path.
        assert!(text.contains("A. \n*# \nB  \n"));
    }

    #[test]
    fn read_missing_file() {
        let err = read_maze(Path::new("/nonexistent/maze.txt")).unwrap_err();
        assert!(err.to_string().starts_with("cannot read /nonexistent/maze.txt"));
    }
}
