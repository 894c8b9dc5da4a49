//! Crossterm terminal printer for maze frames.
//!
//! Provides a [`CrosstermPrinter`] that writes a [`maze_core::Frame`] to any
//! [`Write`] sink, one line per row, optionally coloring each glyph.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    tty::IsTty,
};

use maze_core::{Frame, Glyph};

/// Maps a [`Glyph`] to its foreground color. `None` keeps the terminal
/// default.
fn to_ct_color(g: Glyph) -> Option<CtColor> {
    match g {
        Glyph::Wall => Some(CtColor::DarkGrey),
        Glyph::Start => Some(CtColor::Red),
        Glyph::Goal => Some(CtColor::Green),
        Glyph::Path => Some(CtColor::Yellow),
        Glyph::Explored => Some(CtColor::DarkRed),
        Glyph::Open => None,
    }
}

/// Writes frames to a terminal (or any byte sink).
#[derive(Debug, Clone, Copy)]
pub struct CrosstermPrinter {
    color: bool,
}

impl CrosstermPrinter {
    /// Create a printer with color enabled.
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a printer that colors only when stdout is a terminal.
    pub fn for_stdout() -> Self {
        Self {
            color: io::stdout().is_tty(),
        }
    }

    /// Configure whether glyphs are colored.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Write `frame` to `out` and flush.
    pub fn print<W: Write>(&self, out: &mut W, frame: &Frame) -> io::Result<()> {
        for row in frame.rows() {
            for &g in row {
                match to_ct_color(g).filter(|_| self.color) {
                    Some(c) => {
                        queue!(out, SetForegroundColor(c))?;
                        if g == Glyph::Start || g == Glyph::Goal {
                            queue!(out, SetAttribute(Attribute::Bold))?;
                        }
                        queue!(out, Print(g.symbol()), SetAttribute(Attribute::Reset), ResetColor)?;
                    }
                    None => queue!(out, Print(g.symbol()))?,
                }
            }
            queue!(out, Print('\n'))?;
        }
        out.flush()
    }
}

impl Default for CrosstermPrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Cell, Maze, RenderOptions};

    fn frame() -> Frame {
        let m = Maze::parse("A  #\n## #\n B #").unwrap();
        let path = [Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)];
        Frame::render(&m, Some(&path[..]), None, RenderOptions::default())
    }

    #[test]
    fn plain_output_matches_display() {
        let mut buf = Vec::new();
        CrosstermPrinter::new()
            .with_color(false)
            .print(&mut buf, &frame())
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), frame().to_string());
    }

    #[test]
    fn colored_output_wraps_glyphs_in_escapes() {
        let mut plain = Vec::new();
        let printer = CrosstermPrinter::new().with_color(false);
        printer.print(&mut plain, &frame()).unwrap();

        let mut colored = Vec::new();
        CrosstermPrinter::new().print(&mut colored, &frame()).unwrap();
        let text = String::from_utf8(colored).unwrap();

        assert!(text.contains('\u{1b}'));
        assert!(text.len() > plain.len());
        assert_eq!(text.matches('*').count(), 4);
        assert_eq!(text.matches('\n').count(), 3);
    }

    #[test]
    fn with_color_is_the_last_word() {
        let mut buf = Vec::new();
        CrosstermPrinter::new()
            .with_color(false)
            .with_color(true)
            .print(&mut buf, &frame())
            .unwrap();
        assert!(buf.contains(&0x1b));

        let mut buf = Vec::new();
        CrosstermPrinter::default()
            .with_color(false)
            .print(&mut buf, &frame())
            .unwrap();
        assert!(!buf.contains(&0x1b));
    }

    #[test]
    fn open_cells_are_never_styled() {
        assert_eq!(to_ct_color(Glyph::Open), None);
        assert!(to_ct_color(Glyph::Wall).is_some());
    }
}
