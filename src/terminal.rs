//! Terminal backend: paints caption runs with 24-bit ANSI colors.
//!
//! Coordinates are terminal cells: x is a column, y is a row, and both
//! the cell width and the line height are one unit.

use std::io::Write;

use caption_core::constants::{TERMINAL_CELL_WIDTH, TERMINAL_LINE_HEIGHT};
use caption_core::{physical_lines, Color, RenderError, TextMetrics, TextRenderer};
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";

pub struct AnsiRenderer<W: Write> {
    out: W,
    color_enabled: bool,
    row: usize,
    col: usize,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color_enabled: true,
            row: 0,
            col: 0,
        }
    }

    /// Plain text output, no escape sequences.
    pub fn without_color(mut self) -> Self {
        self.color_enabled = false;
        self
    }

    /// Emit the newlines for trailing empty lines of a caption with
    /// `line_count` lines, then end the last line.
    pub fn close(&mut self, line_count: usize) -> Result<(), RenderError> {
        let last_row = line_count.saturating_sub(1);
        self.move_to_row(last_row)?;
        if line_count > 0 {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn move_to_row(&mut self, row: usize) -> Result<(), RenderError> {
        while self.row < row {
            self.out.write_all(b"\n")?;
            self.row += 1;
            self.col = 0;
        }
        Ok(())
    }

    fn track(&mut self, text: &str) {
        match text.rsplit_once('\n') {
            Some((head, tail)) => {
                self.row += head.matches('\n').count() + 1;
                self.col = tail.width();
            }
            None => self.col += text.width(),
        }
    }
}

fn cell(coord: f64) -> usize {
    if coord.is_finite() && coord > 0.0 {
        coord.round() as usize
    } else {
        0
    }
}

impl<W: Write> TextMetrics for AnsiRenderer<W> {
    fn text_width(&self, text: &str) -> f64 {
        physical_lines(text).map(UnicodeWidthStr::width).max().unwrap_or(0) as f64 * TERMINAL_CELL_WIDTH
    }

    fn line_height(&self) -> f64 {
        TERMINAL_LINE_HEIGHT
    }
}

impl<W: Write> TextRenderer for AnsiRenderer<W> {
    fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Color) -> Result<(), RenderError> {
        self.move_to_row(cell(y))?;
        let col = cell(x);
        if col > self.col {
            write!(self.out, "{:width$}", "", width = col - self.col)?;
            self.col = col;
        }
        if self.color_enabled {
            write!(self.out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)?;
        }
        self.out.write_all(text.as_bytes())?;
        self.track(text);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        if self.color_enabled {
            self.out.write_all(RESET.as_bytes())?;
        }
        Ok(())
    }
}
