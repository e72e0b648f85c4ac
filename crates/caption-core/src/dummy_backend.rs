//! Recording backend for testing layout and draw order without a real surface

use caption_markup::Color;
use unicode_width::UnicodeWidthStr;

use crate::constants::{RECORDING_CELL_WIDTH, RECORDING_LINE_HEIGHT};
use crate::error::RenderError;
use crate::layout::physical_lines;
use crate::traits::{TextMetrics, TextRenderer};

/// One recorded `draw_text` call
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Color,
}

/// Monospace renderer that records what it was asked to draw.
///
/// Widths come from `unicode-width`, so wide CJK glyphs and emoji take two
/// cells.
#[derive(Debug)]
pub struct RecordingRenderer {
    cell_width: f64,
    line_height: f64,
    calls: Vec<DrawCall>,
    frames: usize,
    fail_after: Option<usize>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new(RECORDING_CELL_WIDTH, RECORDING_LINE_HEIGHT)
    }
}

impl RecordingRenderer {
    pub fn new(cell_width: f64, line_height: f64) -> Self {
        Self {
            cell_width,
            line_height,
            calls: Vec::new(),
            frames: 0,
            fail_after: None,
        }
    }

    /// Make every draw after the first `n` fail.
    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of completed begin/finish pairs.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.frames = 0;
    }
}

impl TextMetrics for RecordingRenderer {
    fn text_width(&self, text: &str) -> f64 {
        physical_lines(text).map(UnicodeWidthStr::width).max().unwrap_or(0) as f64 * self.cell_width
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

impl TextRenderer for RecordingRenderer {
    fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Color) -> Result<(), RenderError> {
        if self.fail_after.is_some_and(|n| self.calls.len() >= n) {
            return Err(RenderError::Backend {
                message: format!("refusing draw #{}", self.calls.len() + 1),
            });
        }
        self.calls.push(DrawCall {
            x,
            y,
            text: text.to_string(),
            color,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_glyphs_take_two_cells() {
        let renderer = RecordingRenderer::new(10.0, 20.0);
        assert_eq!(renderer.text_width("ab"), 20.0);
        assert_eq!(renderer.text_width("世界"), 40.0);
        assert_eq!(renderer.text_width(""), 0.0);
    }

    #[test]
    fn test_terminators_measure_widest_line() {
        let renderer = RecordingRenderer::new(8.0, 16.0);
        assert_eq!(renderer.text_width("A\nB"), 8.0);
        assert_eq!(renderer.text_width("A\r\nlonger"), 48.0);
    }

    #[test]
    fn test_records_and_clears() {
        let mut renderer = RecordingRenderer::default();
        renderer.draw_text(1.0, 2.0, "hi", Color::WHITE).unwrap();
        renderer.finish().unwrap();
        assert_eq!(renderer.calls().len(), 1);
        assert_eq!(renderer.frames(), 1);
        renderer.clear();
        assert!(renderer.calls().is_empty());
        assert_eq!(renderer.frames(), 0);
    }
}
