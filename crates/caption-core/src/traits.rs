use caption_markup::Color;

use crate::error::RenderError;

/// Text measuring for layout.
pub trait TextMetrics {
    /// Horizontal advance of `text`. Text with line terminators measures
    /// as its widest line.
    fn text_width(&self, text: &str) -> f64;
    /// Vertical advance of one line break.
    fn line_height(&self) -> f64;
}

/// Drawing backend for laid-out captions.
///
/// The layout driver calls [`TextRenderer::draw_text`] once per text run, in
/// source order, with `(x, y)` at the run's top-left corner. Each run is a
/// single physical line; the driver never passes line terminators.
pub trait TextRenderer: TextMetrics {
    fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Color) -> Result<(), RenderError>;

    /// Called before the first run of a caption.
    fn begin(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    /// Called after the last run of a caption.
    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
