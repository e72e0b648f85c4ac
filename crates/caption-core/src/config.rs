// src/config.rs
use caption_markup::{Color, ParseOptions};

use crate::constants::{DEFAULT_EMIT_LINE_BREAKS, DEFAULT_ORIGIN_X, DEFAULT_ORIGIN_Y};

#[derive(Clone, Debug, PartialEq)]
pub struct CaptionConfig {
    /// Left margin; every line starts here.
    pub origin_x: f64,
    /// Top of the first line.
    pub origin_y: f64,
    /// Overrides the renderer's own line height when set.
    pub line_height: Option<f64>,
    pub emit_line_breaks: bool,
    /// Text color before any escape and after `\c!`. Palette slot 0 when unset.
    pub default_color: Option<Color>,
    /// Lines wider than this are reported, not wrapped.
    pub max_width: Option<f64>,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            origin_x: DEFAULT_ORIGIN_X,
            origin_y: DEFAULT_ORIGIN_Y,
            line_height: None,
            emit_line_breaks: DEFAULT_EMIT_LINE_BREAKS,
            default_color: None,
            max_width: None,
        }
    }
}

impl CaptionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = Some(height.max(0.0));
        self
    }

    pub fn with_line_breaks(mut self, enabled: bool) -> Self {
        self.emit_line_breaks = enabled;
        self
    }

    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = Some(color);
        self
    }

    pub fn with_max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            emit_line_breaks: self.emit_line_breaks,
            default_color: self.default_color,
        }
    }
}
