//! Caption Core - backend-agnostic caption layout
//!
//! This crate connects the markup parser to drawing backends: it loads
//! palettes, lays out parsed elements and drives any [`TextRenderer`].

pub mod config;
pub mod constants;
pub mod diagnostic;
pub mod dummy_backend;
pub mod error;
pub mod layout;
pub mod palette_file;
pub mod traits;

// Re-export main types
pub use caption_markup::{Color, Element, MarkupParser, Palette, ParseError, ParseOptions, Span};
pub use config::CaptionConfig;
pub use dummy_backend::{DrawCall, RecordingRenderer};
pub use error::{CaptionError, CaptionResult, RenderError};
pub use layout::{layout, physical_lines, render, render_markup, Layout, PlacedRun};
pub use palette_file::{builtin_palette, load_palette, parse_palette};
pub use traits::{TextMetrics, TextRenderer};
