// src/error.rs
use std::path::PathBuf;

use caption_markup::{PaletteError, ParseError};
use thiserror::Error;

/// Errors from loading captions and their palettes and from drawing them
#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("palette file line {line}: {message}")]
    PaletteFormat { line: usize, message: String },

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("caption markup error: {0}")]
    Markup(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors raised by a drawing backend
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("render backend error: {message}")]
    Backend { message: String },

    #[error("IO error while rendering: {0}")]
    Io(#[from] std::io::Error),
}

pub type CaptionResult<T> = Result<T, CaptionError>;
