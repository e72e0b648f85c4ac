// src/error.rs
use caption_core::CaptionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("no caption given: pass TEXT or --file")]
    NoInput,

    #[error("invalid default color {0:?}: expected RRGGBB or #RRGGBB")]
    InvalidColor(String),

    #[error("failed to read caption from {origin}: {source}")]
    ReadInput {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Caption(#[from] CaptionError),
}

pub type CliResult<T> = Result<T, CliError>;
