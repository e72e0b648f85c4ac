//! captionkit - paint color-escaped caption markup in the terminal
//!
//! The parsing lives in `caption-markup` and the layout in `caption-core`;
//! this crate adds the terminal backend and the command-line front end.

pub mod cli;
pub mod dump;
pub mod error;
pub mod terminal;

// Re-export main types for convenience
pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use terminal::AnsiRenderer;
