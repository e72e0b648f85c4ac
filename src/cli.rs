//! Command-line arguments for `captionkit`

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use caption_core::{CaptionConfig, Color};
use clap::Parser;

use crate::error::{CliError, CliResult};

#[derive(Parser, Debug)]
#[command(name = "captionkit")]
#[command(about = "Parse color-escaped caption markup and paint it to the terminal")]
#[command(long_about = "Parse color-escaped caption markup and paint it to the terminal.

ESCAPES:
    \\c[N]          switch to palette color N (0-31)
    \\c[#RRGGBB]    switch to a literal color
    \\c!            back to the default color
    \\<newline>     line continuation

EXAMPLES:
    captionkit '\\c[14]Melody\\c! is delicious'
    captionkit --file caption.txt --palette window.pal
    echo 'A\\c[2]B' | captionkit --file - --dump")]
#[command(version)]
pub struct Cli {
    /// Caption markup to render
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the caption from a file ('-' for stdin)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Palette file (hex list or JASC-PAL); defaults to the built-in palette
    #[arg(long, short)]
    pub palette: Option<PathBuf>,

    /// Keep line terminators inside text runs instead of breaking lines
    #[arg(long)]
    pub no_line_breaks: bool,

    /// Default text color, overriding palette slot 0
    #[arg(long, value_name = "HEX")]
    pub default_color: Option<String>,

    /// Print the parsed elements instead of painting them
    #[arg(long)]
    pub dump: bool,

    /// Paint without ANSI color sequences
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The caption markup, from TEXT, a file, or stdin.
    pub fn read_source(&self) -> CliResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let Some(path) = &self.file else {
            return Err(CliError::NoInput);
        };
        if path.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::ReadInput {
                    origin: "stdin".to_string(),
                    source,
                })?;
            Ok(text)
        } else {
            fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                origin: path.display().to_string(),
                source,
            })
        }
    }

    pub fn caption_config(&self) -> CliResult<CaptionConfig> {
        let mut config = CaptionConfig::new().with_line_breaks(!self.no_line_breaks);
        if let Some(hex) = &self.default_color {
            let color = Color::from_hex(hex).ok_or_else(|| CliError::InvalidColor(hex.clone()))?;
            config = config.with_default_color(color);
        }
        Ok(config)
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["captionkit", "--no-line-breaks", "-vv", "--default-color", "#FFF178", "hi"])
            .unwrap();
        assert_eq!(cli.text.as_deref(), Some("hi"));
        assert_eq!(cli.log_level(), "trace");
        let config = cli.caption_config().unwrap();
        assert!(!config.emit_line_breaks);
        assert_eq!(config.default_color, Some(Color::rgb(0xFF, 0xF1, 0x78)));
        assert_eq!(cli.read_source().unwrap(), "hi");
    }

    #[test]
    fn test_text_and_file_conflict() {
        assert!(Cli::try_parse_from(["captionkit", "--file", "a.txt", "hi"]).is_err());
    }

    #[test]
    fn test_missing_input_and_bad_color() {
        let cli = Cli::try_parse_from(["captionkit", "--default-color", "nope"]).unwrap();
        assert!(matches!(cli.read_source(), Err(CliError::NoInput)));
        assert!(matches!(cli.caption_config(), Err(CliError::InvalidColor(_))));
    }
}
