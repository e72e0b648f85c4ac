// src/error.rs
use thiserror::Error;

use crate::element::Span;
use crate::palette::PALETTE_SIZE;

/// Errors raised while parsing caption markup. Every variant is fatal to the
/// current parse call and carries the offending byte range of the source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("palette index {argument} at {span} is out of range (expected 0..{max})", max = PALETTE_SIZE)]
    IndexOutOfRange { argument: String, span: Span },

    #[error("invalid color index {argument:?} at {span}: expected a non-negative integer")]
    InvalidColorIndex { argument: String, span: Span },

    #[error("invalid color literal {argument:?} at {span}: expected '#' and exactly 6 hex digits")]
    InvalidColorLiteral { argument: String, span: Span },

    #[error("unknown escape '\\{found}' at {span}")]
    UnknownEscape { found: char, span: Span },

    #[error("unterminated escape sequence at {span}")]
    UnterminatedEscape { span: Span },
}

/// Fieldless mirror of [`ParseError`] for callers that only care about the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    IndexOutOfRange,
    InvalidColorIndex,
    InvalidColorLiteral,
    UnknownEscape,
    UnterminatedEscape,
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::IndexOutOfRange { span, .. }
            | ParseError::InvalidColorIndex { span, .. }
            | ParseError::InvalidColorLiteral { span, .. }
            | ParseError::UnknownEscape { span, .. }
            | ParseError::UnterminatedEscape { span } => *span,
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::IndexOutOfRange { .. } => ParseErrorKind::IndexOutOfRange,
            ParseError::InvalidColorIndex { .. } => ParseErrorKind::InvalidColorIndex,
            ParseError::InvalidColorLiteral { .. } => ParseErrorKind::InvalidColorLiteral,
            ParseError::UnknownEscape { .. } => ParseErrorKind::UnknownEscape,
            ParseError::UnterminatedEscape { .. } => ParseErrorKind::UnterminatedEscape,
        }
    }
}

/// Palette access errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette index {index} out of range (expected 0..{max})", max = PALETTE_SIZE)]
    IndexOutOfRange { index: usize },

    #[error("palette holds at most {max} colors, got {count}", max = PALETTE_SIZE)]
    TooManyColors { count: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;
