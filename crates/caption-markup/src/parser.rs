use tracing::{debug, trace};

use crate::color::Color;
use crate::element::{Element, Escape, EscapeKind, Markup, Span};
use crate::error::{ParseError, ParseResult};
use crate::palette::Palette;

/// Knobs for a parse call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Split runs on unescaped line terminators and emit [`Element::LineBreak`].
    /// When false, terminators are kept verbatim in the run text.
    pub emit_line_breaks: bool,
    /// Color active at the start of the text and restored by `\c!`.
    /// `None` means palette slot 0.
    pub default_color: Option<Color>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            emit_line_breaks: true,
            default_color: None,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_breaks(mut self, enabled: bool) -> Self {
        self.emit_line_breaks = enabled;
        self
    }

    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = Some(color);
        self
    }
}

/// Parser for caption markup.
///
/// Holds nothing but a borrowed palette and its options; every call to
/// [`MarkupParser::parse`] owns its own scan state, so one parser can be shared
/// across threads.
#[derive(Clone, Copy, Debug)]
pub struct MarkupParser<'p> {
    palette: &'p Palette,
    options: ParseOptions,
}

/// Parse `source` against `palette`.
///
/// # Errors
///
/// Returns the first malformed escape found; no partial output is produced.
pub fn parse(source: &str, palette: &Palette, emit_line_breaks: bool) -> ParseResult<Vec<Element>> {
    MarkupParser::new(palette)
        .with_options(ParseOptions::default().with_line_breaks(emit_line_breaks))
        .parse(source)
}

impl<'p> MarkupParser<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn default_color(&self) -> Color {
        self.options
            .default_color
            .unwrap_or_else(|| self.palette.default_color())
    }

    /// Parse into the element sequence.
    ///
    /// # Errors
    ///
    /// See [`ParseError`].
    pub fn parse(&self, source: &str) -> ParseResult<Vec<Element>> {
        self.parse_markup(source).map(Markup::into_elements)
    }

    /// Parse into elements plus the consumed escape sequences.
    ///
    /// # Errors
    ///
    /// See [`ParseError`].
    pub fn parse_markup(&self, source: &str) -> ParseResult<Markup> {
        let markup = ParseState::new(self, source).run()?;
        debug!(
            source_len = source.len(),
            elements = markup.elements.len(),
            escapes = markup.escapes.len(),
            "parsed caption markup"
        );
        Ok(markup)
    }
}

/// Scan state of one parse call.
struct ParseState<'a, 's> {
    palette: &'a Palette,
    emit_line_breaks: bool,
    default_color: Color,
    source: &'s str,
    bytes: &'s [u8],
    pos: usize,
    color: Color,
    run: String,
    run_start: usize,
    out: Markup,
}

impl<'a, 's> ParseState<'a, 's> {
    fn new(parser: &MarkupParser<'a>, source: &'s str) -> Self {
        let default_color = parser.default_color();
        Self {
            palette: parser.palette,
            emit_line_breaks: parser.options.emit_line_breaks,
            default_color,
            source,
            bytes: source.as_bytes(),
            pos: 0,
            color: default_color,
            run: String::new(),
            run_start: 0,
            out: Markup::default(),
        }
    }

    fn run(mut self) -> ParseResult<Markup> {
        // All markup syntax is ASCII, so every offset the scan stops at is a
        // char boundary and plain stretches can be copied as whole slices.
        while let Some(offset) = memchr::memchr2(b'\\', b'\n', &self.bytes[self.pos..]) {
            let at = self.pos + offset;
            if self.bytes[at] == b'\n' {
                self.line_terminator(at);
            } else {
                self.push_plain(at);
                self.escape(at)?;
            }
        }
        self.push_plain(self.bytes.len());
        self.flush(self.bytes.len());
        Ok(self.out)
    }

    /// Append `source[pos..end]` to the current run.
    fn push_plain(&mut self, end: usize) {
        self.run.push_str(&self.source[self.pos..end]);
        self.pos = end;
    }

    /// Close the current run at `end`. Empty runs are dropped.
    fn flush(&mut self, end: usize) {
        if self.run.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.run);
        self.out.elements.push(Element::TextRun {
            span: Span::new(self.run_start, end),
            color: self.color,
            text,
        });
    }

    fn line_terminator(&mut self, newline: usize) {
        let end = newline + 1;
        if !self.emit_line_breaks {
            self.push_plain(end);
            return;
        }
        let start = if newline > self.pos && self.bytes[newline - 1] == b'\r' {
            newline - 1
        } else {
            newline
        };
        self.push_plain(start);
        self.flush(start);
        self.out.elements.push(Element::LineBreak {
            span: Span::new(start, end),
        });
        self.pos = end;
        self.run_start = end;
    }

    fn escape(&mut self, at: usize) -> ParseResult<()> {
        match self.bytes.get(at + 1) {
            None => Err(ParseError::UnterminatedEscape {
                span: Span::new(at, self.bytes.len()),
            }),
            Some(b'\n') => {
                self.continuation(Span::new(at, at + 2));
                Ok(())
            }
            Some(b'\r') if self.bytes.get(at + 2) == Some(&b'\n') => {
                self.continuation(Span::new(at, at + 3));
                Ok(())
            }
            Some(b'c') => self.color_escape(at),
            Some(_) => Err(self.unknown_escape(at, at + 1)),
        }
    }

    fn continuation(&mut self, span: Span) {
        trace!(%span, "line continuation");
        self.out.escapes.push(Escape {
            span,
            kind: EscapeKind::LineContinuation,
        });
        self.pos = span.end;
    }

    /// `at` points at the backslash of `\c`.
    fn color_escape(&mut self, at: usize) -> ParseResult<()> {
        match self.bytes.get(at + 2) {
            None => Err(ParseError::UnterminatedEscape {
                span: Span::new(at, self.bytes.len()),
            }),
            Some(b'!') => {
                let color = self.default_color;
                self.apply_color(color, Span::new(at, at + 3), EscapeKind::ColorReset);
                Ok(())
            }
            Some(b'[') => {
                let open = at + 3;
                let close = memchr::memchr(b']', &self.bytes[open..])
                    .map(|p| open + p)
                    .ok_or(ParseError::UnterminatedEscape {
                        span: Span::new(at, self.bytes.len()),
                    })?;
                let arg_span = Span::new(open, close);
                let argument = &self.source[open..close];
                let (color, kind) = if argument.starts_with('#') {
                    let color = Color::from_hex(argument).ok_or_else(|| {
                        ParseError::InvalidColorLiteral {
                            argument: argument.to_string(),
                            span: arg_span,
                        }
                    })?;
                    (color, EscapeKind::ColorLiteral(color))
                } else {
                    let index = self.color_index(argument, arg_span)?;
                    (self.lookup(index, argument, arg_span)?, EscapeKind::ColorIndex(index))
                };
                self.apply_color(color, Span::new(at, close + 1), kind);
                Ok(())
            }
            Some(_) => Err(self.unknown_escape(at, at + 2)),
        }
    }

    fn color_index(&self, argument: &str, span: Span) -> ParseResult<usize> {
        if argument.is_empty() || !argument.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidColorIndex {
                argument: argument.to_string(),
                span,
            });
        }
        // Only digits remain, so the sole failure left is overflow.
        argument.parse().map_err(|_| ParseError::IndexOutOfRange {
            argument: argument.to_string(),
            span,
        })
    }

    fn lookup(&self, index: usize, argument: &str, span: Span) -> ParseResult<Color> {
        self.palette
            .get(index)
            .map_err(|_| ParseError::IndexOutOfRange {
                argument: argument.to_string(),
                span,
            })
    }

    /// Split the run if the active color changes.
    fn apply_color(&mut self, color: Color, span: Span, kind: EscapeKind) {
        trace!(%span, ?kind, %color, "color escape");
        self.out.escapes.push(Escape { span, kind });
        if color != self.color {
            self.flush(span.start);
            self.color = color;
            self.run_start = span.end;
        }
        self.pos = span.end;
    }

    /// `offending` is the offset of the character that failed to match.
    fn unknown_escape(&self, at: usize, offending: usize) -> ParseError {
        // `offending` follows an ASCII byte, so it is a char boundary.
        let found = self.source[offending..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        ParseError::UnknownEscape {
            found,
            span: Span::new(at, offending + found.len_utf8()),
        }
    }
}
