use std::fmt;
use std::ops::Range;

use crate::color::Color;

/// Half-open byte range `[start, end)` into the parsed source string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The substring this span covers, or `None` if it does not fit `source`.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.as_range())
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One unit of parsed output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    /// Escape-free text drawn in a single color.
    TextRun { span: Span, color: Color, text: String },
    /// Start a new line at the left margin.
    LineBreak { span: Span },
}

impl Element {
    pub fn span(&self) -> Span {
        match self {
            Element::TextRun { span, .. } | Element::LineBreak { span } => *span,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Element::TextRun { text, .. } => Some(text),
            Element::LineBreak { .. } => None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Element::TextRun { color, .. } => Some(*color),
            Element::LineBreak { .. } => None,
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Element::LineBreak { .. })
    }
}

/// What a consumed escape sequence did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeKind {
    /// `\c[N]`
    ColorIndex(usize),
    /// `\c[#RRGGBB]`
    ColorLiteral(Color),
    /// `\c!`
    ColorReset,
    /// backslash + line terminator
    LineContinuation,
}

/// An escape sequence that was consumed without becoming rendered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escape {
    pub span: Span,
    pub kind: EscapeKind,
}

/// Detailed parse output: the elements plus every consumed escape, both in
/// source order.
///
/// A run's span stretches from where the run started to where it was flushed,
/// so escapes that did not split it (line continuations, color escapes that
/// left the color unchanged) lie inside it. The remaining escapes fill the gaps
/// between elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup {
    pub elements: Vec<Element>,
    pub escapes: Vec<Escape>,
}

impl Markup {
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    /// Escapes whose span is not covered by any element span.
    pub fn gap_escapes(&self) -> impl Iterator<Item = &Escape> + '_ {
        self.escapes.iter().filter(move |escape| {
            !self
                .elements
                .iter()
                .any(|element| element.span().contains(&escape.span))
        })
    }

    /// Rendered text with line breaks as `\n`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            match element {
                Element::TextRun { text, .. } => out.push_str(text),
                Element::LineBreak { .. } => out.push('\n'),
            }
        }
        out
    }
}
