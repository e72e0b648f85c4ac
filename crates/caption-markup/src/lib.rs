//! # Caption Markup
//!
//! Parser for short, author-written caption strings with inline color escapes:
//!
//! | Escape | Effect |
//! |---|---|
//! | `\c[N]` | switch to palette color `N` (0..32) |
//! | `\c[#RRGGBB]` | switch to a literal color |
//! | `\c!` | back to the default color |
//! | `\` + newline | line continuation |
//!
//! The output is a flat sequence of [`Element`]s, each tagged with the byte
//! span of the source it came from.
//!
//! ```
//! use caption_markup::{parse, Color, Element, Palette};
//!
//! let mut palette = Palette::new();
//! palette.set(14, Color::rgb(0xFF, 0xF1, 0x78)).unwrap();
//!
//! let elements = parse("\\c[14]Melody", &palette, true).unwrap();
//! assert_eq!(elements.len(), 1);
//! assert_eq!(elements[0].text(), Some("Melody"));
//! assert!(matches!(elements[0], Element::TextRun { .. }));
//! ```

pub mod color;
pub mod element;
pub mod error;
pub mod palette;
pub mod parser;

pub use color::Color;
pub use element::{Element, Escape, EscapeKind, Markup, Span};
pub use error::{PaletteError, ParseError, ParseErrorKind, ParseResult};
pub use palette::{Palette, PALETTE_SIZE};
pub use parser::{parse, MarkupParser, ParseOptions};
