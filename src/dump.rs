//! Element listing for `--dump`

use std::io::{self, Write};

use caption_core::Element;

/// One line per element: span, kind, color and the Debug-escaped text.
pub fn dump_elements<W: Write>(out: &mut W, elements: &[Element]) -> io::Result<()> {
    for element in elements {
        let span = element.span().to_string();
        match element {
            Element::TextRun { color, text, .. } => {
                writeln!(out, "{:>10}  run    {}  {:?}", span, color, text)?;
            }
            Element::LineBreak { .. } => {
                writeln!(out, "{:>10}  break", span)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use caption_core::{Color, Palette};

    #[test]
    fn test_dump_listing() {
        let mut palette = Palette::new();
        palette.set(14, Color::rgb(0xFF, 0xF1, 0x78)).unwrap();
        let elements = caption_markup::parse("\\c[14]Hi\nyo", &palette, true).unwrap();

        let mut out = Vec::new();
        dump_elements(&mut out, &elements).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "      6..8  run    #FFF178  \"Hi\"");
        assert_eq!(lines[1], "      8..9  break");
        assert_eq!(lines[2], "     9..11  run    #000000  \"yo\"");
    }
}
