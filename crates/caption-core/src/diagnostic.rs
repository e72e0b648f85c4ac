//! Human-readable reports for malformed caption markup.

use caption_markup::ParseError;
use unicode_width::UnicodeWidthStr;

/// Line and column (both 1-based, column counted in chars) of byte `offset`.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = floor_char_boundary(source, offset);
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = source[line_start..offset].chars().count() + 1;
    (line, column)
}

/// Format `err` with the offending source line and a caret underline.
///
/// ```text
/// error: unknown escape '\q' at 6..8
///  --> line 1, column 7
///   |
/// 1 | Hello \q
///   |       ^^
/// ```
pub fn describe(source: &str, err: &ParseError) -> String {
    let span = err.span();
    let start = floor_char_boundary(source, span.start);
    let end = floor_char_boundary(source, span.end.max(start));
    let (line, column) = line_col(source, start);

    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);
    let line_text = source[line_start..line_end].trim_end_matches('\r');

    // Carets stop at the end of the first line; an empty span still gets one.
    let underlined = &source[start..end.min(line_end)];
    let pad = source[line_start..start].width();
    let carets = underlined.width().max(1);

    let gutter = " ".repeat(line.to_string().len());
    format!(
        "error: {err}\n{gutter}--> line {line}, column {column}\n{gutter} |\n{line} | {line_text}\n{gutter} | {}{}",
        " ".repeat(pad),
        "^".repeat(carets),
    )
}

fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
