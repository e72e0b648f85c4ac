#![no_main]
use libfuzzer_sys::fuzz_target;

use caption_markup::{Color, Element, MarkupParser, Palette, ParseOptions, Span};

fn fuzz_palette() -> Palette {
    let mut palette = Palette::new();
    for (i, color) in [Color::WHITE, Color::rgb(0xFF, 0xF1, 0x78), Color::rgb(0xBB, 0x29, 0x29)]
        .into_iter()
        .enumerate()
    {
        palette.set(i * 7, color).ok();
    }
    palette
}

fn check_invariants(source: &str, markup: &caption_markup::Markup) {
    let mut spans: Vec<Span> = markup.elements.iter().map(Element::span).collect();
    spans.extend(markup.gap_escapes().map(|e| e.span));
    spans.sort();
    let mut cursor = 0;
    for span in spans {
        assert_eq!(span.start, cursor, "gap or overlap at {}", cursor);
        cursor = span.end;
    }
    assert_eq!(cursor, source.len(), "coverage stops short");

    for element in &markup.elements {
        if let Element::TextRun { text, .. } = element {
            assert!(!text.is_empty(), "empty run emitted");
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&flag, rest)) = data.split_first() else {
        return;
    };
    // Captions are short; keep iterations fast
    let rest = &rest[..rest.len().min(4096)];
    let Ok(source) = std::str::from_utf8(rest) else {
        return;
    };

    let palette = fuzz_palette();
    let parser = MarkupParser::new(&palette)
        .with_options(ParseOptions::default().with_line_breaks(flag & 1 == 1));

    match parser.parse_markup(source) {
        Ok(markup) => check_invariants(source, &markup),
        Err(err) => assert!(err.span().slice(source).is_some(), "error span off source"),
    }
});
