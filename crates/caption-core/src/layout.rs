//! Caption layout and the draw loop.
//!
//! Runs are placed left to right starting at the origin: each run is drawn at
//! the pen position and the pen then advances by the run's width. A line break
//! returns the pen to the left margin and moves it down one line.
//!
//! Runs parsed with line breaks disabled keep their terminators verbatim.
//! Layout treats those like line breaks too: the run is split into one
//! [`PlacedRun`] per physical line, so backends never draw a newline.

use caption_markup::{Color, Element, MarkupParser, Palette, Span};
use tracing::{debug, trace, warn};

use crate::config::CaptionConfig;
use crate::error::{CaptionResult, RenderError};
use crate::traits::{TextMetrics, TextRenderer};

/// A text run with its resolved position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedRun {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub text: String,
    pub color: Color,
    pub span: Span,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub runs: Vec<PlacedRun>,
    /// Widest line, measured from the left margin.
    pub width: f64,
    pub height: f64,
    pub line_count: usize,
}

/// Position every run of `elements`.
pub fn layout<M>(elements: &[Element], metrics: &M, config: &CaptionConfig) -> Layout
where
    M: TextMetrics + ?Sized,
{
    let line_height = config.line_height.unwrap_or_else(|| metrics.line_height());
    let mut out = Layout {
        line_count: usize::from(!elements.is_empty()),
        ..Layout::default()
    };
    let mut x = config.origin_x;
    let mut y = config.origin_y;

    for element in elements {
        match element {
            Element::TextRun { span, color, text } => {
                for (i, line) in physical_lines(text).enumerate() {
                    if i > 0 {
                        check_overflow(config, out.line_count, x - config.origin_x);
                        x = config.origin_x;
                        y += line_height;
                        out.line_count += 1;
                    }
                    if line.is_empty() {
                        continue;
                    }
                    let width = metrics.text_width(line);
                    out.runs.push(PlacedRun {
                        x,
                        y,
                        width,
                        text: line.to_string(),
                        color: *color,
                        span: *span,
                    });
                    x += width;
                    out.width = out.width.max(x - config.origin_x);
                }
            }
            Element::LineBreak { .. } => {
                check_overflow(config, out.line_count, x - config.origin_x);
                x = config.origin_x;
                y += line_height;
                out.line_count += 1;
            }
        }
    }
    check_overflow(config, out.line_count, x - config.origin_x);

    out.height = out.line_count as f64 * line_height;
    out
}

/// Split `text` at `\n` and `\r\n` terminators.
///
/// A lone `\r` stays part of its line.
pub fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find('\n') {
            Some(i) => {
                rest = Some(&current[i + 1..]);
                let line = &current[..i];
                Some(line.strip_suffix('\r').unwrap_or(line))
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

fn check_overflow(config: &CaptionConfig, line: usize, width: f64) {
    if let Some(max_width) = config.max_width {
        if width > max_width {
            warn!(line, width, max_width, "caption line is wider than the maximum width");
        }
    }
}

/// Lay out `elements` and draw every run on `renderer`.
///
/// # Errors
///
/// The first error returned by the renderer; drawing stops there.
pub fn render<R>(elements: &[Element], renderer: &mut R, config: &CaptionConfig) -> Result<Layout, RenderError>
where
    R: TextRenderer + ?Sized,
{
    let placed = layout(elements, &*renderer, config);
    renderer.begin()?;
    for run in &placed.runs {
        trace!(x = run.x, y = run.y, color = %run.color, text = run.text.as_str(), "draw run");
        renderer.draw_text(run.x, run.y, &run.text, run.color)?;
    }
    renderer.finish()?;
    debug!(
        runs = placed.runs.len(),
        lines = placed.line_count,
        width = placed.width,
        height = placed.height,
        "rendered caption"
    );
    Ok(placed)
}

/// Parse `source` and render it. Nothing is drawn if the markup is malformed.
///
/// # Errors
///
/// [`crate::CaptionError::Markup`] for malformed markup,
/// [`crate::CaptionError::Render`] for backend failures.
pub fn render_markup<R>(
    source: &str,
    palette: &Palette,
    renderer: &mut R,
    config: &CaptionConfig,
) -> CaptionResult<Layout>
where
    R: TextRenderer + ?Sized,
{
    let elements = MarkupParser::new(palette)
        .with_options(config.parse_options())
        .parse(source)?;
    Ok(render(&elements, renderer, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_backend::RecordingRenderer;
    use crate::CaptionError;
    use caption_markup::ParseOptions;

    const MELODY: Color = Color::rgb(0xFF, 0xF1, 0x78);

    fn palette() -> Palette {
        let mut palette = Palette::new();
        palette.set(0, Color::WHITE).unwrap();
        palette.set(14, MELODY).unwrap();
        palette
    }

    #[test]
    fn test_runs_advance_horizontally() {
        let renderer = RecordingRenderer::new(8.0, 16.0);
        let elements = caption_markup::parse("ab\\c[14]cde", &palette(), true).unwrap();
        let placed = layout(&elements, &renderer, &CaptionConfig::default());

        assert_eq!(placed.runs.len(), 2);
        assert_eq!((placed.runs[0].x, placed.runs[0].y), (0.0, 0.0));
        assert_eq!((placed.runs[1].x, placed.runs[1].y), (16.0, 0.0));
        assert_eq!(placed.runs[1].color, MELODY);
        assert_eq!(placed.width, 40.0);
        assert_eq!(placed.line_count, 1);
        assert_eq!(placed.height, 16.0);
    }

    #[test]
    fn test_line_break_resets_x_and_advances_y() {
        let renderer = RecordingRenderer::new(8.0, 16.0);
        let config = CaptionConfig::new().with_origin(4.0, 10.0);
        let elements = caption_markup::parse("abc\nd\n\ne", &palette(), true).unwrap();
        let placed = layout(&elements, &renderer, &config);

        let positions: Vec<_> = placed.runs.iter().map(|r| (r.x, r.y)).collect();
        assert_eq!(positions, vec![(4.0, 10.0), (4.0, 26.0), (4.0, 58.0)]);
        assert_eq!(placed.line_count, 4);
        assert_eq!(placed.width, 24.0);
        assert_eq!(placed.height, 64.0);
    }

    #[test]
    fn test_config_line_height_overrides_metrics() {
        let renderer = RecordingRenderer::new(8.0, 16.0);
        let config = CaptionConfig::new().with_line_height(20.0);
        let elements = caption_markup::parse("a\nb", &palette(), true).unwrap();
        let placed = layout(&elements, &renderer, &config);
        assert_eq!(placed.runs[1].y, 20.0);
    }

    #[test]
    fn test_physical_lines() {
        let lines = |text| physical_lines(text).collect::<Vec<_>>();
        assert_eq!(lines("ab"), vec!["ab"]);
        assert_eq!(lines("a\nb\r\nc"), vec!["a", "b", "c"]);
        assert_eq!(lines("a\n"), vec!["a", ""]);
        assert_eq!(lines("a\rb\r"), vec!["a\rb\r"]);
        assert_eq!(lines(""), vec![""]);
    }

    #[test]
    fn test_verbatim_terminators_follow_line_breaks() {
        let renderer = RecordingRenderer::new(8.0, 16.0);
        let options = ParseOptions::default().with_line_breaks(false);
        let elements = MarkupParser::new(&palette())
            .with_options(options)
            .parse("AB\r\n\\c[14]C\n\nD")
            .unwrap();
        assert_eq!(elements.len(), 2);
        let placed = layout(&elements, &renderer, &CaptionConfig::default());

        let runs: Vec<_> = placed.runs.iter().map(|r| (r.text.as_str(), r.x, r.y)).collect();
        assert_eq!(runs, vec![("AB", 0.0, 0.0), ("C", 0.0, 16.0), ("D", 0.0, 48.0)]);
        assert_eq!(placed.runs[1].color, MELODY);
        assert_eq!(placed.line_count, 4);
        assert_eq!(placed.width, 16.0);
    }

    #[test]
    fn test_empty_caption() {
        let renderer = RecordingRenderer::new(8.0, 16.0);
        let placed = layout(&[], &renderer, &CaptionConfig::default());
        assert_eq!(placed, Layout::default());
    }

    #[test]
    fn test_render_draws_in_order() {
        let mut renderer = RecordingRenderer::new(8.0, 16.0);
        let config = CaptionConfig::default();
        render_markup("\\c[14]Melody\\c! is\n\\c[#BB2929]delicious", &palette(), &mut renderer, &config)
            .unwrap();

        let texts: Vec<_> = renderer.calls().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Melody", " is", "delicious"]);
        assert_eq!(renderer.calls()[0].color, MELODY);
        assert_eq!(renderer.calls()[1].color, Color::WHITE);
        assert_eq!(renderer.calls()[1].x, 48.0);
        assert_eq!(renderer.calls()[2].color, Color::rgb(0xBB, 0x29, 0x29));
        assert_eq!((renderer.calls()[2].x, renderer.calls()[2].y), (0.0, 16.0));
        assert_eq!(renderer.frames(), 1);
    }

    #[test]
    fn test_malformed_markup_draws_nothing() {
        let mut renderer = RecordingRenderer::new(8.0, 16.0);
        let err = render_markup("fine \\c[99]broken", &palette(), &mut renderer, &CaptionConfig::default())
            .unwrap_err();
        assert!(matches!(err, CaptionError::Markup(_)));
        assert!(renderer.calls().is_empty());
        assert_eq!(renderer.frames(), 0);
    }

    #[test]
    fn test_backend_error_stops_drawing() {
        let mut renderer = RecordingRenderer::new(8.0, 16.0).fail_after(1);
        let err = render_markup("a\\c[14]b\\c!c", &palette(), &mut renderer, &CaptionConfig::default())
            .unwrap_err();
        assert!(matches!(err, CaptionError::Render(RenderError::Backend { .. })));
        assert_eq!(renderer.calls().len(), 1);
    }
}
