//! Palette file loading
//!
//! Two plain-text formats are accepted:
//!
//! * a hex list, one `RRGGBB` / `#RRGGBB` per line filling slots in order,
//!   with optional `N: RRGGBB` or `N = RRGGBB` lines to target a slot and `;`
//!   comments;
//! * JASC-PAL (`JASC-PAL`, `0100`, entry count, then `R G B` triplets).
//!
//! Slots the file never mentions stay black.

use std::fs;
use std::path::Path;

use caption_markup::{Color, Palette, PALETTE_SIZE};
use tracing::{debug, warn};

use crate::constants::{BUILTIN_PALETTE, JASC_PAL_HEADER, JASC_PAL_VERSION};
use crate::error::{CaptionError, CaptionResult};

/// The palette used when no palette file is given.
pub fn builtin_palette() -> Palette {
    Palette::from(BUILTIN_PALETTE)
}

/// Read and parse a palette file.
///
/// # Errors
///
/// [`CaptionError::Io`] if the file cannot be read, [`CaptionError::PaletteFormat`]
/// if its content is malformed.
pub fn load_palette(path: impl AsRef<Path>) -> CaptionResult<Palette> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CaptionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let palette = parse_palette(&text)?;
    debug!(path = %path.display(), "loaded palette file");
    Ok(palette)
}

/// Parse palette file content, detecting the format from the first line.
///
/// # Errors
///
/// [`CaptionError::PaletteFormat`] with the 1-based line number of the problem.
pub fn parse_palette(text: &str) -> CaptionResult<Palette> {
    let is_jasc = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|line| line == JASC_PAL_HEADER);
    if is_jasc {
        parse_jasc(text)
    } else {
        parse_hex_list(text)
    }
}

fn format_error(line: usize, message: impl Into<String>) -> CaptionError {
    CaptionError::PaletteFormat {
        line,
        message: message.into(),
    }
}

fn parse_hex_list(text: &str) -> CaptionResult<Palette> {
    let mut palette = Palette::new();
    let mut next = 0;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.split(';').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let (index, value) = match line.split_once([':', '=']) {
            Some((slot, value)) => {
                let slot = slot.trim();
                let index = slot
                    .parse::<usize>()
                    .map_err(|_| format_error(line_no, format!("invalid slot number {:?}", slot)))?;
                (index, value.trim())
            }
            None => (next, line),
        };

        let color = Color::from_hex(value).ok_or_else(|| {
            format_error(line_no, format!("expected a RRGGBB color, found {:?}", value))
        })?;
        palette
            .set(index, color)
            .map_err(|e| format_error(line_no, e.to_string()))?;
        next = index + 1;
    }

    Ok(palette)
}

fn parse_jasc(text: &str) -> CaptionResult<Palette> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    // Header already checked by the caller
    let _ = lines.next();

    let (line_no, version) = lines
        .next()
        .ok_or_else(|| format_error(1, "missing JASC-PAL version line"))?;
    if version != JASC_PAL_VERSION {
        return Err(format_error(line_no, format!("unsupported JASC-PAL version {:?}", version)));
    }

    let (line_no, count) = lines
        .next()
        .ok_or_else(|| format_error(line_no, "missing JASC-PAL entry count"))?;
    let count: usize = count
        .parse()
        .map_err(|_| format_error(line_no, format!("invalid entry count {:?}", count)))?;
    if count > PALETTE_SIZE {
        warn!(count, "palette file has more than {} entries, extra entries ignored", PALETTE_SIZE);
    }

    let mut colors = Vec::with_capacity(count.min(PALETTE_SIZE));
    let mut last_line = line_no;
    for index in 0..count {
        let (line_no, entry) = lines.next().ok_or_else(|| {
            format_error(last_line, format!("expected {} entries, found {}", count, index))
        })?;
        last_line = line_no;
        if index >= PALETTE_SIZE {
            continue;
        }
        let color = parse_triplet(entry).ok_or_else(|| {
            format_error(line_no, format!("expected \"R G B\" with values 0-255, found {:?}", entry))
        })?;
        colors.push(color);
    }

    Ok(Palette::from_colors(colors)?)
}

fn parse_triplet(entry: &str) -> Option<Color> {
    let mut parts = entry.split_whitespace().map(str::parse::<u8>);
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::rgb(r, g, b))
}
