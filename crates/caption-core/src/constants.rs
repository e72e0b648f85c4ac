// src/constants.rs
use caption_markup::Color;

// Layout constants
pub const DEFAULT_ORIGIN_X: f64 = 0.0;
pub const DEFAULT_ORIGIN_Y: f64 = 0.0;
pub const DEFAULT_EMIT_LINE_BREAKS: bool = true;

// Terminal cell metrics, one unit per column / row
pub const TERMINAL_CELL_WIDTH: f64 = 1.0;
pub const TERMINAL_LINE_HEIGHT: f64 = 1.0;

// Glyph metrics for the recording backend
pub const RECORDING_CELL_WIDTH: f64 = 8.0;
pub const RECORDING_LINE_HEIGHT: f64 = 16.0;

// Palette files
pub const JASC_PAL_HEADER: &str = "JASC-PAL";
pub const JASC_PAL_VERSION: &str = "0100";

/// Default caption palette: slot 0 is the body text color.
pub const BUILTIN_PALETTE: [Color; 32] = [
    Color::rgb(0xFF, 0xFF, 0xFF), // 0: White (default text)
    Color::rgb(0x20, 0xA0, 0xD6), // 1: Blue
    Color::rgb(0xFF, 0x78, 0x4C), // 2: Orange
    Color::rgb(0x66, 0xCC, 0x40), // 3: Green
    Color::rgb(0x99, 0xCC, 0xFF), // 4: Light Blue
    Color::rgb(0xCC, 0xC0, 0xFF), // 5: Lavender
    Color::rgb(0xFF, 0xFF, 0xA0), // 6: Pale Yellow
    Color::rgb(0x80, 0x80, 0x80), // 7: Gray
    Color::rgb(0xC0, 0xC0, 0xC0), // 8: Silver
    Color::rgb(0x20, 0x80, 0xCC), // 9: Deep Blue
    Color::rgb(0xFF, 0x38, 0x10), // 10: Red
    Color::rgb(0x00, 0xA0, 0x10), // 11: Dark Green
    Color::rgb(0x3E, 0x9A, 0xDE), // 12: Sky
    Color::rgb(0xA0, 0x98, 0xFF), // 13: Violet
    Color::rgb(0xFF, 0xF1, 0x78), // 14: Yellow
    Color::rgb(0x00, 0x00, 0x00), // 15: Black
    Color::rgb(0x84, 0xAA, 0xFF), // 16: Periwinkle
    Color::rgb(0xFF, 0xFF, 0x40), // 17: Bright Yellow
    Color::rgb(0xFF, 0x20, 0x20), // 18: Bright Red
    Color::rgb(0x20, 0x20, 0x40), // 19: Navy
    Color::rgb(0xE0, 0x80, 0x40), // 20: Amber
    Color::rgb(0xF0, 0xC0, 0x40), // 21: Gold
    Color::rgb(0x40, 0x80, 0xC0), // 22: Steel Blue
    Color::rgb(0x40, 0xC0, 0xF0), // 23: Cyan
    Color::rgb(0x80, 0xFF, 0x80), // 24: Mint
    Color::rgb(0xC0, 0x80, 0x80), // 25: Dusty Rose
    Color::rgb(0x80, 0x80, 0xFF), // 26: Soft Blue
    Color::rgb(0xFF, 0x80, 0xFF), // 27: Pink
    Color::rgb(0x00, 0xA0, 0x40), // 28: Emerald
    Color::rgb(0x00, 0xE0, 0x60), // 29: Spring Green
    Color::rgb(0xA0, 0x60, 0xE0), // 30: Purple
    Color::rgb(0xC0, 0x80, 0xFF), // 31: Orchid
];
