//! Fixed 32-slot color table consulted by `\c[N]` escapes.
//!
//! The palette is a plain value: build one, populate it (for example from a
//! palette file), then lend it to the parser by shared reference. Mutation
//! needs `&mut Palette`, so a palette cannot change underneath a running parse.

use crate::color::Color;
use crate::error::PaletteError;

/// Number of slots in a [`Palette`].
pub const PALETTE_SIZE: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// All slots black.
    pub fn new() -> Self {
        Self {
            colors: [Color::default(); PALETTE_SIZE],
        }
    }

    /// Build a palette from up to [`PALETTE_SIZE`] colors, filling slots from 0.
    /// Remaining slots stay black.
    pub fn from_colors<I>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = Color>,
    {
        let mut palette = Self::new();
        let mut count = 0;
        for color in colors {
            if count < PALETTE_SIZE {
                palette.colors[count] = color;
            }
            count += 1;
        }
        if count > PALETTE_SIZE {
            return Err(PaletteError::TooManyColors { count });
        }
        Ok(palette)
    }

    pub fn get(&self, index: usize) -> Result<Color, PaletteError> {
        self.colors
            .get(index)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange { index })
    }

    pub fn set(&mut self, index: usize, color: Color) -> Result<(), PaletteError> {
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfRange { index })?;
        *slot = color;
        Ok(())
    }

    /// Color of slot 0, the implicit default for parsed text.
    pub fn default_color(&self) -> Color {
        self.colors[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.colors.iter().copied().enumerate()
    }
}

impl From<[Color; PALETTE_SIZE]> for Palette {
    fn from(colors: [Color; PALETTE_SIZE]) -> Self {
        Self { colors }
    }
}
