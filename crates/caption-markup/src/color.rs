/// 8-bit RGBA color. Parsed runs copy their color by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 0xFF {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 0xFF };
    pub const WHITE: Color = Color { r: 0xFF, g: 0xFF, b: 0xFF, a: 0xFF };

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Decode `RRGGBB` or `#RRGGBB`. Anything other than exactly six hex
    /// digits yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = u32::from_str_radix(hex, 16).ok()?;
        Some(Color::rgb(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_accepts_optional_hash() {
        assert_eq!(Color::from_hex("#BB2929"), Some(Color::rgb(0xBB, 0x29, 0x29)));
        assert_eq!(Color::from_hex("fff178"), Some(Color::rgb(0xFF, 0xF1, 0x78)));
    }

    #[test]
    fn test_from_hex_rejects_wrong_length_and_digits() {
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#FFF1789"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("+12345"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(0xFF, 0xF1, 0x78).to_string(), "#FFF178");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
        assert_eq!(Color::default(), Color::BLACK);
    }
}
