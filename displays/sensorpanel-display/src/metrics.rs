//! Text width arithmetic for the fixed-pitch line font

use sensorpanel_core::config::layout::GLYPH_WIDTH;

use crate::backend::FontSize;

/// Width of `text` in the line font, in pixels
///
/// Every character occupies one glyph cell, including characters the font
/// cannot draw. Saturates at `u16::MAX`.
pub fn text_pixel_width(text: &str) -> u16 {
    scaled_text_width(text, FontSize::Line)
}

/// Width of `text` in the given font, in pixels
pub fn scaled_text_width(text: &str, font: FontSize) -> u16 {
    let chars = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    chars.saturating_mul(GLYPH_WIDTH.saturating_mul(font.scale()))
}

/// Column just past `text` drawn at `origin`
pub fn next_column_after(origin: u16, text: &str) -> u16 {
    origin.saturating_add(text_pixel_width(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_counts_characters() {
        assert_eq!(text_pixel_width(""), 0);
        assert_eq!(text_pixel_width("ABC"), 18);
        assert_eq!(text_pixel_width("Axis X:"), 42);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        assert_eq!(text_pixel_width("°F"), 12);
    }

    #[test]
    fn test_title_width() {
        assert_eq!(scaled_text_width("Gyro.", FontSize::Title), 60);
    }

    #[test]
    fn test_next_column() {
        assert_eq!(next_column_after(0, "ABC"), 18);
        assert_eq!(next_column_after(48, "12.50"), 78);
        assert_eq!(next_column_after(u16::MAX - 1, "AB"), u16::MAX);
    }
}
