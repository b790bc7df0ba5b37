//! Display geometry and layout constants.
//!
//! All positions are in pixels with the origin at the top-left corner. The
//! panel stores pixels in 8-row pages, one byte per column per page.

// =============================================================================
// Panel Geometry
// =============================================================================

/// Panel width in pixels (SSD1306 128x64)
pub const DISPLAY_WIDTH: u16 = 128;

/// Panel height in pixels
pub const DISPLAY_HEIGHT: u16 = 64;

/// Rows of pixels per page
pub const PAGE_HEIGHT: u16 = 8;

/// Number of pages in the frame
pub const DISPLAY_PAGES: usize = (DISPLAY_HEIGHT / PAGE_HEIGHT) as usize;

/// Size of a full frame in bytes
pub const BUFFER_SIZE: usize = DISPLAY_WIDTH as usize * DISPLAY_PAGES;

// =============================================================================
// Glyph Metrics
// =============================================================================

/// Horizontal footprint of one glyph at line size (5 columns + 1 spacing)
pub const GLYPH_WIDTH: u16 = 6;

/// Vertical footprint of one glyph at line size
pub const GLYPH_HEIGHT: u16 = 8;

/// Scale factor of the line font
pub const LINE_FONT_SCALE: u16 = 1;

/// Scale factor of the title font
pub const TITLE_FONT_SCALE: u16 = 2;

/// Gap left between a label and its value, and between a value and its unit
pub const FIELD_GAP: u16 = GLYPH_WIDTH;

// =============================================================================
// Anchors
// =============================================================================

/// A pixel position where a layout element starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
}

impl Anchor {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Title row; the title font is 16 pixels tall
pub const TITLE: Anchor = Anchor::new(0, 0);

/// Number of text lines below the title
pub const LINE_COUNT: usize = 4;

/// Text lines, 12 pixels apart so the last one ends at row 60
pub const LINES: [Anchor; LINE_COUNT] = [
    Anchor::new(0, 16),
    Anchor::new(0, 28),
    Anchor::new(0, 40),
    Anchor::new(0, 52),
];

/// Layout anchors used by the screen composer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutConfig {
    /// Title position
    pub title: Anchor,
    /// Line positions, top to bottom
    pub lines: [Anchor; LINE_COUNT],
    /// Gap between chained fields on one line
    pub field_gap: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: TITLE,
            lines: LINES,
            field_gap: FIELD_GAP,
        }
    }
}

impl LayoutConfig {
    /// Anchor of a text line (0-based), clamped to the last line
    pub fn line(&self, index: usize) -> Anchor {
        self.lines[index.min(LINE_COUNT - 1)]
    }
}
