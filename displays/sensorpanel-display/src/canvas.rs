//! Monochrome frame buffer and canvas
//!
//! The buffer mirrors the SSD1306 memory layout: 8 pages of 128 column
//! bytes, bit 0 of each byte being the top row of its page. Every
//! composition starts from a cleared buffer and is flushed in full.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;
use sensorpanel_core::config::layout::{
    BUFFER_SIZE, DISPLAY_HEIGHT, DISPLAY_PAGES, DISPLAY_WIDTH, GLYPH_HEIGHT, GLYPH_WIDTH,
    PAGE_HEIGHT,
};

use crate::backend::{Clipping, DisplayBackend, DisplayError, FlushTarget, FontSize, PixelValue};
use crate::font::{self, GLYPH_COLUMNS};

const WIDTH: usize = DISPLAY_WIDTH as usize;

/// Size of a full-frame bitmap in bytes
pub const BITMAP_SIZE: usize = BUFFER_SIZE;

/// Frame buffer (1 bit per pixel, organized as pages)
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pages: [[u8; WIDTH]; DISPLAY_PAGES],
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PixelBuffer({} lit)", self.lit_pixels())
    }
}

impl PixelBuffer {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; DISPLAY_PAGES],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Column bytes of one page
    pub fn page(&self, index: usize) -> &[u8; WIDTH] {
        &self.pages[index]
    }

    /// All pages, top to bottom
    pub fn pages(&self) -> &[[u8; WIDTH]; DISPLAY_PAGES] {
        &self.pages
    }

    /// Read a pixel; anything outside the buffer reads as off
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return false;
        }
        let page = (y / PAGE_HEIGHT) as usize;
        let bit = y % PAGE_HEIGHT;
        self.pages[page][x as usize] & (1 << bit) != 0
    }

    /// Write a pixel; writes outside the buffer are dropped
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return;
        }
        let page = (y / PAGE_HEIGHT) as usize;
        let mask = 1u8 << (y % PAGE_HEIGHT);
        let byte = &mut self.pages[page][x as usize];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Number of lit pixels
    pub fn lit_pixels(&self) -> u32 {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones())
            .sum()
    }

    /// Copy a page-ordered bitmap over the whole buffer
    pub fn draw_bitmap(&mut self, bitmap: &[u8; BITMAP_SIZE]) {
        for (page, chunk) in self.pages.iter_mut().zip(bitmap.chunks_exact(WIDTH)) {
            page.copy_from_slice(chunk);
        }
    }

    /// Rasterize `text` with its top-left corner at (`x`, `y`)
    ///
    /// Only the lit pixels of each glyph are written; the background is left
    /// as it is. Glyphs advance by `GLYPH_WIDTH * scale` pixels.
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: FontSize,
        pixel: PixelValue,
    ) -> Clipping {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return Clipping::Rejected;
        }

        let scale = font.scale();
        let advance = GLYPH_WIDTH * scale;
        let on = pixel == PixelValue::On;

        let mut clipping = if y + GLYPH_HEIGHT * scale > DISPLAY_HEIGHT {
            Clipping::Partial
        } else {
            Clipping::None
        };

        let mut cursor = x;
        for ch in text.chars() {
            if cursor >= DISPLAY_WIDTH {
                clipping = Clipping::Partial;
                break;
            }
            if cursor + advance > DISPLAY_WIDTH {
                clipping = Clipping::Partial;
            }

            self.draw_glyph(cursor, y, font::glyph(ch), scale, on);
            cursor = cursor.saturating_add(advance);
        }

        clipping
    }

    fn draw_glyph(&mut self, x: u16, y: u16, glyph: &[u8; GLYPH_COLUMNS], scale: u16, on: bool) {
        for (col, &bits) in glyph.iter().enumerate() {
            for row in 0..GLYPH_HEIGHT {
                if bits & (1 << row) == 0 {
                    continue;
                }
                let px = x + col as u16 * scale;
                let py = y + row * scale;
                for dx in 0..scale {
                    for dy in 0..scale {
                        self.set_pixel(px + dx, py + dy, on);
                    }
                }
            }
        }
    }
}

/// Canvas: a pixel buffer bound to the transport that displays it
pub struct Canvas<T> {
    buffer: PixelBuffer,
    target: T,
}

impl<T: FlushTarget> Canvas<T> {
    /// Create a blank canvas flushing to `target`
    pub fn new(target: T) -> Self {
        Self {
            buffer: PixelBuffer::new(),
            target,
        }
    }

    /// Get the frame buffer
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Get the transport
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Get the transport mutably
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Release the transport
    pub fn into_target(self) -> T {
        self.target
    }
}

impl<T: FlushTarget> DisplayBackend for Canvas<T> {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: FontSize,
        pixel: PixelValue,
    ) -> Clipping {
        self.buffer.draw_string(x, y, text, font, pixel)
    }

    fn draw_bitmap(&mut self, bitmap: &[u8; BITMAP_SIZE]) {
        self.buffer.draw_bitmap(bitmap);
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.target.flush(&self.buffer)
    }

    fn dimensions(&self) -> (u16, u16) {
        (DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl<T> OriginDimensions for Canvas<T> {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH as u32, DISPLAY_HEIGHT as u32)
    }
}

impl<T> DrawTarget for Canvas<T> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 {
                continue;
            }
            // Out-of-range coordinates are dropped by set_pixel
            let x = u16::try_from(coord.x).unwrap_or(u16::MAX);
            let y = u16::try_from(coord.y).unwrap_or(u16::MAX);
            self.buffer.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }
}
