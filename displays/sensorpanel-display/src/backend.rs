//! Display backend traits
//!
//! [`DisplayBackend`] is what the screen composer draws on. [`FlushTarget`]
//! is the device transport a [`Canvas`](crate::Canvas) hands its finished
//! frame to.

use sensorpanel_core::config::layout::{LINE_FONT_SCALE, TITLE_FONT_SCALE};

use crate::canvas::{PixelBuffer, BITMAP_SIZE};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
    /// Transfer did not fit the transport buffer
    BufferOverflow,
}

/// Font sizes supported by the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// 6x8 cells, used for data lines
    Line,
    /// 12x16 cells, used for screen titles
    Title,
}

impl FontSize {
    /// Pixel scale applied to each glyph pixel
    pub const fn scale(&self) -> u16 {
        match self {
            FontSize::Line => LINE_FONT_SCALE,
            FontSize::Title => TITLE_FONT_SCALE,
        }
    }
}

/// Value written for each lit glyph pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelValue {
    On,
    Off,
}

/// How much of a draw request landed inside the buffer
///
/// Pixels outside the buffer are dropped. A request whose origin is already
/// outside draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Clipping {
    /// Everything was drawn
    None,
    /// Drawn up to the buffer edge
    Partial,
    /// Nothing was drawn
    Rejected,
}

/// Device transport for a finished frame
pub trait FlushTarget {
    /// Send the whole buffer to the panel
    fn flush(&mut self, buffer: &PixelBuffer) -> Result<(), DisplayError>;
}

impl<T: FlushTarget + ?Sized> FlushTarget for &mut T {
    fn flush(&mut self, buffer: &PixelBuffer) -> Result<(), DisplayError> {
        (**self).flush(buffer)
    }
}

/// Display backend trait
///
/// Provides the drawing surface the screen composer works against. Drawing
/// is infallible; only `flush` talks to hardware.
pub trait DisplayBackend {
    /// Turn every pixel off
    fn clear(&mut self);

    /// Draw text with its top-left corner at (`x`, `y`) in pixels
    fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: FontSize,
        pixel: PixelValue,
    ) -> Clipping;

    /// Replace the whole frame with a page-ordered bitmap
    fn draw_bitmap(&mut self, bitmap: &[u8; BITMAP_SIZE]);

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions in pixels (width, height)
    fn dimensions(&self) -> (u16, u16);
}
