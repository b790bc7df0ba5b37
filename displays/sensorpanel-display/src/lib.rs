//! Rendering core for the SensorPanel OLED
//!
//! This crate provides:
//! - `Canvas`, a page-organized 128x64 monochrome buffer with text and
//!   bitmap primitives (also usable as an `embedded-graphics` draw target)
//! - `ScreenComposer`, which lays out the network, motion, environment,
//!   light and bus status screens
//! - `DisplayStateMachine`, which composes the screen the scheduler selected
//!
//! # Architecture
//!
//! The composer draws through the `DisplayBackend` trait. `Canvas` is the
//! standard backend; it hands finished frames to a `FlushTarget`, which is
//! where the panel driver plugs in. Sensor and network values arrive as a
//! `DeviceSnapshot` on every tick, so nothing here holds shared state.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod canvas;
pub mod composer;
pub mod font;
pub mod logo;
pub mod machine;
pub mod metrics;

// Re-export key types
pub use backend::{Clipping, DisplayBackend, DisplayError, FlushTarget, FontSize, PixelValue};
pub use canvas::{Canvas, PixelBuffer, BITMAP_SIZE};
pub use composer::ScreenComposer;
pub use machine::{DisplayStateMachine, TickOutcome};
pub use metrics::{next_column_after, text_pixel_width};
