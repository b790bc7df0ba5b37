//! Panel driver implementations
//!
//! This crate provides concrete [`FlushTarget`](sensorpanel_display::FlushTarget)
//! implementations for the panels SensorPanel runs on:
//!
//! - SSD1306 over I2C (also SH1106 via a column offset)

#![no_std]
#![deny(unsafe_code)]

pub mod ssd1306;

pub use ssd1306::{Ssd1306, Ssd1306Config};
