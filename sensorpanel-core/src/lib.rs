//! Board-agnostic core logic for the SensorPanel display
//!
//! This crate contains everything the display needs that does not depend on
//! a specific panel or bus:
//!
//! - Snapshot types for sensor, network and bus-health readings
//! - Fixed-capacity numeric-to-text conversion
//! - Unit conversions and Wi-Fi channel derivation
//! - Layout configuration (geometry, glyph metrics, anchors)
//! - The screen selector driven by the external scheduler

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod format;
pub mod snapshot;
pub mod state;
pub mod units;

// Re-export key types
pub use format::{float_to_text, int_to_text, FormatError, NumberText};
pub use snapshot::{BusHealth, DeviceSnapshot, Health, NetworkSnapshot, SensorSnapshot};
pub use state::{ScreenState, StatusStep};
