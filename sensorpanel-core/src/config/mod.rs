//! Display configuration
//!
//! Layout is fixed at compile time. The composer reads anchors through
//! [`LayoutConfig`] so that alternative panels can supply their own set.

pub mod layout;

pub use layout::{Anchor, LayoutConfig};
