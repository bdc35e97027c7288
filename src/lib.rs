#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PixelBuffer`**: Owns the strip's channel bytes in wire (G, R, B) order
//! - **`Brightness`**: Scale (0-256) applied to every color write
//! - **`StripOutput`**: Trait to implement for your strip transmission routine
//! - **`SmartLedsOutput`**: Adapter for existing `smart-leds` drivers
//! - **`InterruptMask`**: Trait to implement for your interrupt disable/enable pair, closure-scoped
//! - **`CriticalSectionMask`**: `InterruptMask` backed by the `critical-section` crate
//!
//! Colors are plain 8-bit channels, either as separate `r, g, b` arguments or as
//! `Srgb<u8>`. No gamma correction or color-space conversion is applied.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod buffer;
pub mod colors;
pub mod interrupt;
pub mod output;
pub mod types;

pub use buffer::{BYTES_PER_LED, PixelBuffer};
pub use colors::*;
pub use interrupt::{CriticalSectionMask, InterruptMask};
pub use output::{SmartLedsOutput, StripOutput};
pub use types::{Brightness, PixelError};
