//! Named colors for use with [`PixelBuffer::set_color`](crate::PixelBuffer::set_color)
//! and [`PixelBuffer::fill_color`](crate::PixelBuffer::fill_color).
//!
//! Values are full-intensity 8-bit sRGB; the buffer's brightness is applied on write.

use palette::Srgb;

pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
pub const YELLOW: Srgb<u8> = Srgb::new(255, 255, 0);
pub const CYAN: Srgb<u8> = Srgb::new(0, 255, 255);
pub const MAGENTA: Srgb<u8> = Srgb::new(255, 0, 255);
pub const ORANGE: Srgb<u8> = Srgb::new(255, 128, 0);
pub const PURPLE: Srgb<u8> = Srgb::new(128, 0, 255);
