//! Core types shared by the buffer and its outputs.

/// Global brightness scale applied to every channel write.
///
/// The scale runs from `0` (dark) to `256` (channels stored unchanged). A
/// channel value `c` is stored as `c * level / 256`, truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u16);

impl Brightness {
    /// Highest accepted level.
    pub const MAX_LEVEL: u16 = 256;

    /// Full brightness, channels are stored as given.
    pub const FULL: Self = Brightness(Self::MAX_LEVEL);

    /// Zero brightness, every write stores zero.
    pub const OFF: Self = Brightness(0);

    /// Creates a brightness scale. Levels above 256 are clamped to 256.
    #[inline]
    pub const fn new(level: u16) -> Self {
        if level > Self::MAX_LEVEL {
            Self::FULL
        } else {
            Brightness(level)
        }
    }

    /// Returns the scale level in `0..=256`.
    #[inline]
    pub const fn level(self) -> u16 {
        self.0
    }

    /// Scales a single channel value.
    ///
    /// `255 * 256` still fits in a `u16`, so the product never overflows.
    #[inline]
    pub const fn scale(self, channel: u8) -> u8 {
        ((channel as u16 * self.0) / 256) as u8
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<u8> for Brightness {
    fn from(level: u8) -> Self {
        Brightness(level as u16)
    }
}

/// Pixel buffer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelError {
    /// LED index is not within the strip.
    IndexOutOfRange {
        /// Requested LED index
        index: usize,
        /// Number of LEDs in the buffer
        len: usize,
    },
}

impl core::fmt::Display for PixelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PixelError::IndexOutOfRange { index, len } => {
                write!(f, "LED index {} out of range for strip of {} LEDs", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PixelError {}
