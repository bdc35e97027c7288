//! Brightness-scaled pixel storage for a single LED strip.
//!
//! Provides [`PixelBuffer`], which holds the strip's channel bytes in wire
//! order and flushes them through a [`StripOutput`] with interrupts masked.

use crate::interrupt::InterruptMask;
use crate::output::StripOutput;
use crate::types::{Brightness, PixelError};
use palette::Srgb;

/// Bytes per LED (G, R, B).
pub const BYTES_PER_LED: usize = 3;

// Channel offsets within one LED's bytes.
pub(crate) const G: usize = 0;
pub(crate) const R: usize = 1;
pub(crate) const B: usize = 2;

/// Channel buffer for a strip of `N` LEDs.
///
/// Bytes are stored in the order WS2812-class strips expect on the wire:
/// LED `n` occupies offsets `3n` (green), `3n + 1` (red) and `3n + 2` (blue).
/// Every color write is scaled by the buffer's [`Brightness`] before it is
/// stored, so the stored bytes are exactly what [`show`](Self::show) sends.
///
/// Per-LED methods index the buffer directly and panic if `n >= N`. Use the
/// `try_` variants where the index is not known to be valid.
///
/// # Type Parameters
/// * `N` - Number of LEDs on the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [[u8; BYTES_PER_LED]; N],
    brightness: Brightness,
}

impl<const N: usize> PixelBuffer<N> {
    /// Creates a dark buffer with the given brightness scale.
    ///
    /// Usable in `const` context, so the buffer can live in a `static`.
    pub const fn new(brightness: Brightness) -> Self {
        Self {
            pixels: [[0; BYTES_PER_LED]; N],
            brightness,
        }
    }

    /// Number of LEDs in the buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true for a zero-length strip.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current brightness scale.
    #[inline]
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Changes the brightness scale for subsequent writes.
    ///
    /// Bytes already in the buffer are left as they are.
    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }

    /// Sets LED `n` to the given color, scaled by the current brightness.
    ///
    /// # Panics
    /// If `n >= N`.
    pub fn set(&mut self, n: usize, r: u8, g: u8, b: u8) {
        let scale = self.brightness;
        let pixel = &mut self.pixels[n];
        pixel[G] = scale.scale(g);
        pixel[R] = scale.scale(r);
        pixel[B] = scale.scale(b);
    }

    /// Checked version of [`set`](Self::set).
    pub fn try_set(&mut self, n: usize, r: u8, g: u8, b: u8) -> Result<(), PixelError> {
        self.check_index(n)?;
        self.set(n, r, g, b);
        Ok(())
    }

    /// Sets LED `n` from an 8-bit sRGB color.
    ///
    /// # Panics
    /// If `n >= N`.
    #[inline]
    pub fn set_color(&mut self, n: usize, color: Srgb<u8>) {
        self.set(n, color.red, color.green, color.blue);
    }

    /// Sets every LED to the same color.
    pub fn fill(&mut self, r: u8, g: u8, b: u8) {
        for n in 0..N {
            self.set(n, r, g, b);
        }
    }

    /// Sets every LED from an 8-bit sRGB color.
    #[inline]
    pub fn fill_color(&mut self, color: Srgb<u8>) {
        self.fill(color.red, color.green, color.blue);
    }

    /// Turns every LED off.
    pub fn clear(&mut self) {
        self.pixels = [[0; BYTES_PER_LED]; N];
    }

    /// Dims LED `n` by `amount` on each channel, stopping at zero.
    ///
    /// Every channel decays from its own stored value. Some C `pixel_fade`
    /// helpers for these strips compute blue from the red byte instead; code
    /// ported from them will see blue fade differently here.
    ///
    /// # Panics
    /// If `n >= N`.
    pub fn fade(&mut self, n: usize, amount: u8) {
        for channel in self.pixels[n].iter_mut() {
            *channel = channel.saturating_sub(amount);
        }
    }

    /// Checked version of [`fade`](Self::fade).
    pub fn try_fade(&mut self, n: usize, amount: u8) -> Result<(), PixelError> {
        self.check_index(n)?;
        self.fade(n, amount);
        Ok(())
    }

    /// Dims every stored byte by `amount`, stopping at zero.
    pub fn fade_all(&mut self, amount: u8) {
        for byte in self.as_bytes_mut() {
            *byte = byte.saturating_sub(amount);
        }
    }

    /// Returns the stored (already scaled) color of LED `n`.
    pub fn get(&self, n: usize) -> Option<Srgb<u8>> {
        self.pixels
            .get(n)
            .map(|pixel| Srgb::new(pixel[R], pixel[G], pixel[B]))
    }

    /// The raw buffer in wire order, `3 * N` bytes long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    /// Mutable access to the raw buffer. Writes here bypass brightness scaling.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.pixels.as_flattened_mut()
    }

    /// Sends the whole buffer to the strip.
    ///
    /// Interrupts are disabled through `mask` for the duration of the
    /// transmission and re-enabled before this returns, whether or not the
    /// transmission succeeded.
    ///
    /// # Returns
    /// * `Ok(())` - The buffer was handed to the strip
    /// * `Err` - The strip output's own error, unchanged
    pub fn show<S, M>(&self, strip: &mut S, mask: &mut M) -> Result<(), S::Error>
    where
        S: StripOutput,
        M: InterruptMask,
    {
        let data = self.as_bytes();

        #[cfg(feature = "defmt")]
        defmt::trace!("transmitting {=usize} bytes", data.len());

        mask.without_interrupts(|| strip.transmit(data))
    }

    fn check_index(&self, n: usize) -> Result<(), PixelError> {
        if n < N {
            Ok(())
        } else {
            Err(PixelError::IndexOutOfRange { index: n, len: N })
        }
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new(Brightness::FULL)
    }
}
