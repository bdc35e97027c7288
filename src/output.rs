//! Strip transmission abstraction.
//!
//! Defines [`StripOutput`], the raw byte sink a [`PixelBuffer`](crate::PixelBuffer)
//! flushes into, and [`SmartLedsOutput`] for reusing existing `smart-leds` drivers.

use crate::buffer::{B, BYTES_PER_LED, G, R};
use smart_leds::{RGB8, SmartLedsWrite};

/// Trait for abstracting the strip transmission routine.
///
/// Implement this for your LED data line (bit-banged GPIO, SPI, PIO, RMT, etc.).
/// The implementation owns the output pin.
pub trait StripOutput {
    /// Error reported by the hardware.
    type Error;

    /// Sends `data` to the strip as-is, in wire order (G, R, B per LED).
    ///
    /// The byte count is `data.len()`. Called with interrupts masked, so it
    /// must not wait on anything interrupt-driven.
    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Adapts a [`SmartLedsWrite`] driver into a [`StripOutput`].
///
/// Each stored GRB triple is handed to the driver as an [`RGB8`]. The driver
/// applies its own wire ordering, so the bytes reach the strip unchanged.
/// Trailing bytes that do not make up a whole LED are ignored.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wraps a `smart-leds` driver.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns a reference to the wrapped driver.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the adapter, returning the wrapped driver.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> StripOutput for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;

    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let pixels = data
            .chunks_exact(BYTES_PER_LED)
            .map(|grb| RGB8::new(grb[R], grb[G], grb[B]));
        self.writer.write(pixels)
    }
}
