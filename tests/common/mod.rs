//! Shared test infrastructure for pixel-buffer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::RefCell;
use pixel_buffer::{InterruptMask, StripOutput};
use smart_leds::{RGB8, SmartLedsWrite};

// ============================================================================
// Event Log
// ============================================================================

/// Hardware-side events, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Disable,
    Transmit(usize),
    Enable,
}

/// Ordered record shared by the mock strip and the mock interrupt mask
pub struct EventLog {
    events: RefCell<heapless::Vec<Event, 16>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn record(&self, event: Event) {
        let _ = self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> heapless::Vec<Event, 16> {
        self.events.borrow().clone()
    }
}

// ============================================================================
// Mock Interrupt Mask
// ============================================================================

/// Interrupt mask that logs when masking starts and ends
pub struct MockInterrupts<'a> {
    log: &'a EventLog,
    masked: bool,
}

impl<'a> MockInterrupts<'a> {
    pub fn new(log: &'a EventLog) -> Self {
        Self { log, masked: false }
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }
}

impl InterruptMask for MockInterrupts<'_> {
    fn without_interrupts<R>(&mut self, f: impl FnOnce() -> R) -> R {
        self.masked = true;
        self.log.record(Event::Disable);

        let result = f();

        self.masked = false;
        self.log.record(Event::Enable);
        result
    }
}

// ============================================================================
// Mock Strip
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmitError;

/// Strip output that records every transmitted frame
pub struct MockStrip<'a> {
    log: &'a EventLog,
    frames: heapless::Vec<heapless::Vec<u8, 64>, 4>,
    fail: bool,
}

impl<'a> MockStrip<'a> {
    pub fn new(log: &'a EventLog) -> Self {
        Self {
            log,
            frames: heapless::Vec::new(),
            fail: false,
        }
    }

    /// Strip whose every transmission fails
    pub fn failing(log: &'a EventLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }

    pub fn frames(&self) -> &[heapless::Vec<u8, 64>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(|frame| frame.as_slice())
    }
}

impl StripOutput for MockStrip<'_> {
    type Error = TransmitError;

    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.log.record(Event::Transmit(data.len()));

        let mut frame = heapless::Vec::new();
        let _ = frame.extend_from_slice(data);
        let _ = self.frames.push(frame);

        if self.fail { Err(TransmitError) } else { Ok(()) }
    }
}

// ============================================================================
// Mock smart-leds Driver
// ============================================================================

/// `smart-leds` driver that keeps the last written pixels
pub struct MockSmartLeds {
    pixels: heapless::Vec<RGB8, 16>,
    writes: usize,
}

impl MockSmartLeds {
    pub fn new() -> Self {
        Self {
            pixels: heapless::Vec::new(),
            writes: 0,
        }
    }

    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SmartLedsWrite for MockSmartLeds {
    type Error = TransmitError;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.writes += 1;
        self.pixels.clear();
        for pixel in iterator {
            let _ = self.pixels.push(pixel.into());
        }
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Expected stored value for a channel at the given brightness level
pub fn scaled(channel: u8, level: u16) -> u8 {
    ((channel as u32 * level as u32) / 256) as u8
}
