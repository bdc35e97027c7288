//! Interrupt masking for timing-sensitive strip transfers.

/// Trait for abstracting interrupt masking.
///
/// Implement this for your platform's global interrupt disable/enable pair:
/// disable, run `f`, then re-enable, also when `f` returns an error. Masked
/// regions are closure-scoped, so they always nest and are released in
/// reverse order of acquisition.
pub trait InterruptMask {
    /// Runs `f` with interrupt delivery disabled and restores it afterward.
    fn without_interrupts<R>(&mut self, f: impl FnOnce() -> R) -> R;
}

/// [`InterruptMask`] backed by the `critical-section` crate.
///
/// Works on any target with a `critical-section` implementation linked in
/// (cortex-m, riscv, the `std` host impl, ...). Holds no state; the section
/// is acquired and released inside [`critical_section::with`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CriticalSectionMask;

impl CriticalSectionMask {
    /// Creates a mask.
    pub const fn new() -> Self {
        CriticalSectionMask
    }
}

impl InterruptMask for CriticalSectionMask {
    fn without_interrupts<R>(&mut self, f: impl FnOnce() -> R) -> R {
        critical_section::with(|_cs| f())
    }
}
