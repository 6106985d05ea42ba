// Fri Oct 16 2026 - Alex

use std::fmt;

/// A raw address observed on a live instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    value: usize,
}

impl Address {
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    pub fn from_ptr(ptr: *const u8) -> Self {
        Self { value: ptr as usize }
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    /// Bytes from `base` up to this address, `None` if `base` lies above.
    pub fn offset_from(&self, base: Address) -> Option<usize> {
        self.value.checked_sub(base.value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.value)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}
