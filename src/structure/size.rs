// Fri Oct 16 2026 - Alex

use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Size {
    value: usize,
}

impl Size {
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// `"1 byte"`, `"7 bytes"`.
    pub fn describe(&self) -> String {
        if self.value == 1 {
            "1 byte".to_string()
        } else {
            format!("{} bytes", self.value)
        }
    }
}

impl Add for Size {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { value: self.value + rhs.value }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
