// Fri Oct 16 2026 - Alex

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    value: usize,
}

impl Alignment {
    pub fn new(value: usize) -> Self {
        assert!(value > 0 && value.is_power_of_two());
        Self { value }
    }

    pub fn pointer() -> Self {
        Self::new(crate::reflect::POINTER_WIDTH)
    }

    /// Rounds `offset` up to the next multiple of this alignment.
    pub fn align(&self, offset: usize) -> usize {
        (offset + self.value - 1) & !(self.value - 1)
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::pointer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_rounds_up() {
        let eight = Alignment::new(8);
        assert_eq!(eight.align(0), 0);
        assert_eq!(eight.align(1), 8);
        assert_eq!(eight.align(8), 8);
        assert_eq!(eight.align(13), 16);
    }
}
