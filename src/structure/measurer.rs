// Fri Oct 16 2026 - Alex

use crate::probe::AddressProbe;
use crate::reflect::{TypeRef, POINTER_WIDTH};
use crate::structure::{LayoutError, Size};

/// Measures the true per-element footprint of a type, trailing padding
/// included, by embedding two instances back to back in a `Twin` and taking
/// the distance between them.
pub struct SizeMeasurer<'a> {
    probe: &'a AddressProbe,
}

impl<'a> SizeMeasurer<'a> {
    pub fn new(probe: &'a AddressProbe) -> Self {
        Self { probe }
    }

    pub fn measure_size(&self, ty: &TypeRef) -> Result<Size, LayoutError> {
        // only the handle of a reference-semantic type lives inline
        if ty.semantics().is_reference() {
            return Ok(Size::new(POINTER_WIDTH));
        }

        let twin = ty
            .twin()
            .ok_or_else(|| LayoutError::Unmeasurable(ty.name().to_string()))?;
        let addresses = self.probe.probe(&twin)?;

        let (first, second) = match addresses.as_slice() {
            [first, second] => (*first, *second),
            other => {
                return Err(LayoutError::ProbeCount {
                    type_name: twin.name().to_string(),
                    expected: 2,
                    found: other.len(),
                })
            }
        };

        let size = second
            .offset_from(first)
            .ok_or_else(|| LayoutError::TwinOrder(ty.name().to_string()))?;
        log::trace!("{} measures {} bytes", ty.name(), size);
        Ok(Size::new(size))
    }
}
