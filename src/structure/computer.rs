// Fri Oct 16 2026 - Alex

use crate::probe::AddressProbe;
use crate::reflect::{FieldDecl, Semantics, TypeRef, POINTER_WIDTH};
use crate::structure::{
    Alignment, FieldLayout, LayoutCache, LayoutError, LayoutKind, LayoutValidator, Offset, Size,
    SizeMeasurer, TypeLayout,
};
use std::sync::Arc;

/// Turns probed addresses and measured sizes into a [`TypeLayout`].
pub struct LayoutComputer {
    probe: AddressProbe,
    cache: Option<Arc<LayoutCache>>,
    validator: LayoutValidator,
}

impl LayoutComputer {
    pub fn new() -> Self {
        Self::with_probe(AddressProbe::new())
    }

    pub fn with_probe(probe: AddressProbe) -> Self {
        Self {
            probe,
            cache: None,
            validator: LayoutValidator::new(),
        }
    }

    pub fn with_cache(mut self, cache: Arc<LayoutCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn probe(&self) -> &AddressProbe {
        &self.probe
    }

    pub fn cache(&self) -> Option<&Arc<LayoutCache>> {
        self.cache.as_ref()
    }

    pub fn measurer(&self) -> SizeMeasurer<'_> {
        SizeMeasurer::new(&self.probe)
    }

    pub fn compute_layout(&self, ty: &TypeRef) -> Result<Arc<TypeLayout>, LayoutError> {
        if let Some(layout) = self.cache.as_ref().and_then(|cache| cache.get(ty)) {
            log::trace!("layout cache hit for {}", ty.name());
            return Ok(layout);
        }

        let layout = self.build(ty)?;
        self.validator.validate(&layout)?;
        log::debug!(
            "{}: {} bytes, {} padding, {} fields",
            ty.name(),
            layout.total_size(),
            layout.padding(),
            layout.fields().len()
        );

        let layout = Arc::new(layout);
        Ok(match &self.cache {
            Some(cache) => cache.insert(layout),
            None => layout,
        })
    }

    fn build(&self, ty: &TypeRef) -> Result<TypeLayout, LayoutError> {
        let kind = LayoutKind::for_semantics(ty.semantics());
        let declared = ty.fields();

        if declared.is_empty() {
            let total = match ty.semantics() {
                Semantics::Reference => Size::new(POINTER_WIDTH),
                Semantics::Value => self.measurer().measure_size(ty)?,
            };
            return Ok(TypeLayout::new(*ty, kind, total, Size::zero(), Vec::new()));
        }

        let addresses = self.probe.probe(ty)?;
        let Some(base) = addresses.iter().min().copied() else {
            return Err(LayoutError::ProbeCount {
                type_name: ty.name().to_string(),
                expected: declared.len(),
                found: 0,
            });
        };

        let mut fields = Vec::with_capacity(declared.len());
        for (decl, address) in declared.iter().zip(&addresses) {
            let offset = address.offset_from(base).unwrap_or_default();
            let field = self
                .field_layout(decl, Offset::new(offset))
                .map_err(|e| LayoutError::in_field(ty, decl, e))?;
            fields.push(field);
        }

        // declared order is not physical order
        fields.sort_by_key(|f| f.offset());

        let extent = fields.iter().map(FieldLayout::end).max().unwrap_or(0);
        let total = match kind {
            LayoutKind::Reference { .. } => kind.overhead().as_usize() + Alignment::pointer().align(extent),
            LayoutKind::Value => {
                let measured = self.measurer().measure_size(ty)?.as_usize();
                if measured < extent {
                    return Err(LayoutError::Inconsistent {
                        type_name: ty.name().to_string(),
                        measured,
                        extent,
                    });
                }
                if measured > extent {
                    log::debug!("{} carries {} trailing bytes", ty.name(), measured - extent);
                }
                measured
            }
        };

        let occupied: usize = fields.iter().map(|f| f.size().as_usize()).sum::<usize>() + kind.overhead().as_usize();
        let padding = total.checked_sub(occupied).ok_or_else(|| LayoutError::Invariant {
            type_name: ty.name().to_string(),
            reason: format!("fields and overhead occupy {} of {} bytes", occupied, total),
        })?;

        Ok(TypeLayout::new(*ty, kind, Size::new(total), Size::new(padding), fields))
    }

    fn field_layout(&self, decl: &FieldDecl, offset: Offset) -> Result<FieldLayout, LayoutError> {
        let declared = decl.declared();
        let size = self.measurer().measure_size(&declared)?;

        // handles are never expanded: what they point at lives elsewhere
        let nested = if declared.semantics().is_value() && declared.field_count() > 1 {
            Some(self.compute_layout(&declared)?)
        } else {
            None
        };

        Ok(FieldLayout::new(decl.name(), declared, offset, size, nested))
    }
}

impl Default for LayoutComputer {
    fn default() -> Self {
        Self::new()
    }
}
