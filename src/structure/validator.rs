// Fri Oct 16 2026 - Alex

use crate::structure::{LayoutError, TypeLayout};

/// Checks the structural invariants every computed layout must satisfy.
pub struct LayoutValidator;

impl LayoutValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, layout: &TypeLayout) -> Result<(), LayoutError> {
        let fail = |reason: String| LayoutError::Invariant {
            type_name: layout.ty().name().to_string(),
            reason,
        };

        let fields = layout.fields();
        if fields.windows(2).any(|pair| pair[0].offset() > pair[1].offset()) {
            return Err(fail("fields are not sorted by offset".to_string()));
        }

        if let Some(first) = fields.first() {
            if first.offset().as_usize() != 0 {
                return Err(fail(format!("first field `{}` is at {}", first.name(), first.offset())));
            }
        }

        let extent = fields.iter().map(|f| f.end()).max().unwrap_or(0);
        let total = layout.total_size().as_usize();
        if total < extent {
            return Err(fail(format!("total size {} is below field extent {}", total, extent)));
        }

        let accounted = layout.fields_size() + layout.overhead().as_usize() + layout.padding().as_usize();
        if !fields.is_empty() && accounted != total {
            return Err(fail(format!(
                "fields, overhead and padding add up to {} instead of {}",
                accounted, total
            )));
        }

        if fields.is_empty() && !layout.padding().is_zero() {
            return Err(fail("a type without fields reports padding".to_string()));
        }

        Ok(())
    }
}

impl Default for LayoutValidator {
    fn default() -> Self {
        Self::new()
    }
}
