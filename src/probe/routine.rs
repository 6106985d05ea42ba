// Fri Oct 16 2026 - Alex

use crate::probe::Address;
use crate::reflect::{Locator, TypeRef};

/// Address-extraction routine for one field set, assembled from the
/// per-field locators of a type.
pub struct ProbeRoutine {
    type_name: &'static str,
    locators: Vec<Locator>,
}

impl ProbeRoutine {
    pub fn compile(ty: &TypeRef) -> Self {
        let locators: Vec<Locator> = ty.fields().iter().map(|field| field.locator()).collect();
        log::debug!("compiled probe routine for {} ({} fields)", ty.name(), locators.len());
        Self {
            type_name: ty.name(),
            locators,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn field_count(&self) -> usize {
        self.locators.len()
    }

    /// Evaluates every field address of the instance at `base`, in declared order.
    ///
    /// # Safety
    ///
    /// `base` must point at the field region of a live instance of the type
    /// this routine was compiled for.
    pub unsafe fn run(&self, base: *const u8) -> Vec<Address> {
        self.locators
            .iter()
            .map(|locate| Address::from_ptr(locate(base)))
            .collect()
    }
}
