// Fri Oct 16 2026 - Alex

use crate::probe::{Address, RoutineCache};
use crate::reflect::{Instance, TypeRef};
use crate::structure::LayoutError;
use itertools::Itertools;
use std::sync::Arc;

/// Observes where the host actually placed each declared field.
pub struct AddressProbe {
    routines: Arc<RoutineCache>,
}

impl AddressProbe {
    pub fn new() -> Self {
        Self::with_cache(Arc::new(RoutineCache::new()))
    }

    pub fn with_cache(routines: Arc<RoutineCache>) -> Self {
        Self { routines }
    }

    pub fn routines(&self) -> &Arc<RoutineCache> {
        &self.routines
    }

    /// One address per declared field of `ty`, in declared order, taken from
    /// `instance`.
    pub fn probe_addresses(&self, ty: &TypeRef, instance: &Instance) -> Result<Vec<Address>, LayoutError> {
        if instance.type_id() != ty.id() {
            return Err(LayoutError::InstanceMismatch {
                expected: ty.name().to_string(),
                actual: instance.type_name().to_string(),
            });
        }

        let routine = self.routines.get_or_compile(ty);
        // SAFETY: the instance was created for `ty` and is borrowed for the
        // duration of the call.
        let addresses = unsafe { routine.run(instance.base()) };

        let expected = ty.field_count();
        if addresses.len() != expected {
            return Err(LayoutError::ProbeCount {
                type_name: ty.name().to_string(),
                expected,
                found: addresses.len(),
            });
        }

        log::trace!(
            "probed {}: [{}]",
            ty.name(),
            addresses.iter().map(|a| format!("{:x}", a)).join(", ")
        );
        Ok(addresses)
    }

    /// Probes a fresh instance of `ty`.
    pub fn probe(&self, ty: &TypeRef) -> Result<Vec<Address>, LayoutError> {
        let instance = ty.instantiate()?;
        self.probe_addresses(ty, &instance)
    }
}

impl Default for AddressProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Semantics;

    crate::reflect! {
        #[allow(dead_code)]
        struct Header {
            tag: u8,
            length: u32,
        }
    }

    #[test]
    fn test_probe_returns_field_addresses_in_declared_order() {
        let ty = TypeRef::of::<Header>();
        let instance = ty.instantiate().unwrap();
        let addresses = AddressProbe::new().probe_addresses(&ty, &instance).unwrap();

        let base = instance.base() as usize;
        let expected = [
            std::mem::offset_of!(Header, tag),
            std::mem::offset_of!(Header, length),
        ];
        let observed: Vec<usize> = addresses.iter().map(|a| a.as_usize() - base).collect();
        assert_eq!(observed, expected);
    }

    #[test]
    fn test_probe_rejects_foreign_instance() {
        let probe = AddressProbe::new();
        let instance = crate::reflect::Instance::create::<u64>(Semantics::Value).unwrap();
        let err = probe.probe_addresses(&TypeRef::of::<Header>(), &instance).unwrap_err();
        assert!(matches!(err, LayoutError::InstanceMismatch { .. }));
    }

    #[test]
    fn test_probe_shares_injected_cache() {
        let routines = Arc::new(RoutineCache::new());
        let first = AddressProbe::with_cache(routines.clone());
        let second = AddressProbe::with_cache(routines.clone());

        first.probe(&TypeRef::of::<Header>()).unwrap();
        second.probe(&TypeRef::of::<Header>()).unwrap();
        assert_eq!(routines.len(), 1);
    }
}
