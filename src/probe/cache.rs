// Fri Oct 16 2026 - Alex

use crate::probe::ProbeRoutine;
use crate::reflect::TypeRef;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::any::TypeId;
use std::sync::Arc;

/// Compiled probe routines keyed by field-set identity. Filled lazily and
/// never invalidated; entries are only ever added.
pub struct RoutineCache {
    routines: RwLock<AHashMap<TypeId, Arc<ProbeRoutine>>>,
}

impl RoutineCache {
    pub fn new() -> Self {
        Self {
            routines: RwLock::new(AHashMap::new()),
        }
    }

    pub fn get(&self, ty: &TypeRef) -> Option<Arc<ProbeRoutine>> {
        self.routines.read().get(&ty.id()).cloned()
    }

    pub fn get_or_compile(&self, ty: &TypeRef) -> Arc<ProbeRoutine> {
        if let Some(routine) = self.get(ty) {
            return routine;
        }

        let routine = Arc::new(ProbeRoutine::compile(ty));
        self.routines
            .write()
            .entry(ty.id())
            .or_insert(routine)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.routines.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RoutineCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Twin;

    #[test]
    fn test_routine_compiled_once_per_field_set() {
        let cache = RoutineCache::new();
        let ty = TypeRef::synthetic::<Twin<u32>>();

        let first = cache.get_or_compile(&ty);
        let second = cache.get_or_compile(&ty);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        // viewing the type through a handle does not change its field set
        cache.get_or_compile(&ty.as_reference());
        assert_eq!(cache.len(), 1);
        assert_eq!(first.field_count(), 2);
    }
}
