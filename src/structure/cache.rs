// Fri Oct 16 2026 - Alex

use crate::reflect::{TypeKey, TypeRef};
use crate::structure::TypeLayout;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Computed layouts keyed by type identity. Read-mostly; an entry, once
/// inserted, is never replaced.
pub struct LayoutCache {
    cache: RwLock<AHashMap<TypeKey, Arc<TypeLayout>>>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(AHashMap::new()),
        }
    }

    pub fn get(&self, ty: &TypeRef) -> Option<Arc<TypeLayout>> {
        self.cache.read().get(&ty.key()).cloned()
    }

    /// Stores `layout` unless another caller got there first; returns the
    /// entry that ends up cached.
    pub fn insert(&self, layout: Arc<TypeLayout>) -> Arc<TypeLayout> {
        self.cache
            .write()
            .entry(layout.ty().key())
            .or_insert(layout)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}
