// Fri Oct 16 2026 - Alex

use crate::reflect::TypeRef;
use crate::structure::{Offset, Size, TypeLayout};
use std::fmt;
use std::sync::Arc;

/// A declared field together with where the host actually put it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    name: &'static str,
    declared: TypeRef,
    offset: Offset,
    size: Size,
    nested: Option<Arc<TypeLayout>>,
}

impl FieldLayout {
    pub fn new(name: &'static str, declared: TypeRef, offset: Offset, size: Size, nested: Option<Arc<TypeLayout>>) -> Self {
        Self {
            name,
            declared,
            offset,
            size,
            nested,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn declared(&self) -> TypeRef {
        self.declared
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// First byte past the field.
    pub fn end(&self) -> usize {
        self.offset.as_usize() + self.size.as_usize()
    }

    /// Layout of the declared type, present when it decomposes into more
    /// than one field.
    pub fn nested(&self) -> Option<&TypeLayout> {
        self.nested.as_deref()
    }
}

impl fmt::Display for FieldLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {} ({})", self.name, self.offset, self.declared, self.size.describe())
    }
}
