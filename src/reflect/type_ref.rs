// Fri Oct 16 2026 - Alex

use crate::reflect::{FieldDecl, Instance, Reflect, Semantics, Twin};
use crate::structure::InstantiationError;
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of an inspected type. The same Rust type viewed through a handle
/// is a different key than the type stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    semantics: Semantics,
}

/// Type-erased handle to a reflected type.
#[derive(Clone, Copy)]
pub struct TypeRef {
    id: TypeId,
    name: &'static str,
    semantics: Semantics,
    fields: fn() -> Vec<FieldDecl>,
    instantiate: fn(Semantics) -> Result<Instance, InstantiationError>,
    twin: Option<fn() -> TypeRef>,
}

impl TypeRef {
    pub fn of<T: Reflect>() -> Self {
        Self::build::<T>(Some(twin_of::<T> as fn() -> TypeRef))
    }

    /// Handle for a synthesized aggregate. Synthesized types are never
    /// measured themselves, so they carry no twin of their own.
    pub(crate) fn synthetic<T: Reflect>() -> Self {
        Self::build::<T>(None)
    }

    fn build<T: Reflect>(twin: Option<fn() -> TypeRef>) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::type_name(),
            semantics: T::SEMANTICS,
            fields: T::fields,
            instantiate: Instance::create::<T>,
            twin,
        }
    }

    /// The same type, held through a handle.
    pub fn as_reference(self) -> Self {
        Self {
            semantics: Semantics::Reference,
            ..self
        }
    }

    /// The same type, stored inline.
    pub fn as_value(self) -> Self {
        Self {
            semantics: Semantics::Value,
            ..self
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn key(&self) -> TypeKey {
        TypeKey {
            id: self.id,
            semantics: self.semantics,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name with module paths stripped, generics kept: `alloc::vec::Vec<u8>`
    /// becomes `Vec<u8>`.
    pub fn short_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut segment = String::new();
        let mut chars = self.name.chars().peekable();

        while let Some(c) = chars.next() {
            if c == ':' && chars.peek() == Some(&':') {
                chars.next();
                segment.clear();
            } else if c.is_alphanumeric() || c == '_' {
                segment.push(c);
            } else {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
        }
        out.push_str(&segment);
        out
    }

    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    pub fn fields(&self) -> Vec<FieldDecl> {
        (self.fields)()
    }

    pub fn field_count(&self) -> usize {
        self.fields().len()
    }

    pub fn instantiate(&self) -> Result<Instance, InstantiationError> {
        (self.instantiate)(self.semantics)
    }

    /// The `Twin<T>` aggregate used to measure this type, if it has one.
    pub fn twin(&self) -> Option<TypeRef> {
        self.twin.map(|twin| twin())
    }
}

fn twin_of<T: Reflect>() -> TypeRef {
    TypeRef::synthetic::<Twin<T>>()
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRef")
            .field("name", &self.name)
            .field("semantics", &self.semantics)
            .finish()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
