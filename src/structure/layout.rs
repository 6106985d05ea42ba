// Fri Oct 16 2026 - Alex

use crate::reflect::{Semantics, TypeRef, POINTER_WIDTH};
use crate::structure::{FieldLayout, Size};

/// What precedes the field region of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Value,
    Reference { header: Size, type_handle: Size },
}

impl LayoutKind {
    pub fn for_semantics(semantics: Semantics) -> Self {
        match semantics {
            Semantics::Value => Self::Value,
            Semantics::Reference => Self::Reference {
                header: Size::new(POINTER_WIDTH),
                type_handle: Size::new(POINTER_WIDTH),
            },
        }
    }

    pub fn semantics(&self) -> Semantics {
        match self {
            Self::Value => Semantics::Value,
            Self::Reference { .. } => Semantics::Reference,
        }
    }

    pub fn overhead(&self) -> Size {
        match self {
            Self::Value => Size::zero(),
            Self::Reference { header, type_handle } => *header + *type_handle,
        }
    }
}

/// Physical layout of one type as observed on a live instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeLayout {
    ty: TypeRef,
    kind: LayoutKind,
    total_size: Size,
    padding: Size,
    fields: Vec<FieldLayout>,
}

impl TypeLayout {
    pub(crate) fn new(ty: TypeRef, kind: LayoutKind, total_size: Size, padding: Size, fields: Vec<FieldLayout>) -> Self {
        Self {
            ty,
            kind,
            total_size,
            padding,
            fields,
        }
    }

    pub fn ty(&self) -> TypeRef {
        self.ty
    }

    pub fn name(&self) -> String {
        self.ty.short_name()
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn total_size(&self) -> Size {
        self.total_size
    }

    pub fn overhead(&self) -> Size {
        self.kind.overhead()
    }

    pub fn padding(&self) -> Size {
        self.padding
    }

    /// Padding as a truncated percentage of the total size; 0 for empty types.
    pub fn padding_percent(&self) -> usize {
        match self.total_size.as_usize() {
            0 => 0,
            total => self.padding.as_usize() * 100 / total,
        }
    }

    /// Sorted ascending by offset.
    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn fields_size(&self) -> usize {
        self.fields.iter().map(|f| f.size().as_usize()).sum()
    }
}
