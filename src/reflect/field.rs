// Fri Oct 16 2026 - Alex

use crate::reflect::{Reflect, TypeRef};
use std::fmt;

/// Computes the address of one field from the base address of an instance.
///
/// # Safety
///
/// `base` must point into a live allocation of the type the locator was
/// generated for. The pointee does not need to be initialized.
pub type Locator = unsafe fn(*const u8) -> *const u8;

/// A declared field as the type describes it: no offset, no size.
#[derive(Clone, Copy)]
pub struct FieldDecl {
    name: &'static str,
    declared: TypeRef,
    locator: Locator,
}

impl FieldDecl {
    /// Declares a field of type `F` reached through `locator`.
    ///
    /// # Safety
    ///
    /// For any `base` pointing into a live allocation of the owning type,
    /// `locator(base)` must return the address of a field of type `F` inside
    /// that same allocation, without reading through `base`. Offsets and
    /// sizes are derived from that address and trusted as is.
    ///
    /// ```compile_fail
    /// use layout_inspector::reflect::FieldDecl;
    ///
    /// unsafe fn anywhere(_: *const u8) -> *const u8 {
    ///     0x1000 as *const u8
    /// }
    ///
    /// let decl = FieldDecl::new::<u64>("bogus", anywhere);
    /// ```
    pub unsafe fn new<F: Reflect>(name: &'static str, locator: Locator) -> Self {
        Self {
            name,
            declared: F::declared_type(),
            locator,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn declared(&self) -> TypeRef {
        self.declared
    }

    pub fn locator(&self) -> Locator {
        self.locator
    }
}

impl fmt::Debug for FieldDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDecl")
            .field("name", &self.name)
            .field("declared", &self.declared)
            .finish()
    }
}
