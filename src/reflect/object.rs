// Fri Oct 16 2026 - Alex

use crate::reflect::{Reflect, TypeRef};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr;

pub const POINTER_WIDTH: usize = std::mem::size_of::<usize>();

/// Heap representation of a reference-semantic instance: an identity word and
/// a type handle, followed by the field region.
#[repr(C)]
pub struct ObjectBox<T> {
    header: usize,
    type_handle: fn() -> TypeRef,
    data: T,
}

impl<T: Reflect> ObjectBox<T> {
    fn new(data: T) -> Self {
        Self {
            header: 0,
            type_handle: object_type::<T>,
            data,
        }
    }

    /// # Safety
    ///
    /// `object` must point into a live, possibly uninitialized, allocation of
    /// `ObjectBox<T>`.
    pub(crate) unsafe fn data_ptr(object: *const Self) -> *const T {
        ptr::addr_of!((*object).data)
    }
}

fn object_type<T: Reflect>() -> TypeRef {
    TypeRef::of::<T>().as_reference()
}

/// Owning handle to a boxed object. Only the handle lives inline in whatever
/// embeds it.
pub struct Obj<T: Reflect> {
    inner: Box<ObjectBox<T>>,
}

impl<T: Reflect> Obj<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Box::new(ObjectBox::new(value)),
        }
    }

    pub fn type_ref(&self) -> TypeRef {
        (self.inner.type_handle)()
    }

    pub fn header(&self) -> usize {
        self.inner.header
    }
}

impl<T: Reflect> Deref for Obj<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner.data
    }
}

impl<T: Reflect> DerefMut for Obj<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner.data
    }
}

impl<T: Reflect + fmt::Debug> fmt::Debug for Obj<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Obj").field(&self.inner.data).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obj_handle_is_pointer_width() {
        assert_eq!(std::mem::size_of::<Obj<u64>>(), POINTER_WIDTH);
    }

    #[test]
    fn test_obj_reports_reference_type() {
        let obj = Obj::new(7u32);
        assert_eq!(*obj, 7);
        assert_eq!(obj.header(), 0);
        assert!(obj.type_ref().semantics().is_reference());
        assert_eq!(obj.type_ref().name(), "u32");
    }
}
