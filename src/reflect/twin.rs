// Fri Oct 16 2026 - Alex

use crate::reflect::{FieldDecl, Instantiation, Reflect};
use std::ptr;

/// Two consecutive members of the same type. `repr(C)` pins declaration
/// order, so the distance between the members is the per-element footprint.
#[repr(C)]
#[allow(dead_code)]
pub struct Twin<T> {
    first: T,
    second: T,
}

unsafe fn locate_first<T>(base: *const u8) -> *const u8 {
    ptr::addr_of!((*(base as *const Twin<T>)).first) as *const u8
}

unsafe fn locate_second<T>(base: *const u8) -> *const u8 {
    ptr::addr_of!((*(base as *const Twin<T>)).second) as *const u8
}

impl<T: Reflect> Reflect for Twin<T> {
    fn type_name() -> &'static str {
        "Twin"
    }

    fn fields() -> Vec<FieldDecl> {
        // SAFETY: both locators take a member address of the Twin<T> at base.
        unsafe {
            vec![
                FieldDecl::new::<T>("first", locate_first::<T>),
                FieldDecl::new::<T>("second", locate_second::<T>),
            ]
        }
    }

    fn instantiation() -> Instantiation {
        T::instantiation()
    }
}
