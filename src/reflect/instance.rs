// Fri Oct 16 2026 - Alex

use crate::reflect::{Instantiation, ObjectBox, Reflect, Semantics};
use crate::structure::InstantiationError;
use std::alloc::{self, Layout};
use std::any::{Any, TypeId};
use std::mem::MaybeUninit;

/// A fresh instance created only to be probed. No constructor runs, and the
/// storage is `MaybeUninit`, so nothing is ever dropped either.
pub struct Instance {
    type_id: TypeId,
    type_name: &'static str,
    base: *const u8,
    _storage: Box<dyn Any>,
}

impl Instance {
    pub fn create<T: Reflect>(semantics: Semantics) -> Result<Self, InstantiationError> {
        if let Instantiation::Unsupported(reason) = T::instantiation() {
            return Err(InstantiationError::Unsupported {
                type_name: T::type_name().to_string(),
                reason: reason.to_string(),
            });
        }

        match semantics {
            Semantics::Value => Self::zeroed::<T>(),
            Semantics::Reference => Self::object::<T>(),
        }
    }

    fn zeroed<T: Reflect>() -> Result<Self, InstantiationError> {
        let storage = allocate::<T, T>(true)?;
        let base = storage.as_ptr() as *const u8;
        Ok(Self {
            type_id: TypeId::of::<T>(),
            type_name: T::type_name(),
            base,
            _storage: storage,
        })
    }

    fn object<T: Reflect>() -> Result<Self, InstantiationError> {
        let storage = allocate::<ObjectBox<T>, T>(false)?;
        // SAFETY: the box owns an allocation of ObjectBox<T>; only the field
        // address is computed, nothing is read.
        let base = unsafe { ObjectBox::data_ptr(storage.as_ptr()) } as *const u8;
        Ok(Self {
            type_id: TypeId::of::<T>(),
            type_name: T::type_name(),
            base,
            _storage: storage,
        })
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Address of the field region. Stable for the life of the instance.
    pub fn base(&self) -> *const u8 {
        self.base
    }
}

/// Heap storage for an `S` that never passes through the stack.
fn allocate<S, T: Reflect>(zeroed: bool) -> Result<Box<MaybeUninit<S>>, InstantiationError> {
    let layout = Layout::new::<S>();
    if layout.size() == 0 {
        return Ok(Box::new(MaybeUninit::uninit()));
    }

    // SAFETY: the layout has a non-zero size.
    let ptr = unsafe {
        if zeroed {
            alloc::alloc_zeroed(layout)
        } else {
            alloc::alloc(layout)
        }
    } as *mut MaybeUninit<S>;

    if ptr.is_null() {
        return Err(InstantiationError::AllocationFailed {
            type_name: T::type_name().to_string(),
            size: layout.size(),
        });
    }

    // SAFETY: allocated by the global allocator with the layout of
    // MaybeUninit<S>, which matches S.
    Ok(unsafe { Box::from_raw(ptr) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::POINTER_WIDTH;

    struct Sealed;

    impl Reflect for Sealed {
        fn instantiation() -> Instantiation {
            Instantiation::Unsupported("requires a live device handle")
        }
    }

    #[test]
    fn test_unsupported_type_fails() {
        let err = Instance::create::<Sealed>(Semantics::Value).err().unwrap();
        assert!(err.to_string().contains("requires a live device handle"));
    }

    #[test]
    fn test_object_field_region_follows_header() {
        let instance = Instance::create::<u64>(Semantics::Reference).unwrap();
        let storage = instance._storage.downcast_ref::<MaybeUninit<ObjectBox<u64>>>().unwrap();
        let start = storage.as_ptr() as usize;
        assert_eq!(instance.base() as usize - start, 2 * POINTER_WIDTH);
    }

    #[test]
    fn test_value_instance_is_zeroed() {
        let instance = Instance::create::<[u64; 4]>(Semantics::Value).unwrap();
        let storage = instance._storage.downcast_ref::<MaybeUninit<[u64; 4]>>().unwrap();
        // SAFETY: the storage was zero-filled and all-zero is a valid [u64; 4].
        assert_eq!(unsafe { storage.assume_init_ref() }, &[0u64; 4]);
    }

    #[test]
    fn test_large_instance_lives_on_heap() {
        // larger than the default test thread stack
        let instance = Instance::create::<[u8; 1 << 23]>(Semantics::Value).unwrap();
        assert!(!instance.base().is_null());

        let instance = Instance::create::<[u8; 1 << 23]>(Semantics::Reference).unwrap();
        assert!(!instance.base().is_null());
    }

    #[test]
    fn test_zero_sized_instance() {
        let instance = Instance::create::<()>(Semantics::Value).unwrap();
        assert!(!instance.base().is_null());
    }
}
