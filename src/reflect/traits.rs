// Fri Oct 16 2026 - Alex

use crate::reflect::{FieldDecl, Obj, Semantics, TypeRef};
use std::rc::Rc;
use std::sync::Arc;

/// Whether the instance-creation facility may materialize a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instantiation {
    Supported,
    Unsupported(&'static str),
}

/// Describes a type to the inspector: its semantics and its declared fields.
///
/// Types without declared fields are leaves; their size is still measured by
/// probing. Structs normally implement this through [`reflect!`](crate::reflect!).
pub trait Reflect: Sized + 'static {
    const SEMANTICS: Semantics = Semantics::Value;

    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    fn fields() -> Vec<FieldDecl> {
        Vec::new()
    }

    fn instantiation() -> Instantiation {
        Instantiation::Supported
    }

    /// The type recorded for a field declared with this type. A field holds
    /// its value inline, even for reference-semantic types; only handles
    /// override this to point at the referenced type.
    fn declared_type() -> TypeRef {
        TypeRef::of::<Self>().as_value()
    }
}

macro_rules! leaf_types {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_name() -> &'static str {
                    stringify!($ty)
                }
            }
        )*
    };
}

leaf_types!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char, (), String,
);

impl<T: 'static, const N: usize> Reflect for [T; N] {}
impl<T: 'static> Reflect for Option<T> {}
impl<T: 'static> Reflect for Vec<T> {}
impl<T: 'static> Reflect for *const T {}
impl<T: 'static> Reflect for *mut T {}

macro_rules! handle_types {
    ($($handle:ident),* $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $handle<T> {
                fn declared_type() -> TypeRef {
                    TypeRef::of::<T>().as_reference()
                }
            }
        )*
    };
}

handle_types!(Obj, Box, Rc, Arc);
