// Fri Oct 16 2026 - Alex

//! Type description and instance creation: everything the inspector knows
//! about a type comes through here.

pub mod semantics;
pub mod traits;
pub mod type_ref;
pub mod field;
pub mod instance;
pub mod object;
pub mod twin;
mod macros;

pub use semantics::Semantics;
pub use traits::{Instantiation, Reflect};
pub use type_ref::{TypeKey, TypeRef};
pub use field::{FieldDecl, Locator};
pub use instance::Instance;
pub use object::{Obj, ObjectBox, POINTER_WIDTH};
pub use twin::Twin;
