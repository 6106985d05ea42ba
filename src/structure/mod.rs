// Fri Oct 16 2026 - Alex

pub mod error;
pub mod offset;
pub mod size;
pub mod alignment;
pub mod field;
pub mod layout;
pub mod measurer;
pub mod computer;
pub mod cache;
pub mod validator;
pub mod serializer;

pub use error::{InstantiationError, LayoutError};
pub use offset::Offset;
pub use size::Size;
pub use alignment::Alignment;
pub use field::FieldLayout;
pub use layout::{LayoutKind, TypeLayout};
pub use measurer::SizeMeasurer;
pub use computer::LayoutComputer;
pub use cache::LayoutCache;
pub use validator::LayoutValidator;
pub use serializer::{SerializableField, SerializableLayout};
