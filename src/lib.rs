// Fri Oct 16 2026 - Alex

//! Discovers how types are laid out in memory by probing live instances:
//! field offsets, sizes, padding and object overhead.

pub mod config;
pub mod reflect;
pub mod probe;
pub mod structure;
pub mod output;
pub mod inspector;
pub mod catalog;
pub mod ui;

pub use config::InspectorConfig;
pub use reflect::{Obj, Reflect, Semantics, TypeRef};
pub use probe::AddressProbe;
pub use structure::{FieldLayout, LayoutComputer, LayoutError, SizeMeasurer, TypeLayout};
pub use output::LayoutRenderer;
pub use inspector::{compute_layout, print, Inspector};
