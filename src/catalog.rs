// Fri Oct 16 2026 - Alex

//! Sample types the command line tool can inspect by name.

#![allow(dead_code)]

use crate::reflect::{Obj, TypeRef};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

crate::reflect! {
    pub struct Mixed {
        a: u8,
        b: u64,
    }
}

crate::reflect! {
    pub struct NotAligned {
        byte1: u8,
        int: i32,
        byte2: u8,
    }
}

crate::reflect! {
    #[repr(C)]
    pub struct NotAlignedC {
        byte1: u8,
        int: i32,
        byte2: u8,
    }
}

crate::reflect! {
    pub struct Vec3 {
        x: f32,
        y: f32,
        z: f32,
    }
}

crate::reflect! {
    pub struct Particle {
        alive: bool,
        position: Vec3,
        velocity: Vec3,
        mass: f64,
        kind: Mixed,
    }
}

crate::reflect! {
    pub struct Unit {}
}

crate::reflect! {
    @object
    pub struct Node {
        value: u32,
        next: Option<Obj<Node>>,
        parent: Obj<Node>,
    }
}

crate::reflect! {
    @object
    pub struct Record {
        id: u64,
        flag: bool,
        name: String,
        origin: Vec3,
    }
}

crate::reflect! {
    @object
    pub struct Marker {}
}

pub static CATALOG: Lazy<IndexMap<&'static str, TypeRef>> = Lazy::new(|| {
    IndexMap::from([
        ("Mixed", TypeRef::of::<Mixed>()),
        ("NotAligned", TypeRef::of::<NotAligned>()),
        ("NotAlignedC", TypeRef::of::<NotAlignedC>()),
        ("Vec3", TypeRef::of::<Vec3>()),
        ("Particle", TypeRef::of::<Particle>()),
        ("Unit", TypeRef::of::<Unit>()),
        ("Node", TypeRef::of::<Node>()),
        ("Record", TypeRef::of::<Record>()),
        ("Marker", TypeRef::of::<Marker>()),
    ])
});

pub fn lookup(name: &str) -> Option<TypeRef> {
    CATALOG
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, ty)| *ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Inspector;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(lookup("particle"), Some(TypeRef::of::<Particle>()));
        assert_eq!(lookup("Missing"), None);
    }

    #[test]
    fn test_every_entry_lays_out() {
        let inspector = Inspector::new();
        for (name, ty) in CATALOG.iter() {
            assert!(inspector.render_of(ty, true).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_repr_c_keeps_declared_order() {
        let layout = Inspector::new().compute_layout::<NotAlignedC>().unwrap();
        let names: Vec<&str> = layout.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["byte1", "int", "byte2"]);
        assert_eq!(layout.total_size().as_usize(), 12);
        assert_eq!(layout.padding().as_usize(), 6);
    }

    #[test]
    fn test_default_repr_packs_tighter() {
        let layout = Inspector::new().compute_layout::<NotAligned>().unwrap();
        assert_eq!(layout.total_size().as_usize(), std::mem::size_of::<NotAligned>());
        assert!(layout.padding().as_usize() < 6);
    }
}
