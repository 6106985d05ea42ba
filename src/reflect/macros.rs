// Fri Oct 16 2026 - Alex

/// Declares a struct and implements [`Reflect`](crate::reflect::Reflect) for it.
///
/// A plain struct is value-semantic. Prefix it with `@object` to make it
/// reference-semantic: it is then inspected as a boxed object with a header.
///
/// ```
/// layout_inspector::reflect! {
///     pub struct Pair {
///         pub left: u8,
///         pub right: u64,
///     }
/// }
///
/// layout_inspector::reflect! {
///     @object
///     pub struct Account {
///         pub id: u64,
///         pub balance: i64,
///     }
/// }
/// ```
#[macro_export]
macro_rules! reflect {
    (
        @object
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $crate::reflect! {
            @emit Reference
            $(#[$meta])*
            $vis struct $name {
                $( $(#[$fmeta])* $fvis $field : $fty ),*
            }
        }
    };
    (
        @emit $semantics:ident
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field : $fty ),*
        }

        impl $crate::reflect::Reflect for $name {
            const SEMANTICS: $crate::reflect::Semantics = $crate::reflect::Semantics::$semantics;

            fn type_name() -> &'static str {
                stringify!($name)
            }

            fn fields() -> ::std::vec::Vec<$crate::reflect::FieldDecl> {
                ::std::vec![
                    $(
                        // SAFETY: `locate` only takes the address of `$field`
                        // inside the `$name` that `base` points at.
                        unsafe {
                            $crate::reflect::FieldDecl::new::<$fty>(stringify!($field), {
                                unsafe fn locate(base: *const u8) -> *const u8 {
                                    ::core::ptr::addr_of!((*(base as *const $name)).$field) as *const u8
                                }
                                locate
                            })
                        }
                    ),*
                ]
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $crate::reflect! {
            @emit Value
            $(#[$meta])*
            $vis struct $name {
                $( $(#[$fmeta])* $fvis $field : $fty ),*
            }
        }
    };
}
