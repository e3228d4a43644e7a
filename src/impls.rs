/*!
Implementations of [`Field`] and [`Target`] for primitive and standard library
types
 */

use crate::field::{Field, FieldKind, FieldSlot};
use crate::target::{Shape, Target};

impl Field for bool {
    const KIND: FieldKind = FieldKind::Bool;

    #[inline]
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Bool(self)
    }
}

macro_rules! unsupported_field {
    ($(
        $kind:ident: $($type:ident $(::$path:ident)*),* ;
    )*) => {
        $($(
            impl Field for $type $(:: $path)* {
                const KIND: FieldKind = FieldKind::$kind;

                #[inline]
                fn slot(&mut self) -> FieldSlot<'_> {
                    FieldSlot::Unsupported(Self::KIND)
                }
            }
        )*)*
    };
}

unsupported_field! {
    Integer:
        u8, u16, u32, u64, u128, usize,
        i8, i16, i32, i64, i128, isize;
    Float: f32, f64;
    Char: char;
    Text: String, std::ffi::OsString;
    Path: std::path::PathBuf;
}

impl<T: Field> Field for Option<T> {
    const KIND: FieldKind = FieldKind::Optional;

    #[inline]
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Unsupported(Self::KIND)
    }
}

impl<T: Field> Field for Vec<T> {
    const KIND: FieldKind = FieldKind::Repeated;

    #[inline]
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Unsupported(Self::KIND)
    }
}

macro_rules! opaque_target {
    ($($type:ident $(::$path:ident)*)*) => {
        $(
            impl Target for $type $(:: $path)* {
                #[inline]
                fn shape() -> Shape {
                    Shape::Other(core::any::type_name::<Self>())
                }

                #[inline]
                fn field_mut(&mut self, _index: usize) -> Option<FieldSlot<'_>> {
                    None
                }
            }
        )*
    };
}

opaque_target! {
    bool
    u8 u16 u32 u64 u128 usize
    i8 i16 i32 i64 i128 isize
    f32 f64
    char
    String
    std::path::PathBuf
}
