/*!
Field types that can appear in a [`Target`][crate::Target] struct.

Every field of a target needs a [`Field`] implementation, which tells the
binder what kind of value the field holds and gives it a way to write into
it. Right now only [`bool`] fields can actually be bound; the other kinds are
described so that structs using them still derive, and binding one of them
produces [`Error::UnsupportedFieldKind`][crate::Error::UnsupportedFieldKind].
 */

use core::fmt::{self, Display};

/// The semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A flag: present or absent
    Bool,

    /// Any string-like value
    Text,

    /// Signed or unsigned integers
    Integer,

    /// Floating point numbers
    Float,

    /// A single character
    Char,

    /// A filesystem path
    Path,

    /// A value that may be absent
    Optional,

    /// A value that may appear more than once
    Repeated,
}

impl FieldKind {
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Char => "char",
            FieldKind::Path => "path",
            FieldKind::Optional => "optional",
            FieldKind::Repeated => "repeated",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/**
Exclusive access to a single field of a target, handed to the binder for the
duration of a write.

Kinds that have no coercion yet don't expose their storage at all.
 */
#[derive(Debug)]
pub enum FieldSlot<'a> {
    Bool(&'a mut bool),
    Unsupported(FieldKind),
}

impl FieldSlot<'_> {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match *self {
            FieldSlot::Bool(_) => FieldKind::Bool,
            FieldSlot::Unsupported(kind) => kind,
        }
    }
}

/**
A type that can be used as the type of a field in a
[`#[derive(Target)]`][crate::Target] struct.

`KIND` must agree with the variant returned by [`slot`][Field::slot].
 */
pub trait Field {
    const KIND: FieldKind;

    fn slot(&mut self) -> FieldSlot<'_>;
}
