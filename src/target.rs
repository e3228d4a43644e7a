use crate::field::{FieldKind, FieldSlot};

/**
The static description of a single field of a target struct, in the form
produced by `#[derive(Target)]`.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// The name of the field as written in the struct, or its position for
    /// tuple structs
    pub name: &'static str,

    /// The text of the field's `#[pargs("...")]` attribute, if it has one
    pub tag: Option<&'static str>,

    pub kind: FieldKind,
}

impl FieldDecl {
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, tag: Option<&'static str>, kind: FieldKind) -> Self {
        Self { name, tag, kind }
    }
}

/// What a [`Target`] type looks like, as far as binding is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A struct, with its fields in declaration order
    Struct(&'static [FieldDecl]),

    /// Anything that isn't a struct. The string says what it is instead,
    /// like `"enum"` or `"i32"`.
    Other(&'static str),
}

/**
A type that flags can be bound into. Usually you'll get this with
`#[derive(Target)]`:

```
use pargs::Target;

#[derive(Target, Default)]
struct Arguments {
    #[pargs("flag:v;verbose")]
    verbose: bool,
}
```

The derive describes every field in [`shape`][Target::shape] and gives the
binder access to each of them by position through
[`field_mut`][Target::field_mut]. Non-struct types also implement [`Target`]
(with a [`Shape::Other`] shape) so that trying to bind into them is reported
as an [`InvalidTargetType`][crate::Error::InvalidTargetType] error.

Tags are checked when binding, but the shape of the attribute itself is
checked by the derive. A field can only have one `#[pargs]` attribute:

```compile_fail
use pargs::Target;

#[derive(Target)]
struct Arguments {
    #[pargs("flag:v")]
    #[pargs("flag:verbose")]
    verbose: bool,
}
```

and its argument has to be a single string literal:

```compile_fail
use pargs::Target;

#[derive(Target)]
struct Arguments {
    #[pargs(flag = "v")]
    verbose: bool,
}
```

Unions and generic types can't derive [`Target`] either:

```compile_fail
use pargs::Target;

#[derive(Target)]
union Arguments {
    verbose: bool,
    count: u8,
}
```

```compile_fail
use pargs::Target;

#[derive(Target)]
struct Arguments<T> {
    #[pargs("flag:v")]
    verbose: T,
}
```
 */
pub trait Target {
    fn shape() -> Shape;

    /// Get the field at `index`, in the same order as the fields in
    /// [`shape`][Target::shape]. Returns [`None`] if there's no such field.
    ///
    /// Every field in the shape must be reachable here, with a slot of the
    /// kind the shape gives it; [`bind`][crate::bind()] panics otherwise.
    fn field_mut(&mut self, index: usize) -> Option<FieldSlot<'_>>;
}
