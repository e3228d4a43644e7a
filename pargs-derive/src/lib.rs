mod common;
mod generics;
mod target;

use proc_macro::TokenStream;

/**
Derive `pargs::Target` for a struct, making it a container that command line
flags can be bound into.

Every field must implement `pargs::Field` and carry a tag:

```ignore
#[derive(Target, Default)]
struct Arguments {
    #[pargs("flag:v;verbose")]
    verbose: bool,

    #[pargs("flag:f;force,mandatory")]
    force: bool,
}
```

The tag text is checked when the arguments are parsed, not here, so a missing
or malformed tag shows up as a `pargs::Error`. Deriving on an enum is allowed
and produces a target that always fails with `InvalidTargetType`.
*/
#[proc_macro_derive(Target, attributes(pargs))]
pub fn derive_target(item: TokenStream) -> TokenStream {
    match target::derive_target_result(item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
