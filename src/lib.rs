/*!
Declarative command-line flags. Describe your options as a struct, tag each
field with the flags that should set it, and `pargs` fills the struct in from
the command line:

```
use pargs::{Options, Target};

#[derive(Target, Default)]
struct Arguments {
    #[pargs("flag:friend")]
    friend: bool,

    #[pargs("flag:l;loud")]
    loud: bool,
}

let mut args = Arguments::default();
pargs::parse(&mut args, Some(&Options::new().input(["-l"]))).unwrap();

assert!(!args.friend);
assert!(args.loud);
```

Every field needs a `#[pargs("...")]` tag, which is a comma-separated list of
directives:

- `flag:name;n` lists the accepted flags. Names that are a single byte are
  spelled `-n`; all others, including a lone non-ASCII character like `é`,
  are spelled `--name`.
- `mandatory` marks the field as required. By default this is only recorded;
  use [`MandatoryPolicy::Enforce`] to turn it into an error.

Only [`bool`] fields can be bound right now: a matching flag sets the field to
`true`, and an absent one leaves it alone. Other field types are described by
[`FieldKind`], and binding into them is an [`Error::UnsupportedFieldKind`].

Parsing happens in two steps, which are also available separately:
[`introspect`] turns the tags of a [`Target`] type into a list of
[`FieldRule`]s, and [`bind()`] matches those rules against the tokens and writes
into the target.
*/

extern crate self as pargs;

mod arguments;
pub mod bind;
pub mod error;
pub mod field;
mod impls;
mod introspect;
mod rule;
mod target;

pub use pargs_derive::Target;
pub use pargs_tag::Spelling;

pub use arguments::{LoadedArguments, Options};
pub use bind::{MandatoryPolicy, bind};
pub use error::{Error, ErrorKind};
pub use field::{Field, FieldKind, FieldSlot};
pub use introspect::introspect;
pub use rule::FieldRule;
pub use target::{FieldDecl, Shape, Target};

/**
Bind flags into `target`.

If `options` has a non-empty [`input`][Options::input], those tokens are used
verbatim; otherwise the process arguments are used, minus the program name.
 */
pub fn parse<T: Target>(target: &mut T, options: Option<&Options>) -> Result<(), Error> {
    let policy = options
        .map(Options::mandatory_policy)
        .unwrap_or_default();

    let loaded = LoadedArguments::from_env();
    parse_with(target, arguments::select_tokens(options, &loaded), policy)
}

/// Bind flags into `target` from exactly these tokens, ignoring `mandatory`.
pub fn parse_from<T, S>(target: &mut T, tokens: &[S]) -> Result<(), Error>
where
    T: Target,
    S: AsRef<str>,
{
    parse_with(target, tokens, MandatoryPolicy::default())
}

/// Bind flags into `target` from exactly these tokens.
pub fn parse_with<T, S>(target: &mut T, tokens: &[S], policy: MandatoryPolicy) -> Result<(), Error>
where
    T: Target,
    S: AsRef<str>,
{
    let rules = introspect::<T>()?;
    bind(&rules, tokens, target, policy)
}
