#![no_std]

/*!
Low-level parser for the tag text attached to `pargs` fields. Takes care of
splitting directives, finding the `flag:` and `mandatory` directives, and
turning flag names into spellings. Nothing here knows about structs or field
types. Usually this is too low level to use directly.

A tag looks like `flag:v;verbose,mandatory`:

```text
tag        := directive ("," directive)*
directive  := "flag:" flagspec | "mandatory"
flagspec   := name (";" name)*
```

Everything is borrowed from the tag text; nothing allocates.
*/

#[cfg(test)]
extern crate std;

mod spelling;
mod split;

use core::fmt::{self, Display};

pub use spelling::Spelling;
use split::Split;

const FLAG_PREFIX: &str = "flag:";
const MANDATORY: &str = "mandatory";

const DIRECTIVE_SEPARATOR: u8 = b',';
const NAME_SEPARATOR: u8 = b';';

/// Something went wrong while parsing a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    /// The tag was empty, or it didn't have a `flag:` directive, so there
    /// are no spellings that could bind to the field
    Untagged,

    /// A `flag:` directive had nothing after the prefix
    MissingFlagValue,
}

impl Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::Untagged => f.write_str("tag has no flag directive"),
            TagError::MissingFlagValue => f.write_str("missing flag value"),
        }
    }
}

impl core::error::Error for TagError {}

/**
The parsed form of a complete tag.

Directives other than `flag:` and `mandatory` are ignored. If `flag:` appears
more than once, the last one wins.
*/
#[derive(Debug, Clone, Copy)]
pub struct Tag<'a> {
    flags: FlagSpec<'a>,
    mandatory: bool,
}

impl<'a> Tag<'a> {
    pub fn parse(text: &'a str) -> Result<Self, TagError> {
        if text.is_empty() {
            return Err(TagError::Untagged);
        }

        let mut flags = None;
        let mut mandatory = false;

        for directive in Split::new(text, DIRECTIVE_SEPARATOR) {
            if let Some(spec) = directive.strip_prefix(FLAG_PREFIX) {
                flags = Some(FlagSpec::parse(spec)?);
            } else if directive == MANDATORY {
                mandatory = true;
            }
        }

        flags
            .map(|flags| Self { flags, mandatory })
            .ok_or(TagError::Untagged)
    }

    #[inline]
    #[must_use]
    pub fn flags(&self) -> FlagSpec<'a> {
        self.flags
    }

    #[inline]
    #[must_use]
    pub fn mandatory(&self) -> bool {
        self.mandatory
    }
}

/**
The value of a `flag:` directive: one or more names separated by `;`.

Names are not validated; whitespace, duplicates, and other odd characters are
kept as written.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec<'a> {
    raw: &'a str,
}

impl<'a> FlagSpec<'a> {
    /// Parse the text after `flag:`.
    pub fn parse(spec: &'a str) -> Result<Self, TagError> {
        match spec.is_empty() {
            true => Err(TagError::MissingFlagValue),
            false => Ok(Self { raw: spec }),
        }
    }

    /// The spellings, in the order the names appeared.
    #[inline]
    pub fn spellings(&self) -> Spellings<'a> {
        Spellings {
            names: Split::new(self.raw, NAME_SEPARATOR),
        }
    }

    /// Check if a command line token matches any of the spellings.
    #[inline]
    #[must_use]
    pub fn accepts(&self, token: &str) -> bool {
        self.spellings().any(|spelling| spelling.matches(token))
    }
}

/// Iterator over the [`Spelling`]s of a [`FlagSpec`].
#[derive(Debug, Clone)]
pub struct Spellings<'a> {
    names: Split<'a>,
}

impl<'a> Iterator for Spellings<'a> {
    type Item = Spelling<'a>;

    #[inline]
    fn next(&mut self) -> Option<Spelling<'a>> {
        self.names.next().map(Spelling::new)
    }
}
