use core::fmt::{self, Display};

/**
A single accepted form of a flag, such as `-v` or `--verbose`.

A [`Spelling`] borrows the bare name from the tag text and only adds the
dashes when it's displayed, so matching a token never allocates. A name that
is exactly one byte long is a [`Short`][Spelling::Short] spelling, and
anything else is a [`Long`][Spelling::Long] one. That includes an empty name,
and a single non-ASCII character like `é`, which is spelled `--é`.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spelling<'a> {
    /// `-n`
    Short(&'a str),

    /// `--name`
    Long(&'a str),
}

impl<'a> Spelling<'a> {
    #[inline]
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        match name.len() {
            1 => Self::Short(name),
            _ => Self::Long(name),
        }
    }

    /// The name as written in the tag, without any dashes
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'a str {
        match *self {
            Spelling::Short(name) | Spelling::Long(name) => name,
        }
    }

    #[inline]
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Spelling::Short(_) => "-",
            Spelling::Long(_) => "--",
        }
    }

    /// Check if a command line token is exactly this spelling.
    #[inline]
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        token.strip_prefix(self.prefix()) == Some(self.name())
    }
}

impl Display for Spelling<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix(), self.name())
    }
}
