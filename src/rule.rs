use core::fmt::{self, Display};

use joinery::JoinableIterator as _;
use pargs_tag::{FlagSpec, Spelling, Tag};

use crate::error::Error;
use crate::field::FieldKind;
use crate::target::FieldDecl;

/**
The binding contract for a single field: which field it writes to, what kind
of value lives there, and which spellings on the command line trigger it.

Rules are built fresh for every parse by [`introspect`][crate::introspect].
 */
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    index: usize,
    name: &'static str,
    kind: FieldKind,
    flags: FlagSpec<'static>,
    mandatory: bool,
}

impl FieldRule {
    /// Build the rule for the field at `index` by parsing its tag.
    pub fn from_decl(index: usize, decl: &FieldDecl) -> Result<Self, Error> {
        let text = decl
            .tag
            .ok_or(Error::StructFieldNotTagged { field: decl.name })?;

        let tag = Tag::parse(text).map_err(|err| Error::tag(decl.name, err))?;

        Ok(Self {
            index,
            name: decl.name,
            kind: decl.kind,
            flags: tag.flags(),
            mandatory: tag.mandatory(),
        })
    }

    /// The position of the field in its struct
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn mandatory(&self) -> bool {
        self.mandatory
    }

    /// The accepted spellings, in the order they were written in the tag
    #[inline]
    pub fn spellings(&self) -> impl Iterator<Item = Spelling<'static>> + Clone {
        self.flags.spellings()
    }

    /// Check if a command line token is one of this rule's spellings
    #[inline]
    #[must_use]
    pub fn accepts(&self, token: &str) -> bool {
        self.flags.accepts(token)
    }
}

/// Displays the accepted spellings, separated by commas
impl Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spellings().join_with(", "))
    }
}
