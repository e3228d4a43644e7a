/*!
The error type for everything that can go wrong while binding flags into a
[`Target`][crate::Target].
 */

use pargs_tag::TagError;

use crate::field::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The target isn't a struct
    #[error("can only bind flags into a struct, not {found}")]
    InvalidTargetType { found: &'static str },

    /// A field has no tag, an empty tag, or a tag without a `flag:` directive
    #[error("field {field:?} is not tagged with a flag")]
    StructFieldNotTagged { field: &'static str },

    /// A field's tag has a `flag:` directive with nothing after it
    #[error("field {field:?}: missing flag value")]
    MissingFlagValue { field: &'static str },

    /// A flag matched a field whose type can't be bound (yet)
    #[error("field {field:?} has kind {kind}, which can't be bound from a flag")]
    UnsupportedFieldKind {
        field: &'static str,
        kind: FieldKind,
    },

    /// A mandatory field matched nothing. Only reported under
    /// [`MandatoryPolicy::Enforce`][crate::MandatoryPolicy::Enforce].
    #[error("mandatory field {field:?} was absent (expected {spellings})")]
    MandatoryFlagAbsent {
        field: &'static str,
        spellings: String,
    },
}

/// The classification of an [`Error`], without any of its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidTargetType,
    StructFieldNotTagged,
    MissingFlagValue,
    UnsupportedFieldKind,
    MandatoryFlagAbsent,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidTargetType { .. } => ErrorKind::InvalidTargetType,
            Error::StructFieldNotTagged { .. } => ErrorKind::StructFieldNotTagged,
            Error::MissingFlagValue { .. } => ErrorKind::MissingFlagValue,
            Error::UnsupportedFieldKind { .. } => ErrorKind::UnsupportedFieldKind,
            Error::MandatoryFlagAbsent { .. } => ErrorKind::MandatoryFlagAbsent,
        }
    }

    pub(crate) fn tag(field: &'static str, error: TagError) -> Self {
        match error {
            TagError::Untagged => Error::StructFieldNotTagged { field },
            TagError::MissingFlagValue => Error::MissingFlagValue { field },
        }
    }
}
