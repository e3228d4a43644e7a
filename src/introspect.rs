use crate::error::Error;
use crate::rule::FieldRule;
use crate::target::{Shape, Target};

/**
Compute the binding rules for every field of `T`, in declaration order.

Fails with [`Error::InvalidTargetType`] if `T` isn't a struct, and with the
error for the first field (in declaration order) whose tag is missing or
malformed. No rules are returned unless every field has one.
 */
pub fn introspect<T: Target>() -> Result<Vec<FieldRule>, Error> {
    let fields = match T::shape() {
        Shape::Struct(fields) => fields,
        Shape::Other(found) => return Err(Error::InvalidTargetType { found }),
    };

    fields
        .iter()
        .enumerate()
        .map(|(index, decl)| FieldRule::from_decl(index, decl))
        .collect()
}
