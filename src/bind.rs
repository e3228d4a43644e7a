/*!
Matching rules against command line tokens and writing the results into the
target.
 */

use std::collections::HashSet;

use crate::error::Error;
use crate::field::{FieldKind, FieldSlot};
use crate::rule::FieldRule;
use crate::target::Target;

/// What to do about `mandatory` fields that didn't match any token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MandatoryPolicy {
    /// `mandatory` is parsed but has no effect; absent fields keep their
    /// existing value
    #[default]
    Ignore,

    /// An absent mandatory field is an [`Error::MandatoryFlagAbsent`]
    Enforce,
}

/**
Bind `tokens` into `target` according to `rules`.

Each rule, in order, takes the first token that it accepts and that no
earlier rule already took; a rule binds at most once. Tokens are tracked by
value, so once `-v` has been taken, every other `-v` in `tokens` is ignored
too. Tokens that no rule takes are ignored.

Every match is checked before anything is written, so on error the target is
left untouched.

# Panics

`rules` must come from [`introspect::<T>()`][crate::introspect], and `T`'s
[`field_mut`][Target::field_mut] must agree with its
[`shape`][Target::shape]. If a matched rule names a field that `field_mut`
doesn't have, or that has a different kind than the rule says, this panics.
 */
pub fn bind<T, S>(
    rules: &[FieldRule],
    tokens: &[S],
    target: &mut T,
    policy: MandatoryPolicy,
) -> Result<(), Error>
where
    T: Target,
    S: AsRef<str>,
{
    let mut consumed: HashSet<&str> = HashSet::new();
    let mut matched: Vec<&FieldRule> = Vec::with_capacity(rules.len());

    for rule in rules {
        let token = tokens
            .iter()
            .map(|token| token.as_ref())
            .filter(|token| !consumed.contains(token))
            .find(|token| rule.accepts(token));

        match token {
            Some(token) => {
                check_kind(rule)?;
                consumed.insert(token);
                matched.push(rule);
            }
            None if rule.mandatory() && policy == MandatoryPolicy::Enforce => {
                return Err(Error::MandatoryFlagAbsent {
                    field: rule.name(),
                    spellings: rule.to_string(),
                });
            }
            None => {}
        }
    }

    for rule in matched {
        write(rule, target);
    }

    Ok(())
}

fn check_kind(rule: &FieldRule) -> Result<(), Error> {
    match rule.kind() {
        FieldKind::Bool => Ok(()),
        kind @ (FieldKind::Text
        | FieldKind::Integer
        | FieldKind::Float
        | FieldKind::Char
        | FieldKind::Path
        | FieldKind::Optional
        | FieldKind::Repeated) => Err(Error::UnsupportedFieldKind {
            field: rule.name(),
            kind,
        }),
    }
}

fn write<T: Target>(rule: &FieldRule, target: &mut T) {
    match target.field_mut(rule.index()) {
        Some(FieldSlot::Bool(field)) => *field = true,
        slot => unreachable!(
            "the fields of {} disagree with its shape: field {:?} (#{}) should \
            be {}, but its accessor gave {:?}",
            core::any::type_name::<T>(),
            rule.name(),
            rule.index(),
            rule.kind(),
            slot.map(|slot| slot.kind()),
        ),
    }
}
