use std::ffi::OsStr;

use crate::bind::MandatoryPolicy;

/// Helper type for loading arguments from the environment. Usually you can
/// just call [`parse`][crate::parse] with no input instead of reaching for
/// this type.
///
/// Arguments that aren't valid UTF-8 are converted lossily; they can't match
/// any flag spelling either way.
#[derive(Debug, Clone)]
pub struct LoadedArguments {
    arguments: Vec<String>,
}

impl LoadedArguments {
    /// Load arguments from a complete argument vector, including the program
    /// name in the first position.
    pub fn new<I>(arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        Self {
            arguments: arguments
                .into_iter()
                .map(|arg| arg.as_ref().to_string_lossy().into_owned())
                .collect(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    /// Every argument after the program name
    pub fn tokens(&self) -> &[String] {
        self.arguments.get(1..).unwrap_or(&[])
    }
}

/// The tokens a parse should use: the input from `options` if there is any,
/// or else the loaded arguments.
pub(crate) fn select_tokens<'a>(
    options: Option<&'a Options>,
    fallback: &'a LoadedArguments,
) -> &'a [String] {
    match options.map(Options::tokens) {
        Some(tokens) if !tokens.is_empty() => tokens,
        _ => fallback.tokens(),
    }
}

/**
Options for a call to [`parse`][crate::parse].

```
use pargs::{MandatoryPolicy, Options};

let options = Options::new()
    .input(["--verbose", "-q"])
    .mandatory(MandatoryPolicy::Enforce);

assert_eq!(options.tokens(), ["--verbose", "-q"]);
```
 */
#[derive(Debug, Clone, Default)]
pub struct Options {
    input: Vec<String>,
    mandatory: MandatoryPolicy,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use these tokens instead of the process arguments. An empty list
    /// means the process arguments are used after all.
    #[must_use]
    pub fn input<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.input = tokens.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn mandatory(mut self, policy: MandatoryPolicy) -> Self {
        self.mandatory = policy;
        self
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.input
    }

    #[inline]
    #[must_use]
    pub fn mandatory_policy(&self) -> MandatoryPolicy {
        self.mandatory
    }
}
