use std::borrow::Cow;

use regex::Regex;

/// A single text transformation step. Every step is total: it produces a
/// result for any input string, including the empty string.
pub(crate) enum Transform {
    Identity,
    Trim,
    Uppercase,
    Replace { pattern: Regex, replacement: String },
}

impl Transform {
    pub(crate) fn replace(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Ok(Transform::Replace {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_owned(),
        })
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match self {
            Transform::Identity => text,
            Transform::Trim => match text {
                Cow::Borrowed(text) => Cow::Borrowed(text.trim()),
                Cow::Owned(text) => {
                    let trimmed = text.trim();
                    if trimmed.len() == text.len() {
                        Cow::Owned(text)
                    } else {
                        Cow::Owned(trimmed.to_owned())
                    }
                }
            },
            Transform::Uppercase => Cow::Owned(text.to_uppercase()),
            Transform::Replace {
                pattern,
                replacement,
            } => match text {
                Cow::Borrowed(text) => pattern.replace_all(text, replacement.as_str()),
                Cow::Owned(text) => match pattern.replace_all(&text, replacement.as_str()) {
                    // Untouched by the pattern, keep the buffer we already own
                    Cow::Borrowed(_) => Cow::Owned(text),
                    Cow::Owned(replaced) => Cow::Owned(replaced),
                },
            },
        }
    }
}

/// An ordered sequence of transformation steps. The output is a pure function
/// of the input and the step order fixed at construction.
pub(crate) struct Chain(Vec<Transform>);

impl Chain {
    pub(crate) fn new(steps: Vec<Transform>) -> Self {
        Chain(steps)
    }

    /// Pass-through chain, used where the line loop must copy unchanged.
    pub(crate) fn identity() -> Self {
        Chain(vec![Transform::Identity])
    }

    pub(crate) fn process<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.0
            .iter()
            .fold(Cow::Borrowed(text), |text, step| step.apply(text))
    }
}
