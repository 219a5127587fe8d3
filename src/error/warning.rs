//! The warning accumulator.
//!
//! This module provides [`Warning`], an ordered list of human-readable
//! failure messages. Warnings form a monoid under concatenation so that
//! structural checks can fold any number of child results without
//! special-casing zero or many children.

use std::fmt::{self, Display};

use stillwater::{Monoid, Semigroup, Validation};

/// Zero or more independent validation failures.
///
/// The empty warning means "no problems found". Messages keep the order in
/// which they were produced and are never deduplicated.
///
/// # Combining Warnings
///
/// `Warning` implements `Semigroup` and `Monoid`, so results from several
/// checks can be merged with `combine` or collected from an iterator:
///
/// ```rust
/// use shapelint::Warning;
/// use stillwater::Semigroup;
///
/// let a = Warning::single("missing key 'uuid'");
/// let b = Warning::single("unexpected key 'id'");
///
/// let combined = a.combine(b);
/// assert_eq!(combined.len(), 2);
///
/// let folded: Warning = vec![Warning::empty(), Warning::single("x")].into_iter().collect();
/// assert_eq!(folded.messages(), ["x"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Warning(Vec<String>);

impl Warning {
    /// The warning with no messages.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// A warning with exactly one message.
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    /// Returns `single(message)` when `failed` holds, otherwise `empty()`.
    pub fn when(failed: bool, message: impl Into<String>) -> Self {
        if failed {
            Self::single(message)
        } else {
            Self::empty()
        }
    }

    /// All of `self`'s messages followed by all of `other`'s.
    pub fn concat(mut self, other: Warning) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Applies `context` to every message, keeping count and order.
    pub fn prefixed<F>(self, context: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self(self.0.iter().map(|msg| context(msg.as_str())).collect())
    }

    /// Prepends a literal prefix to every message.
    pub fn with_prefix(self, prefix: &str) -> Self {
        self.prefixed(|msg| format!("{}{}", prefix, msg))
    }

    /// Returns true if there are no messages.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the messages in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the messages as a slice.
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Consumes the warning, returning its messages.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Converts into a stillwater `Validation`, failing iff any message exists.
    pub fn into_validation(self) -> Validation<(), Warning> {
        if self.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(self)
        }
    }
}

impl Semigroup for Warning {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl Monoid for Warning {
    fn empty() -> Self {
        Warning::empty()
    }
}

impl From<Vec<String>> for Warning {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl FromIterator<Warning> for Warning {
    fn from_iter<I: IntoIterator<Item = Warning>>(iter: I) -> Self {
        iter.into_iter().fold(Warning::empty(), Warning::concat)
    }
}

impl Extend<Warning> for Warning {
    fn extend<I: IntoIterator<Item = Warning>>(&mut self, iter: I) {
        for warning in iter {
            self.0.extend(warning.0);
        }
    }
}

impl IntoIterator for Warning {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Warning {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for msg in &self.0 {
            writeln!(f, "{}", msg)?;
        }
        Ok(())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Warning>();
    assert_sync::<Warning>();
};
