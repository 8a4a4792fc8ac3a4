//! Relations - the ordered component sequences objects connect or traverse.
//!
//! An edge relates its two endpoints, a path its node sequence, and a bare
//! node relates only itself. Collections index objects by the *canonical*
//! form of their relation:
//!
//! - directed: the sequence itself
//! - undirected: the lexicographically smaller of the sequence and its
//!   exact reverse, so `(a,b)` and `(b,a)` share one key and so do
//!   `(a,b,c)` and `(c,b,a)`

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of component uids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relation(Vec<String>);

impl Relation {
    /// Creates a relation from any sequence of component identifiers.
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(components.into_iter().map(Into::into).collect())
    }

    pub fn components(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Returns true if `uid` is one of the components.
    pub fn contains(&self, uid: &str) -> bool {
        self.0.iter().any(|c| c == uid)
    }

    /// Returns the same components in reverse order.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().cloned().collect())
    }

    /// Returns the index key for this relation.
    ///
    /// The result depends only on the components and `directed`.
    pub fn canonical(&self, directed: bool) -> Self {
        if directed {
            return self.clone();
        }
        // Compare against the reverse without allocating it.
        let reverse_is_smaller = self.0.iter().rev().lt(self.0.iter());
        if reverse_is_smaller {
            self.reversed()
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for Relation {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for Relation {
    fn from(components: Vec<String>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[&str; N]> for Relation {
    fn from(components: [&str; N]) -> Self {
        Self::new(components)
    }
}

impl From<&[&str]> for Relation {
    fn from(components: &[&str]) -> Self {
        Self::new(components.iter().copied())
    }
}
