//! Entity kinds stored in collections.
//!
//! Every entity wraps an [`Object`]. The kinds differ only in how many
//! components their relation may have:
//!
//! - [`Node`]: exactly one
//! - [`Edge`]: exactly two, the endpoints `v` and `w`
//! - [`Path`]: one or more, the traversed node sequence
//!
//! Bare [`Object`]s accept any non-empty relation. A node's uid is its
//! single component.
//!
//! Entities hand out their attributes for mutation, never the whole
//! object, so uid and relation stay what the collection indexed.

use crate::error::{CollectionError, Result};
use pathnet_core::{Attributes, Object, Relation};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;

/// Something a [`Collection`](crate::Collection) can own.
pub trait Entity: Clone + fmt::Debug {
    /// Name used in logs and display.
    const KIND: &'static str;

    fn object(&self) -> &Object;

    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Wraps an object, rejecting relations of the wrong arity and uids
    /// the kind does not allow.
    fn from_object(object: Object) -> Result<Self>;

    /// The uid an entity over `relation` must carry, for kinds that fix it.
    fn implied_uid(_relation: &Relation) -> Option<&str> {
        None
    }

    /// Checks that a relation has an arity this kind accepts.
    fn check_relation(relation: &Relation) -> Result<()> {
        if relation.is_empty() {
            return Err(CollectionError::Unsupported(format!(
                "{} relation must have at least one component",
                Self::KIND
            )));
        }
        Ok(())
    }
}

/// Settles the uid of a component-form add: the caller's, the kind's
/// implied one, or none (to be synthesized).
pub(crate) fn resolve_uid<T: Entity>(given: Option<&str>, relation: &Relation) -> Result<Option<String>> {
    match (given, T::implied_uid(relation)) {
        (Some(given), Some(implied)) if given != implied => Err(uid_mismatch(T::KIND, given, implied)),
        (given, implied) => Ok(given.or(implied).map(str::to_string)),
    }
}

fn uid_mismatch(kind: &str, uid: &str, implied: &str) -> CollectionError {
    CollectionError::Unsupported(format!(
        "{} '{}' must use its component '{}' as uid",
        kind, uid, implied
    ))
}

fn check_arity(kind: &str, relation: &Relation, expected: usize) -> Result<()> {
    if relation.len() != expected {
        return Err(CollectionError::Unsupported(format!(
            "{} relation must have {} component(s), got {}",
            kind,
            expected,
            relation.len()
        )));
    }
    Ok(())
}

impl Entity for Object {
    const KIND: &'static str = "Object";

    fn object(&self) -> &Object {
        self
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        Object::attributes_mut(self)
    }

    fn from_object(object: Object) -> Result<Self> {
        Self::check_relation(object.relation())?;
        Ok(object)
    }
}

macro_rules! entity_wrapper {
    ($name:ident, $kind:literal) => {
        impl Entity for $name {
            const KIND: &'static str = $kind;

            fn object(&self) -> &Object {
                &self.0
            }

            fn attributes_mut(&mut self) -> &mut Attributes {
                self.0.attributes_mut()
            }

            fn from_object(object: Object) -> Result<Self> {
                Self::check_relation(object.relation())?;
                if let Some(implied) = Self::implied_uid(object.relation()) {
                    if implied != object.uid() {
                        return Err(uid_mismatch($kind, object.uid(), implied));
                    }
                }
                Ok(Self(object))
            }

            fn implied_uid(relation: &Relation) -> Option<&str> {
                $name::own_uid(relation)
            }

            fn check_relation(relation: &Relation) -> Result<()> {
                $name::check(relation)
            }
        }

        impl $name {
            pub fn attributes_mut(&mut self) -> &mut Attributes {
                self.0.attributes_mut()
            }

            pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
                self.0.set(key, value);
            }

            pub fn update(&mut self, attributes: Attributes) {
                self.0.update(attributes);
            }
        }

        impl Deref for $name {
            type Target = Object;

            fn deref(&self) -> &Object {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.describe($kind))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl Eq for $name {}
    };
}

/// A vertex. Its relation is the single component it stands for.
#[derive(Debug, Clone)]
pub struct Node(Object);

impl Node {
    /// Creates a node whose relation is its own uid.
    pub fn new(uid: impl Into<String>) -> Self {
        let uid = uid.into();
        Self(Object::new(uid.clone(), [uid.as_str()]))
    }

    fn check(relation: &Relation) -> Result<()> {
        check_arity(Self::KIND, relation, 1)
    }

    fn own_uid(relation: &Relation) -> Option<&str> {
        relation.first()
    }
}

/// A connection between two nodes.
#[derive(Debug, Clone)]
pub struct Edge(Object);

impl Edge {
    pub fn new(uid: impl Into<String>, v: impl Into<String>, w: impl Into<String>) -> Self {
        Self(Object::new(uid, Relation::new([v.into(), w.into()])))
    }

    /// Source endpoint (either endpoint when undirected).
    pub fn v(&self) -> &str {
        &self.0.relation().components()[0]
    }

    /// Target endpoint.
    pub fn w(&self) -> &str {
        &self.0.relation().components()[1]
    }

    /// Returns the endpoint opposite `uid`, if `uid` is an endpoint.
    pub fn opposite(&self, uid: &str) -> Option<&str> {
        if self.v() == uid {
            Some(self.w())
        } else if self.w() == uid {
            Some(self.v())
        } else {
            None
        }
    }

    fn check(relation: &Relation) -> Result<()> {
        check_arity(Self::KIND, relation, 2)
    }

    fn own_uid(_relation: &Relation) -> Option<&str> {
        None
    }
}

/// An observed walk through a sequence of nodes.
#[derive(Debug, Clone)]
pub struct Path(Object);

impl Path {
    pub fn new<I, S>(uid: impl Into<String>, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Object::new(uid, Relation::new(nodes)))
    }

    pub fn nodes(&self) -> &[String] {
        self.0.relation().components()
    }

    /// Number of transitions, one less than the number of nodes.
    pub fn length(&self) -> usize {
        self.nodes().len().saturating_sub(1)
    }

    fn check(relation: &Relation) -> Result<()> {
        if relation.is_empty() {
            return Err(CollectionError::Unsupported(
                "Path relation must have at least one component".to_string(),
            ));
        }
        Ok(())
    }

    fn own_uid(_relation: &Relation) -> Option<&str> {
        None
    }
}

entity_wrapper!(Node, "Node");
entity_wrapper!(Edge, "Edge");
entity_wrapper!(Path, "Path");
