//! Identity objects - the atomic unit of every network.
//!
//! An object is a uid, the relation it stands for and an open attribute bag.
//! Two objects are equal when their uids are equal; attribute contents and
//! uid origin never take part in equality.

use crate::attributes::Attributes;
use crate::error::{CoreError, Result};
use crate::relation::Relation;
use crate::uid::{UidAllocator, UidOrigin};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::warn;

/// Attribute consulted by [`Object::weight`].
pub const WEIGHT_KEY: &str = "weight";

/// Weight reported when no weight attribute is present.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Selects which attribute, if any, provides an object's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKey<'a> {
    /// Read the named attribute.
    Attribute(&'a str),
    /// Ignore attributes and report the default.
    Disabled,
}

impl<'a> From<&'a str> for WeightKey<'a> {
    fn from(key: &'a str) -> Self {
        WeightKey::Attribute(key)
    }
}

impl<'a> From<Option<&'a str>> for WeightKey<'a> {
    fn from(key: Option<&'a str>) -> Self {
        key.map_or(WeightKey::Disabled, WeightKey::Attribute)
    }
}

impl From<bool> for WeightKey<'_> {
    fn from(enabled: bool) -> Self {
        if enabled {
            WeightKey::Attribute(WEIGHT_KEY)
        } else {
            WeightKey::Disabled
        }
    }
}

/// An identity-bearing object with mutable attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    uid: String,
    origin: UidOrigin,
    relation: Relation,
    #[serde(default)]
    attributes: Attributes,
}

impl Object {
    /// Creates an object with a caller-supplied uid.
    pub fn new(uid: impl Into<String>, relation: impl Into<Relation>) -> Self {
        Self {
            uid: uid.into(),
            origin: UidOrigin::User,
            relation: relation.into(),
            attributes: Attributes::new(),
        }
    }

    /// Creates an object whose uid is drawn from `alloc`.
    pub fn anonymous(relation: impl Into<Relation>, alloc: &mut UidAllocator) -> Self {
        Self::generated(alloc.allocate(), relation)
    }

    /// Creates an object under a uid generated by the caller's own scheme.
    ///
    /// The uid is flagged as system-generated.
    pub fn generated(uid: impl Into<String>, relation: impl Into<Relation>) -> Self {
        Self {
            uid: uid.into(),
            origin: UidOrigin::System,
            relation: relation.into(),
            attributes: Attributes::new(),
        }
    }

    /// Replaces the attribute bag.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn origin(&self) -> UidOrigin {
        self.origin
    }

    /// Returns true if the uid was generated rather than supplied.
    pub fn is_system_uid(&self) -> bool {
        self.origin == UidOrigin::System
    }

    /// The components this object relates, in their original order.
    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.set(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn update(&mut self, attributes: Attributes) {
        self.attributes.update(attributes);
    }

    /// Returns the `"weight"` attribute as a float, or 1.0 if absent.
    pub fn weight(&self) -> Result<f64> {
        self.weight_with(WEIGHT_KEY, DEFAULT_WEIGHT)
    }

    /// Returns the selected attribute as a float.
    ///
    /// A disabled selector or an absent attribute yields `default`. Numbers,
    /// booleans and numeric strings convert; anything else is an error.
    pub fn weight_with<'a>(&self, key: impl Into<WeightKey<'a>>, default: f64) -> Result<f64> {
        let key = match key.into() {
            WeightKey::Disabled => return Ok(default),
            WeightKey::Attribute(key) => key,
        };
        let Some(value) = self.attributes.get(key) else {
            return Ok(default);
        };
        coerce_weight(value).ok_or_else(|| {
            warn!("Attribute '{}' of '{}' is not numeric: {}", key, self.uid, value);
            CoreError::WeightConversion {
                uid: self.uid.clone(),
                key: key.to_string(),
                value: value.clone(),
            }
        })
    }

    /// Returns an independent copy with the same uid.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Formats the object for display under the given kind name.
    ///
    /// Generated uids are shown in angle brackets.
    pub fn describe(&self, kind: &str) -> String {
        match self.origin {
            UidOrigin::User => format!("{} {}", kind, self.uid),
            UidOrigin::System => format!("<{} {}>", kind, self.uid),
        }
    }
}

fn coerce_weight(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("Object"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn edge(uid: &str) -> Object {
        Object::new(uid, ["v", "w"])
    }

    #[test]
    fn test_weight_defaults_to_one() {
        let vw = edge("vw");
        assert_eq!(vw.weight().unwrap(), 1.0);
    }

    #[test]
    fn test_weight_reads_attribute() {
        let mut vw = edge("vw");
        vw.set("weight", 4);
        assert_eq!(vw.weight().unwrap(), 4.0);
    }

    #[test]
    fn test_weight_disabled_ignores_attribute() {
        let mut vw = edge("vw");
        vw.set("weight", 4);

        assert_eq!(vw.weight_with(false, DEFAULT_WEIGHT).unwrap(), 1.0);
        assert_eq!(vw.weight_with(None::<&str>, 2.5).unwrap(), 2.5);
        assert_eq!(vw.weight_with(true, DEFAULT_WEIGHT).unwrap(), 4.0);
    }

    #[test]
    fn test_weight_other_attribute() {
        let mut vw = edge("vw");
        vw.set("length", 5);
        vw.set("label", "3.5");

        assert_eq!(vw.weight_with("length", DEFAULT_WEIGHT).unwrap(), 5.0);
        assert_eq!(vw.weight_with("label", DEFAULT_WEIGHT).unwrap(), 3.5);
        assert_eq!(vw.weight_with("missing", 7.0).unwrap(), 7.0);
    }

    #[test]
    fn test_weight_conversion_error() {
        let mut vw = edge("vw");
        vw.set("weight", "heavy");

        let err = vw.weight().unwrap_err();
        assert!(matches!(err, CoreError::WeightConversion { ref key, .. } if key == "weight"));

        vw.set("weight", json!([1, 2]));
        assert!(vw.weight().is_err());
    }

    #[test]
    fn test_get_absent_returns_none() {
        let u = Object::new("u", ["u"]);
        assert!(u.get("color").is_none());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut u = Object::new("u", ["u"]);
        u.set("pos", json!({"x": 1}));

        let mut v = u.copy();
        v.set("pos", json!({"x": 2}));
        v.set("color", "red");

        assert_eq!(v.uid(), "u");
        assert_eq!(u.get("pos"), Some(&json!({"x": 1})));
        assert!(u.get("color").is_none());
    }

    #[test]
    fn test_equality_is_by_uid() {
        let mut a = edge("e");
        let b = Object::new("e", ["x", "y"]);
        a.set("color", "red");

        assert_eq!(a, b);
        assert_ne!(a, edge("f"));
    }

    #[test]
    fn test_display_depends_on_origin() {
        let mut alloc = UidAllocator::default();
        let named = Object::new("u", ["u"]);
        let anon = Object::anonymous(["u"], &mut alloc);

        assert_eq!(named.to_string(), "Object u");
        assert_eq!(anon.to_string(), "<Object _obj1>");
        assert!(anon.is_system_uid());
        assert!(!named.is_system_uid());
    }
}
