//! Dual-indexed collections.
//!
//! A [`Collection`] owns its entities in a uid-keyed store and indexes the
//! same uids by canonical relation. Both maps change together on every
//! mutation:
//!
//! - every uid in the relation index is a key of the store
//! - no member set in the relation index is empty
//! - without `multiple`, no canonical relation has more than one member
//!
//! Each add or remove either applies fully or leaves the collection as it
//! was.

use crate::config::CollectionConfig;
use crate::entity::{resolve_uid, Entity};
use crate::error::{CollectionError, Result};
use crate::index::RelationIndex;
use indexmap::IndexMap;
use pathnet_core::{Attributes, Object, Relation};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Names what an operation should act on.
#[derive(Debug, Clone, Copy)]
pub enum Selector<'a> {
    /// The object stored under this uid.
    Uid(&'a str),
    /// The stored object sharing this object's uid.
    Object(&'a Object),
    /// The members of this relation, after canonicalization.
    Relation(&'a Relation),
}

impl<'a> Selector<'a> {
    /// Selects the stored counterpart of any entity.
    pub fn of<T: Entity>(entity: &'a T) -> Self {
        Selector::Object(entity.object())
    }
}

impl<'a> From<&'a str> for Selector<'a> {
    fn from(uid: &'a str) -> Self {
        Selector::Uid(uid)
    }
}

impl<'a> From<&'a String> for Selector<'a> {
    fn from(uid: &'a String) -> Self {
        Selector::Uid(uid)
    }
}

impl<'a> From<&'a Object> for Selector<'a> {
    fn from(object: &'a Object) -> Self {
        Selector::Object(object)
    }
}

impl<'a> From<&'a Relation> for Selector<'a> {
    fn from(relation: &'a Relation) -> Self {
        Selector::Relation(relation)
    }
}

/// The two shapes an add can take.
#[derive(Debug, Clone)]
pub enum Addition<T> {
    /// An already constructed entity, plus attributes to merge.
    Object { entity: T, attributes: Attributes },
    /// Raw components; the entity is built by the collection.
    Components {
        relation: Relation,
        uid: Option<String>,
        attributes: Attributes,
    },
}

impl<T> Addition<T> {
    pub fn object(entity: T) -> Self {
        Addition::Object {
            entity,
            attributes: Attributes::new(),
        }
    }

    pub fn components(relation: impl Into<Relation>) -> Self {
        Addition::Components {
            relation: relation.into(),
            uid: None,
            attributes: Attributes::new(),
        }
    }

    /// Sets the uid of a component-form add. Ignored for entities.
    pub fn with_uid(mut self, new_uid: impl Into<String>) -> Self {
        if let Addition::Components { uid, .. } = &mut self {
            *uid = Some(new_uid.into());
        }
        self
    }

    pub fn with_attributes(mut self, attrs: Attributes) -> Self {
        match &mut self {
            Addition::Object { attributes, .. } | Addition::Components { attributes, .. } => {
                *attributes = attrs;
            }
        }
        self
    }
}

/// A uid store plus a relation index over the same entities.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    config: CollectionConfig,
    store: IndexMap<String, T>,
    index: RelationIndex,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new(CollectionConfig::default())
    }
}

impl<T: Entity> Collection<T> {
    /// Creates an empty collection. The configuration cannot change later.
    pub fn new(config: CollectionConfig) -> Self {
        Self {
            config,
            store: IndexMap::new(),
            index: RelationIndex::new(config.directed),
        }
    }

    pub fn config(&self) -> CollectionConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn is_multiple(&self) -> bool {
        self.config.multiple
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterates over `(uid, entity)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.store.iter().map(|(uid, entity)| (uid.as_str(), entity))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.store.values()
    }

    /// Snapshot of all stored uids.
    pub fn uids(&self) -> BTreeSet<String> {
        self.store.keys().cloned().collect()
    }

    pub fn get(&self, uid: &str) -> Option<&T> {
        self.store.get(uid)
    }

    /// Mutable access to an entity's attributes. Uid and relation stay fixed.
    pub fn attributes_mut(&mut self, uid: &str) -> Option<&mut Attributes> {
        self.store
            .get_mut(uid)
            .map(|entity| entity.attributes_mut())
    }

    /// Merges attributes into a stored entity.
    pub fn update(&mut self, uid: &str, attributes: Attributes) -> Result<()> {
        let entity = self
            .store
            .get_mut(uid)
            .ok_or_else(|| CollectionError::NotFound(format!("uid '{}'", uid)))?;
        entity.attributes_mut().update(attributes);
        Ok(())
    }

    /// Number of entities ever assigned `relation`, removed ones included.
    pub fn counter(&self, relation: &Relation) -> u64 {
        self.index.count(relation)
    }

    /// Canonical relations with at least one member.
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.index.iter().map(|(relation, _)| relation)
    }

    pub fn contains<'a>(&self, selector: impl Into<Selector<'a>>) -> bool {
        match selector.into() {
            Selector::Uid(uid) => self.store.contains_key(uid),
            Selector::Object(object) => self.store.contains_key(object.uid()),
            Selector::Relation(relation) => self.index.lookup(relation).is_some(),
        }
    }

    /// Resolves a selector to the entities it names.
    ///
    /// A uid or object yields one entity; a relation yields all its members
    /// ordered by uid.
    pub fn find<'a>(&self, selector: impl Into<Selector<'a>>) -> Result<Vec<&T>> {
        match selector.into() {
            Selector::Uid(uid) => self.require(uid).map(|entity| vec![entity]),
            Selector::Object(object) => self.require(object.uid()).map(|entity| vec![entity]),
            Selector::Relation(relation) => self.by_relation(relation),
        }
    }

    /// All members of a relation. `(a,b)` and `(b,a)` match alike when
    /// undirected.
    pub fn by_relation(&self, relation: &Relation) -> Result<Vec<&T>> {
        let members = self.members(relation)?;
        Ok(members
            .iter()
            .filter_map(|uid| self.store.get(uid))
            .collect())
    }

    /// The sole member of a relation.
    pub fn single(&self, relation: &Relation) -> Result<&T> {
        let uid = self.sole_member(relation)?;
        self.require(uid)
    }

    /// Adds an entity or raw components, whichever `addition` carries.
    ///
    /// Returns the uid of the stored (or merged-into) entity.
    pub fn add(&mut self, addition: Addition<T>) -> Result<String> {
        match addition {
            Addition::Object { entity, attributes } => self.add_object(entity, attributes),
            Addition::Components {
                relation,
                uid,
                attributes,
            } => self.add_components(relation, uid.as_deref(), attributes),
        }
    }

    /// Adds one constructed entity.
    ///
    /// If its uid is taken, non-empty `attributes` are merged into the stored
    /// entity instead; empty ones make this a [`CollectionError::DuplicateUid`].
    pub fn add_object(&mut self, entity: T, attributes: Attributes) -> Result<String> {
        let mut uids = self.add_objects(std::iter::once(entity), attributes)?;
        Ok(uids.remove(0))
    }

    /// Adds several constructed entities, all or none.
    ///
    /// `attributes` is applied to each of them.
    pub fn add_objects<I>(&mut self, entities: I, attributes: Attributes) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
    {
        let merge = !attributes.is_empty();
        let mut staged: Vec<(T, Relation)> = Vec::new();
        let mut staged_uids: HashMap<String, usize> = HashMap::new();
        let mut staged_relations: HashMap<Relation, usize> = HashMap::new();
        let mut merges: Vec<String> = Vec::new();
        let mut uids = Vec::new();

        for mut entity in entities {
            T::check_relation(entity.object().relation())?;
            let uid = entity.object().uid().to_string();

            if self.store.contains_key(&uid) {
                if !merge {
                    return Err(self.duplicate_uid(&uid));
                }
                merges.push(uid.clone());
                uids.push(uid);
                continue;
            }
            if let Some(&pos) = staged_uids.get(&uid) {
                if !merge {
                    return Err(self.duplicate_uid(&uid));
                }
                staged[pos].0.attributes_mut().update(attributes.clone());
                uids.push(uid);
                continue;
            }

            let canonical = self.index.canonicalize(entity.object().relation());
            if !self.config.multiple {
                if let Some(existing) = self.first_member(&canonical) {
                    return Err(self.duplicate_relation(canonical, existing.to_string()));
                }
                if let Some(&pos) = staged_relations.get(&canonical) {
                    let existing = staged[pos].0.object().uid().to_string();
                    return Err(self.duplicate_relation(canonical, existing));
                }
            }

            entity.attributes_mut().update(attributes.clone());
            staged_uids.insert(uid.clone(), staged.len());
            staged_relations.insert(canonical.clone(), staged.len());
            staged.push((entity, canonical));
            uids.push(uid);
        }

        for uid in merges {
            if let Some(stored) = self.store.get_mut(&uid) {
                debug!("Merging attributes into {} '{}'", T::KIND, uid);
                stored.attributes_mut().update(attributes.clone());
            }
        }
        for (entity, canonical) in staged {
            let uid = entity.object().uid().to_string();
            debug!("Adding {} '{}' with relation {}", T::KIND, uid, canonical);
            self.index.insert(canonical, uid.clone());
            self.store.insert(uid, entity);
        }

        Ok(uids)
    }

    /// Builds and adds an entity from raw components.
    ///
    /// Without `uid`, kinds that fix their uid (nodes) take it from the
    /// relation; others get one synthesized from the canonical relation and
    /// its counter. When the uid or (without `multiple`) the relation is
    /// taken, non-empty `attributes` are merged into the holder, unless the
    /// caller named a different uid than the relation's holder.
    pub fn add_components(
        &mut self,
        relation: impl Into<Relation>,
        uid: Option<&str>,
        attributes: Attributes,
    ) -> Result<String> {
        let relation = relation.into();
        T::check_relation(&relation)?;
        let resolved = resolve_uid::<T>(uid, &relation)?;
        let uid = resolved.as_deref();
        let merge = !attributes.is_empty();

        if let Some(uid) = uid {
            if self.store.contains_key(uid) {
                if !merge {
                    return Err(self.duplicate_uid(uid));
                }
                self.update(uid, attributes)?;
                debug!("Merged attributes into {} '{}'", T::KIND, uid);
                return Ok(uid.to_string());
            }
        }

        let canonical = self.index.canonicalize(&relation);
        if !self.config.multiple {
            if let Some(existing) = self.first_member(&canonical).map(str::to_string) {
                if !merge || uid.is_some() {
                    return Err(self.duplicate_relation(canonical, existing));
                }
                self.update(&existing, attributes)?;
                debug!("Merged attributes into {} '{}'", T::KIND, existing);
                return Ok(existing);
            }
        }

        let (object, ordinal) = match uid {
            Some(uid) => (Object::new(uid, relation), None),
            None => {
                let store = &self.store;
                let (uid, ordinal) = self
                    .index
                    .synthesize_uid(&canonical, |candidate| store.contains_key(candidate));
                (Object::generated(uid, relation), Some(ordinal))
            }
        };
        let entity = T::from_object(object.with_attributes(attributes))?;
        let uid = entity.object().uid().to_string();

        debug!("Adding {} '{}' with relation {}", T::KIND, uid, canonical);
        match ordinal {
            Some(ordinal) => self
                .index
                .insert_synthesized(canonical, uid.clone(), ordinal),
            None => self.index.insert(canonical, uid.clone()),
        }
        self.store.insert(uid.clone(), entity);
        Ok(uid)
    }

    /// Removes and returns the entity a selector names.
    ///
    /// A relation must name exactly one member.
    pub fn remove<'a>(&mut self, selector: impl Into<Selector<'a>>) -> Result<T> {
        let uid = match selector.into() {
            Selector::Uid(uid) => uid.to_string(),
            Selector::Object(object) => object.uid().to_string(),
            Selector::Relation(relation) => self.sole_member(relation)?.to_string(),
        };
        self.remove_uid(&uid)
    }

    fn remove_uid(&mut self, uid: &str) -> Result<T> {
        let Some(entity) = self.store.swap_remove(uid) else {
            warn!("Cannot remove {} '{}': not found", T::KIND, uid);
            return Err(CollectionError::NotFound(format!("uid '{}'", uid)));
        };
        let canonical = self.index.canonicalize(entity.object().relation());
        self.index.remove(&canonical, uid);
        debug!("Removed {} '{}' with relation {}", T::KIND, uid, canonical);
        Ok(entity)
    }

    fn require(&self, uid: &str) -> Result<&T> {
        self.store
            .get(uid)
            .ok_or_else(|| CollectionError::NotFound(format!("uid '{}'", uid)))
    }

    fn members(&self, relation: &Relation) -> Result<&BTreeSet<String>> {
        if relation.is_empty() {
            return Err(CollectionError::Unsupported(
                "relation selector must have at least one component".to_string(),
            ));
        }
        self.index
            .lookup(relation)
            .ok_or_else(|| CollectionError::NotFound(format!("relation {}", relation)))
    }

    fn sole_member(&self, relation: &Relation) -> Result<&str> {
        let members = self.members(relation)?;
        match members.iter().next() {
            Some(uid) if members.len() == 1 => Ok(uid.as_str()),
            _ => {
                warn!(
                    "Relation {} selects {} {}s",
                    relation,
                    members.len(),
                    T::KIND
                );
                Err(CollectionError::AmbiguousRelation {
                    relation: self.index.canonicalize(relation),
                    members: members.len(),
                })
            }
        }
    }

    fn first_member(&self, canonical: &Relation) -> Option<&str> {
        self.index
            .members(canonical)
            .and_then(|set| set.iter().next())
            .map(String::as_str)
    }

    fn duplicate_uid(&self, uid: &str) -> CollectionError {
        warn!("The {} '{}' already exists in the collection", T::KIND, uid);
        CollectionError::DuplicateUid(uid.to_string())
    }

    fn duplicate_relation(&self, relation: Relation, existing: String) -> CollectionError {
        warn!(
            "Relation {} is already held by {} '{}'",
            relation,
            T::KIND,
            existing
        );
        CollectionError::DuplicateRelation { relation, existing }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = indexmap::map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Edge, Node, Path};
    use serde_json::json;

    fn attrs(pairs: &[(&str, serde_json::Value)]) -> Attributes {
        pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
    }

    #[test]
    fn test_add_object_and_lookup() {
        let mut edges: Collection<Edge> = Collection::default();
        let vw = Edge::new("vw", "v", "w");

        edges.add_object(vw.clone(), Attributes::new()).unwrap();

        assert_eq!(edges.len(), 1);
        assert!(edges.contains("vw"));
        assert!(edges.contains(Selector::of(&vw)));
        assert!(edges.contains(&Relation::from(["v", "w"])));
        assert!(!edges.contains(&Relation::from(["w", "v"])));
        assert_eq!(edges.get("vw").unwrap().w(), "w");
    }

    #[test]
    fn test_duplicate_uid_rejected() {
        let mut nodes: Collection<Node> = Collection::default();
        nodes.add_object(Node::new("a"), Attributes::new()).unwrap();

        let err = nodes.add_object(Node::new("a"), Attributes::new()).unwrap_err();
        assert_eq!(err, CollectionError::DuplicateUid("a".to_string()));
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_duplicate_uid_with_attributes_merges() {
        let mut nodes: Collection<Node> = Collection::default();
        nodes
            .add_object(Node::new("a"), attrs(&[("color", json!("red"))]))
            .unwrap();
        nodes
            .add_object(Node::new("a"), attrs(&[("color", json!("blue"))]))
            .unwrap();

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes.get("a").unwrap().get("color"), Some(&json!("blue")));
    }

    #[test]
    fn test_add_objects_is_atomic() {
        let mut edges: Collection<Edge> = Collection::default();
        let batch = vec![
            Edge::new("e1", "a", "b"),
            Edge::new("e2", "b", "c"),
            Edge::new("e3", "a", "b"),
        ];

        let err = edges.add_objects(batch, Attributes::new()).unwrap_err();
        assert!(matches!(err, CollectionError::DuplicateRelation { .. }));
        assert!(edges.is_empty());
        assert_eq!(edges.counter(&Relation::from(["a", "b"])), 0);
    }

    #[test]
    fn test_undirected_lookup_is_symmetric() {
        let mut edges: Collection<Edge> = Collection::new(CollectionConfig::undirected());
        edges
            .add_components(["a", "b"], Some("ab"), Attributes::new())
            .unwrap();

        let found = edges.single(&Relation::from(["b", "a"])).unwrap();
        assert_eq!(found.object().uid(), "ab");

        let err = edges
            .add_components(["b", "a"], None, Attributes::new())
            .unwrap_err();
        assert!(matches!(err, CollectionError::DuplicateRelation { ref existing, .. } if existing == "ab"));
    }

    #[test]
    fn test_directed_relations_are_distinct() {
        let mut edges: Collection<Edge> = Collection::default();
        edges.add_components(["a", "b"], None, Attributes::new()).unwrap();
        edges.add_components(["b", "a"], None, Attributes::new()).unwrap();

        assert_eq!(edges.len(), 2);
        assert_eq!(edges.by_relation(&Relation::from(["a", "b"])).unwrap().len(), 1);
    }

    #[test]
    fn test_multiple_members_share_relation() {
        let mut edges: Collection<Edge> =
            Collection::new(CollectionConfig::directed().with_multiple(true));
        let first = edges.add_components(["a", "b"], None, Attributes::new()).unwrap();
        let second = edges.add_components(["a", "b"], None, Attributes::new()).unwrap();

        assert_ne!(first, second);
        let members = edges.by_relation(&Relation::from(["a", "b"])).unwrap();
        assert_eq!(members.len(), 2);

        let err = edges.remove(&Relation::from(["a", "b"])).unwrap_err();
        assert!(matches!(err, CollectionError::AmbiguousRelation { members: 2, .. }));
    }

    #[test]
    fn test_synthesized_uid_and_counter() {
        let mut paths: Collection<Path> =
            Collection::new(CollectionConfig::directed().with_multiple(true));
        paths.add_object(Path::new("a", ["a"]), Attributes::new()).unwrap();
        paths.add_object(Path::new("b", ["b"]), Attributes::new()).unwrap();

        let uid = paths.add_components(["a", "b"], None, Attributes::new()).unwrap();
        let ab = Relation::from(["a", "b"]);

        assert_eq!(uid, "a,b#1");
        assert!(paths.get(&uid).unwrap().is_system_uid());
        assert_eq!(paths.counter(&ab), 1);
        assert_eq!(paths.by_relation(&ab).unwrap().len(), 1);
    }

    #[test]
    fn test_counter_survives_removal() {
        let mut edges: Collection<Edge> = Collection::default();
        let ab = Relation::from(["a", "b"]);

        let first = edges.add_components(ab.clone(), None, Attributes::new()).unwrap();
        edges.remove(&ab).unwrap();
        let second = edges.add_components(ab.clone(), None, Attributes::new()).unwrap();

        assert_eq!(first, "a,b#1");
        assert_eq!(second, "a,b#2");
        assert_eq!(edges.counter(&ab), 2);
    }

    #[test]
    fn test_relation_conflict_merges_without_uid() {
        let mut edges: Collection<Edge> = Collection::new(CollectionConfig::undirected());
        edges
            .add_components(["a", "b"], Some("ab"), attrs(&[("weight", json!(1))]))
            .unwrap();

        let merged = edges
            .add_components(["b", "a"], None, attrs(&[("weight", json!(3))]))
            .unwrap();
        assert_eq!(merged, "ab");
        assert_eq!(edges.get("ab").unwrap().weight().unwrap(), 3.0);

        let err = edges
            .add_components(["b", "a"], Some("ba"), attrs(&[("weight", json!(5))]))
            .unwrap_err();
        assert!(matches!(err, CollectionError::DuplicateRelation { .. }));
        assert_eq!(edges.get("ab").unwrap().weight().unwrap(), 3.0);
    }

    #[test]
    fn test_uid_conflict_merges_components() {
        let mut edges: Collection<Edge> = Collection::default();
        edges
            .add_components(["a", "b"], Some("e"), attrs(&[("weight", json!(1))]))
            .unwrap();
        let ab = Relation::from(["a", "b"]);
        let cd = Relation::from(["c", "d"]);

        let merged = edges
            .add_components(["c", "d"], Some("e"), attrs(&[("color", json!("red"))]))
            .unwrap();

        assert_eq!(merged, "e");
        assert_eq!(edges.len(), 1);
        let e = edges.get("e").unwrap();
        assert_eq!(e.relation(), &ab);
        assert_eq!(e.get("color"), Some(&json!("red")));
        assert_eq!(e.weight().unwrap(), 1.0);
        assert_eq!(edges.counter(&ab), 1);
        assert_eq!(edges.counter(&cd), 0);
        assert!(!edges.contains(&cd));
    }

    #[test]
    fn test_node_components_use_their_own_uid() {
        let mut nodes: Collection<Node> = Collection::default();
        let uid = nodes.add_components(["a"], None, Attributes::new()).unwrap();

        assert_eq!(uid, "a");
        assert!(!nodes.get("a").unwrap().is_system_uid());
        assert_eq!(
            nodes.add_components(["a"], None, Attributes::new()).unwrap_err(),
            CollectionError::DuplicateUid("a".to_string())
        );
        assert!(matches!(
            nodes.add_components(["b"], Some("c"), Attributes::new()),
            Err(CollectionError::Unsupported(_))
        ));
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_remove_by_each_selector() {
        let mut edges: Collection<Edge> = Collection::default();
        edges.add_components(["a", "b"], Some("ab"), Attributes::new()).unwrap();
        edges.add_components(["b", "c"], Some("bc"), Attributes::new()).unwrap();
        edges.add_components(["c", "d"], Some("cd"), Attributes::new()).unwrap();

        edges.remove("ab").unwrap();
        let bc = edges.get("bc").unwrap().clone();
        edges.remove(Selector::of(&bc)).unwrap();
        edges.remove(&Relation::from(["c", "d"])).unwrap();

        assert!(edges.is_empty());
        assert_eq!(edges.relations().count(), 0);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut edges: Collection<Edge> = Collection::default();
        assert!(matches!(edges.remove("x"), Err(CollectionError::NotFound(_))));
        assert!(matches!(
            edges.remove(&Relation::from(["a", "b"])),
            Err(CollectionError::NotFound(_))
        ));
    }

    #[test]
    fn test_unsupported_shapes() {
        let mut edges: Collection<Edge> = Collection::default();
        let err = edges
            .add_components(["a", "b", "c"], None, Attributes::new())
            .unwrap_err();
        assert!(matches!(err, CollectionError::Unsupported(_)));

        let empty = Relation::new(Vec::<String>::new());
        assert!(matches!(edges.find(&empty), Err(CollectionError::Unsupported(_))));
        assert!(edges.is_empty());
    }

    #[test]
    fn test_add_dispatches_on_shape() {
        let mut nodes: Collection<Node> = Collection::default();
        let a = nodes.add(Addition::object(Node::new("a"))).unwrap();
        let b = nodes
            .add(
                Addition::components(["b"])
                    .with_uid("b")
                    .with_attributes(attrs(&[("color", json!("red"))])),
            )
            .unwrap();

        assert_eq!(a, "a");
        assert_eq!(b, "b");
        assert_eq!(nodes.get("b").unwrap().get("color"), Some(&json!("red")));
        let expected: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(nodes.uids(), expected);
    }

    #[test]
    fn test_update_and_attributes_mut() {
        let mut nodes: Collection<Node> = Collection::default();
        nodes.add_object(Node::new("a"), Attributes::new()).unwrap();

        nodes.update("a", attrs(&[("x", json!(1))])).unwrap();
        nodes.attributes_mut("a").unwrap().set("y", 2);

        let a = nodes.get("a").unwrap();
        assert_eq!(a.get("x"), Some(&json!(1)));
        assert_eq!(a.get("y"), Some(&json!(2)));
        assert!(nodes.update("zz", Attributes::new()).is_err());
    }
}
