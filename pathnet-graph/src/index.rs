//! Relation index - canonical relation to member uids.
//!
//! The index holds uids only; the owning collection holds the objects.
//! Next to the member sets it keeps a per-relation counter of every object
//! ever assigned that relation. The counter never shrinks, which is what
//! keeps synthesized uids from repeating after removals.

use pathnet_core::Relation;
use std::collections::{BTreeSet, HashMap};

/// Separates the relation from the ordinal in synthesized uids.
const ORDINAL_SEPARATOR: char = '#';

#[derive(Debug, Clone, Default)]
pub struct RelationIndex {
    directed: bool,
    /// Canonical relation to member uids. Sets are never empty.
    members: HashMap<Relation, BTreeSet<String>>,
    /// Canonical relation to number of objects ever assigned it.
    counter: HashMap<Relation, u64>,
}

impl RelationIndex {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the key under which `relation` is indexed.
    pub fn canonicalize(&self, relation: &Relation) -> Relation {
        relation.canonical(self.directed)
    }

    /// Members of `relation`, canonicalizing it first.
    pub fn lookup(&self, relation: &Relation) -> Option<&BTreeSet<String>> {
        self.members.get(&self.canonicalize(relation))
    }

    /// Members of an already canonical relation.
    pub fn members(&self, canonical: &Relation) -> Option<&BTreeSet<String>> {
        self.members.get(canonical)
    }

    /// Number of objects ever assigned `relation`.
    pub fn count(&self, relation: &Relation) -> u64 {
        self.counter
            .get(&self.canonicalize(relation))
            .copied()
            .unwrap_or(0)
    }

    /// Records `uid` under a canonical relation and bumps its counter.
    pub fn insert(&mut self, canonical: Relation, uid: String) {
        *self.counter.entry(canonical.clone()).or_insert(0) += 1;
        self.members.entry(canonical).or_default().insert(uid);
    }

    /// Records a uid produced by [`synthesize_uid`](Self::synthesize_uid).
    ///
    /// The counter is raised to the uid's ordinal so it is never issued again.
    pub fn insert_synthesized(&mut self, canonical: Relation, uid: String, ordinal: u64) {
        let count = self.counter.entry(canonical.clone()).or_insert(0);
        *count = (*count + 1).max(ordinal);
        self.members.entry(canonical).or_default().insert(uid);
    }

    /// Drops `uid` from a canonical relation. Returns false if it was absent.
    ///
    /// The counter is left untouched.
    pub fn remove(&mut self, canonical: &Relation, uid: &str) -> bool {
        let Some(set) = self.members.get_mut(canonical) else {
            return false;
        };
        let removed = set.remove(uid);
        if set.is_empty() {
            self.members.remove(canonical);
        }
        removed
    }

    /// Builds the next default uid for a canonical relation.
    ///
    /// Candidates are `"c1,c2,...#n"` for n from `counter + 1` upwards; the
    /// first one for which `is_taken` is false wins. Returns the uid and `n`.
    pub fn synthesize_uid(
        &self,
        canonical: &Relation,
        is_taken: impl Fn(&str) -> bool,
    ) -> (String, u64) {
        let stem = canonical.components().join(",");
        let mut ordinal = self.counter.get(canonical).copied().unwrap_or(0) + 1;
        loop {
            let uid = format!("{}{}{}", stem, ORDINAL_SEPARATOR, ordinal);
            if !is_taken(&uid) {
                return (uid, ordinal);
            }
            ordinal += 1;
        }
    }

    /// Number of distinct canonical relations with at least one member.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over canonical relations and their members.
    pub fn iter(&self) -> impl Iterator<Item = (&Relation, &BTreeSet<String>)> {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup_undirected() {
        let mut index = RelationIndex::new(false);
        let ab = Relation::from(["a", "b"]);
        index.insert(index.canonicalize(&ab), "e1".to_string());

        let members = index.lookup(&Relation::from(["b", "a"])).unwrap();
        assert!(members.contains("e1"));
        assert_eq!(index.count(&Relation::from(["b", "a"])), 1);
    }

    #[test]
    fn test_remove_drops_empty_sets_keeps_counter() {
        let mut index = RelationIndex::new(true);
        let ab = Relation::from(["a", "b"]);
        index.insert(ab.clone(), "e1".to_string());

        assert!(index.remove(&ab, "e1"));
        assert!(!index.remove(&ab, "e1"));
        assert!(index.lookup(&ab).is_none());
        assert!(index.is_empty());
        assert_eq!(index.count(&ab), 1);
    }

    #[test]
    fn test_synthesize_uid_skips_taken() {
        let mut index = RelationIndex::new(true);
        let ab = Relation::from(["a", "b"]);

        let (uid, ordinal) = index.synthesize_uid(&ab, |uid| uid == "a,b#1");
        assert_eq!(uid, "a,b#2");
        assert_eq!(ordinal, 2);

        index.insert_synthesized(ab.clone(), uid, ordinal);
        assert_eq!(index.count(&ab), 2);

        let (next, _) = index.synthesize_uid(&ab, |_| false);
        assert_eq!(next, "a,b#3");
    }
}
