//! Attribute export and import.
//!
//! Converters to other graph representations read a collection as a flat
//! list of records and rebuild one through the component-form add.

use crate::collection::Collection;
use crate::entity::Entity;
use crate::error::Result;
use pathnet_core::{Attributes, Relation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// One entity flattened to plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub uid: String,
    /// Components in the entity's own order, not canonicalized.
    pub relation: Relation,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl<T: Entity> Collection<T> {
    /// Flattens every entity, in iteration order.
    pub fn export(&self) -> Vec<ExportRecord> {
        self.values()
            .map(|entity| {
                let object = entity.object();
                ExportRecord {
                    uid: object.uid().to_string(),
                    relation: object.relation().clone(),
                    attributes: object.attributes().to_map(),
                }
            })
            .collect()
    }

    /// Rebuilds entities from records.
    ///
    /// Each record is added under its uid and then given its attributes.
    /// Stops at the first record that cannot be added; records before it
    /// stay in the collection. Returns the number of records added.
    pub fn import<I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = ExportRecord>,
    {
        let mut added = 0;
        for record in records {
            let uid = self.add_components(record.relation, Some(&record.uid), Attributes::new())?;
            self.update(&uid, Attributes::from(record.attributes))?;
            added += 1;
        }
        debug!("Imported {} {} records", added, T::KIND);
        Ok(added)
    }
}
