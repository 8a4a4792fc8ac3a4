//! Pathnet Graph - relation-indexed collections
//!
//! This crate stores nodes, edges and paths. Every kind lives in a
//! [`Collection`], which indexes its entities twice:
//!
//! - by uid, for identity lookups
//! - by canonical relation, for "what connects these components" lookups
//!
//! Undirected collections canonicalize `(a,b)` and `(b,a)` to the same key.
//! Collections without `multiple` allow one entity per canonical relation.
//!
//! # Example
//!
//! ```
//! use pathnet_core::{Attributes, Relation};
//! use pathnet_graph::{Collection, CollectionConfig, Edge};
//!
//! let mut edges: Collection<Edge> = Collection::new(CollectionConfig::undirected());
//! let uid = edges.add_components(["a", "b"], None, Attributes::new()).unwrap();
//!
//! let found = edges.single(&Relation::from(["b", "a"])).unwrap();
//! assert_eq!(found.uid(), uid);
//! ```

mod collection;
mod config;
mod entity;
mod error;
mod export;
mod index;
mod network;

pub use collection::{Addition, Collection, Selector};
pub use config::{CollectionConfig, NetworkConfig};
pub use entity::{Edge, Entity, Node, Path};
pub use error::{CollectionError, Result};
pub use export::ExportRecord;
pub use index::RelationIndex;
pub use network::{Network, NetworkExport};
