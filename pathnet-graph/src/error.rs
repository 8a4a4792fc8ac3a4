//! Errors reported by collections and the network model.

use pathnet_core::{CoreError, Relation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollectionError {
    /// The uid is already taken and no attributes were given to merge.
    #[error("Object '{0}' already exists in the collection")]
    DuplicateUid(String),

    /// The relation is already occupied and the collection is not multiple.
    #[error("Relation {relation} is already held by '{existing}'")]
    DuplicateRelation { relation: Relation, existing: String },

    #[error("No object matches {0}")]
    NotFound(String),

    /// A relation selects more than one object where exactly one is needed.
    #[error("Relation {relation} selects {members} objects")]
    AmbiguousRelation { relation: Relation, members: usize },

    /// The argument has a shape this operation cannot take.
    #[error("Unsupported argument: {0}")]
    Unsupported(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
