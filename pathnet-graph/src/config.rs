//! Collection and network configuration.
//!
//! Configuration is fixed when a collection is created.

use serde::{Deserialize, Serialize};

/// How a collection canonicalizes and limits relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// `(a,b)` and `(b,a)` are distinct relations when true.
    pub directed: bool,
    /// More than one object may share a canonical relation when true.
    pub multiple: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            directed: true,
            multiple: false,
        }
    }
}

impl CollectionConfig {
    pub fn directed() -> Self {
        Self::default()
    }

    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::default()
        }
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }
}

/// Configuration of a [`Network`](crate::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub directed: bool,
    /// Several edges may join the same pair of nodes.
    pub multiedges: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            directed: true,
            multiedges: false,
        }
    }
}

impl NetworkConfig {
    /// Nodes relate only themselves, so direction and multiplicity never apply.
    pub fn nodes(&self) -> CollectionConfig {
        CollectionConfig::directed()
    }

    pub fn edges(&self) -> CollectionConfig {
        CollectionConfig {
            directed: self.directed,
            multiple: self.multiedges,
        }
    }

    /// Observed paths may repeat the same node sequence.
    pub fn paths(&self) -> CollectionConfig {
        CollectionConfig {
            directed: self.directed,
            multiple: true,
        }
    }
}
