//! The network model.
//!
//! A [`Network`] composes three collections: nodes, edges between nodes,
//! and observed paths through nodes. Edges and paths refer to nodes by uid;
//! missing nodes are created when an edge or path needs them, and removing
//! a node removes every edge and path that touches it.

use crate::collection::{Collection, Selector};
use crate::config::NetworkConfig;
use crate::entity::{Edge, Node, Path};
use crate::error::{CollectionError, Result};
use crate::export::ExportRecord;
use pathnet_core::{Attributes, Relation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// All records of a network, for converters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkExport {
    pub config: NetworkConfig,
    pub nodes: Vec<ExportRecord>,
    pub edges: Vec<ExportRecord>,
    pub paths: Vec<ExportRecord>,
}

#[derive(Debug, Clone)]
pub struct Network {
    config: NetworkConfig,
    nodes: Collection<Node>,
    edges: Collection<Edge>,
    paths: Collection<Path>,
}

impl Default for Network {
    fn default() -> Self {
        Self::new(NetworkConfig::default())
    }
}

impl Network {
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            nodes: Collection::new(config.nodes()),
            edges: Collection::new(config.edges()),
            paths: Collection::new(config.paths()),
        }
    }

    pub fn config(&self) -> NetworkConfig {
        self.config
    }

    pub fn nodes(&self) -> &Collection<Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &Collection<Edge> {
        &self.edges
    }

    pub fn paths(&self) -> &Collection<Path> {
        &self.paths
    }

    /// Direct access to the node collection, for attribute edits.
    pub fn nodes_mut(&mut self) -> &mut Collection<Node> {
        &mut self.nodes
    }

    /// Direct access to the edge collection. Edges added here do not create
    /// their endpoint nodes.
    pub fn edges_mut(&mut self) -> &mut Collection<Edge> {
        &mut self.edges
    }

    pub fn paths_mut(&mut self) -> &mut Collection<Path> {
        &mut self.paths
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn number_of_paths(&self) -> usize {
        self.paths.len()
    }

    /// Adds a node whose uid is also its relation.
    pub fn add_node(&mut self, uid: &str, attributes: Attributes) -> Result<String> {
        self.nodes.add_components([uid], Some(uid), attributes)
    }

    /// Adds an edge from `v` to `w`, creating missing endpoints.
    ///
    /// Endpoints are taken from the stored edge, so an add that merges into
    /// an existing edge creates nodes for that edge only.
    pub fn add_edge(
        &mut self,
        v: &str,
        w: &str,
        uid: Option<&str>,
        attributes: Attributes,
    ) -> Result<String> {
        let uid = self.edges.add_components([v, w], uid, attributes)?;
        let missing = self
            .edges
            .get(&uid)
            .map(|edge| self.missing_nodes([edge.v(), edge.w()]))
            .unwrap_or_default();
        self.create_nodes(missing)?;
        Ok(uid)
    }

    /// Adds a path through `nodes`, creating missing nodes of the stored
    /// path.
    pub fn add_path<I, S>(&mut self, nodes: I, uid: Option<&str>, attributes: Attributes) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let uid = self.paths.add_components(Relation::new(nodes), uid, attributes)?;
        let missing = self
            .paths
            .get(&uid)
            .map(|path| self.missing_nodes(path.nodes().iter().map(String::as_str)))
            .unwrap_or_default();
        self.create_nodes(missing)?;
        Ok(uid)
    }

    /// Removes a node together with its incident edges and every path
    /// through it.
    pub fn remove_node(&mut self, uid: &str) -> Result<Node> {
        if !self.nodes.contains(uid) {
            return Err(CollectionError::NotFound(format!("node '{}'", uid)));
        }
        let edges: Vec<String> = self
            .incident_edges(uid)
            .into_iter()
            .map(|edge| edge.uid().to_string())
            .collect();
        let paths: Vec<String> = self
            .paths
            .values()
            .filter(|path| path.relation().contains(uid))
            .map(|path| path.uid().to_string())
            .collect();

        for edge in &edges {
            self.edges.remove(edge)?;
        }
        for path in &paths {
            self.paths.remove(path)?;
        }
        debug!(
            "Removing node '{}' with {} edges and {} paths",
            uid,
            edges.len(),
            paths.len()
        );
        self.nodes.remove(uid)
    }

    pub fn remove_edge<'a>(&mut self, selector: impl Into<Selector<'a>>) -> Result<Edge> {
        self.edges.remove(selector)
    }

    pub fn remove_path<'a>(&mut self, selector: impl Into<Selector<'a>>) -> Result<Path> {
        self.paths.remove(selector)
    }

    /// Edges joining `v` and `w`. Either order matches when undirected.
    pub fn edges_between(&self, v: &str, w: &str) -> Vec<&Edge> {
        self.edges
            .by_relation(&Relation::from([v, w]))
            .unwrap_or_default()
    }

    /// Edges with `uid` as either endpoint.
    pub fn incident_edges(&self, uid: &str) -> Vec<&Edge> {
        self.edges
            .values()
            .filter(|edge| edge.v() == uid || edge.w() == uid)
            .collect()
    }

    /// Flattens all three collections.
    pub fn export(&self) -> NetworkExport {
        NetworkExport {
            config: self.config,
            nodes: self.nodes.export(),
            edges: self.edges.export(),
            paths: self.paths.export(),
        }
    }

    /// Rebuilds a network from an export. Nodes are imported first so that
    /// edge and path endpoints resolve to the exported nodes.
    pub fn import(export: NetworkExport) -> Result<Self> {
        let mut network = Network::new(export.config);
        network.nodes.import(export.nodes)?;
        for record in export.edges {
            let [v, w] = match record.relation.components() {
                [v, w] => [v.clone(), w.clone()],
                _ => {
                    return Err(CollectionError::Unsupported(format!(
                        "edge '{}' must have two endpoints",
                        record.uid
                    )))
                }
            };
            network.add_edge(&v, &w, Some(&record.uid), Attributes::new())?;
            network.edges.update(&record.uid, Attributes::from(record.attributes))?;
        }
        for record in export.paths {
            network.add_path(
                record.relation.components().iter().cloned(),
                Some(&record.uid),
                Attributes::new(),
            )?;
            network.paths.update(&record.uid, Attributes::from(record.attributes))?;
        }
        Ok(network)
    }

    fn missing_nodes<'a>(&self, uids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for uid in uids {
            let known = self.nodes.contains(uid) || self.nodes.contains(&Relation::from([uid]));
            if !known && !missing.iter().any(|m| m == uid) {
                missing.push(uid.to_string());
            }
        }
        missing
    }

    fn create_nodes(&mut self, uids: Vec<String>) -> Result<()> {
        for uid in uids {
            debug!("Creating node '{}'", uid);
            self.add_node(&uid, Attributes::new())?;
        }
        Ok(())
    }
}
