// Weighted undirected graphs - nodes, edges and the dataset that carries them
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;

use crate::Result;

pub type NodeId = String;

/// An undirected weighted edge.
///
/// `(a, b, w)` and `(b, a, w)` describe the same connection but compare
/// unequal; edge lists are taken as given and never normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Edge {
    #[inline]
    #[must_use]
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Same edge seen from the other endpoint
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }

    /// Endpoint across the edge from `node`.
    ///
    /// Returns `from` for anything that is not `from`, so callers must only
    /// ask about one of the two endpoints.
    #[inline]
    pub fn opposite(&self, node: &str) -> &str {
        if self.from == node {
            &self.to
        } else {
            &self.from
        }
    }
}

/// Immutable graph: an identifier, ordered node labels and an edge list.
///
/// The first node is where growing-tree traversals start. Edge endpoints are
/// not checked against the node list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default = "missing_id", deserialize_with = "id_from_scalar")]
    id: String,
    #[serde(default)]
    nodes: Vec<NodeId>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl Graph {
    #[must_use]
    pub fn new(id: impl Into<String>, nodes: Vec<NodeId>, edges: Vec<Edge>) -> Self {
        Self {
            id: id.into(),
            nodes,
            edges,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Dataset ids are usually strings, but bare numbers show up in hand-written
/// files and are kept as their decimal text. A null or absent id reads as
/// the text `null`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarId {
    Text(String),
    Number(serde_json::Number),
    Null,
}

fn missing_id() -> String {
    "null".to_string()
}

fn id_from_scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ScalarId::deserialize(deserializer)? {
        ScalarId::Text(s) => s,
        ScalarId::Number(n) => n.to_string(),
        ScalarId::Null => missing_id(),
    })
}

/// The `{"graphs": [...]}` input document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDataset {
    #[serde(default)]
    pub graphs: Vec<Graph>,
}

impl GraphDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
