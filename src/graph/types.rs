//! Core graph types
//!
//! This module contains the node and edge records produced by the graph
//! builder and consumed by the layout engine and renderers.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Structural role of a node relative to the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Subject,
    Provider,
    Consumer,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Subject => write!(f, "subject"),
            NodeRole::Provider => write!(f, "provider"),
            NodeRole::Consumer => write!(f, "consumer"),
        }
    }
}

/// Which side of the subject a relationship sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    /// Subject → consumer
    Provides,
    /// Provider → subject
    Consumes,
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeDirection::Provides => write!(f, "provides"),
            EdgeDirection::Consumes => write!(f, "consumes"),
        }
    }
}

/// Represents a service in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub role: NodeRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_kind: Option<String>,
}

impl GraphNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn service_kind(&self) -> Option<&str> {
        self.service_kind.as_deref()
    }

    /// Slug to navigate to when this node is selected
    ///
    /// The subject is the page already being viewed, and nodes without a
    /// slug have nowhere to go.
    pub fn navigation_slug(&self) -> Option<&str> {
        match self.role {
            NodeRole::Subject => None,
            NodeRole::Provider | NodeRole::Consumer => {
                self.slug.as_deref().filter(|s| !s.is_empty())
            }
        }
    }
}

/// Represents one contract relationship between two services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub direction: EdgeDirection,
    pub contract_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphEdge {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Deterministic edge identity derived from its endpoints and contract
///
/// Ids are not unique per edge: a participant listed twice under the same
/// contract yields two edges with one id. Maps keyed by edge id, such as
/// [`LabelAnchors`](crate::layout::LabelAnchors), then hold a single entry
/// for both.
pub fn edge_id(source: &str, target: &str, contract_id: &str) -> String {
    format!("{source}->{target}#{contract_id}")
}

/// Deduplicated node set plus one edge per contract relationship
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ServiceGraph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn subject(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.role == NodeRole::Subject)
    }

    /// Nodes with `role`, in insertion order
    pub fn nodes_with_role(&self, role: NodeRole) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    /// Parallel edges between an ordered pair of nodes
    pub fn edges_between<'a>(
        &'a self,
        source: &'a str,
        target: &'a str,
    ) -> impl Iterator<Item = &'a GraphEdge> {
        self.edges
            .iter()
            .filter(move |e| e.source == source && e.target == target)
    }

    /// Check node uniqueness and edge referential integrity
    pub fn validate(&self) -> Result<(), OrbitError> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(OrbitError::GraphError {
                    message: format!("duplicate node id '{}'", node.id),
                });
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(OrbitError::GraphError {
                        message: format!(
                            "edge '{}' references unknown node '{}'",
                            edge.id, endpoint
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Borrowing petgraph view of this graph
    ///
    /// Edges whose endpoints are not in the node list are left out.
    pub fn to_digraph(&self) -> DiGraph<&GraphNode, &GraphEdge> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.nodes.len());

        for node in &self.nodes {
            indices
                .entry(node.id.as_str())
                .or_insert_with(|| graph.add_node(node));
        }

        for edge in &self.edges {
            if let (Some(&from), Some(&to)) = (
                indices.get(edge.source.as_str()),
                indices.get(edge.target.as_str()),
            ) {
                graph.add_edge(from, to, edge);
            }
        }

        graph
    }
}
