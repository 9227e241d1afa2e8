use serde::{Deserialize, Serialize};

use super::cache::LayoutCache;
use super::geometry::{LabelAnchor, Position};
use super::radial::{LabelAnchors, NodePositions, RadialLayout};
use crate::error::OrbitError;
use crate::graph::{self, GraphEdge, ServiceGraph};
use crate::payload::RelationshipPayload;

/// A graph together with its node positions and edge label anchors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedGraph {
    #[serde(flatten)]
    pub graph: ServiceGraph,
    pub positions: NodePositions,
    pub label_anchors: LabelAnchors,
}

impl PositionedGraph {
    pub fn compute(graph: ServiceGraph, layout: &RadialLayout) -> Self {
        let positions = layout.layout(&graph);
        let label_anchors = layout.label_anchors(&graph, &positions);

        Self {
            graph,
            positions,
            label_anchors,
        }
    }

    /// Same as [`PositionedGraph::compute`] but reusing memoized slots
    pub fn compute_cached(graph: ServiceGraph, cache: &mut LayoutCache) -> Self {
        let positions = cache.layout(&graph);
        let label_anchors = cache.radial().label_anchors(&graph, &positions);

        Self {
            graph,
            positions,
            label_anchors,
        }
    }

    /// Build and lay out a payload in one go
    pub fn from_payload(payload: &RelationshipPayload, layout: &RadialLayout) -> Self {
        Self::compute(graph::build(payload), layout)
    }

    pub fn graph(&self) -> &ServiceGraph {
        &self.graph
    }

    pub fn position(&self, node_id: &str) -> Option<&Position> {
        self.positions.get(node_id)
    }

    pub fn label_anchor(&self, edge: &GraphEdge) -> Option<&LabelAnchor> {
        self.label_anchors.get(edge.id())
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, OrbitError> {
        serde_json::to_string_pretty(self).map_err(OrbitError::Json)
    }
}
