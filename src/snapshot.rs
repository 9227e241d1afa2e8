//! Recompute discipline for callers that receive payloads over time
//!
//! A new payload is the only thing that triggers a rebuild. Each payload is
//! a complete snapshot that replaces the previous one wholesale; nothing is
//! ever merged. When the payload is deep-equal to the current one the
//! existing positions are kept untouched, so unrelated re-renders stay
//! visually stable.

use tracing::debug;

use crate::graph;
use crate::layout::{LayoutCache, LayoutParams, PositionedGraph};
use crate::payload::RelationshipPayload;

/// Result of offering a payload to a [`SnapshotCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// The payload differed and the graph was rebuilt
    Recomputed,
    /// The payload equalled the current one; nothing was recomputed
    Unchanged,
}

/// Holds the latest payload and its positioned graph
#[derive(Debug, Default)]
pub struct SnapshotCache {
    layout: LayoutCache,
    current: Option<(RelationshipPayload, PositionedGraph)>,
    recomputations: usize,
}

impl SnapshotCache {
    pub fn new(params: LayoutParams) -> Self {
        Self {
            layout: LayoutCache::new(params),
            current: None,
            recomputations: 0,
        }
    }

    /// Replace the snapshot with `payload`, the most recently completed fetch
    pub fn offer(&mut self, payload: RelationshipPayload) -> SnapshotOutcome {
        if let Some((current, _)) = &self.current
            && *current == payload
        {
            debug!("Payload unchanged, keeping current layout");
            return SnapshotOutcome::Unchanged;
        }

        let positioned = PositionedGraph::compute_cached(graph::build(&payload), &mut self.layout);
        self.current = Some((payload, positioned));
        self.recomputations += 1;

        SnapshotOutcome::Recomputed
    }

    pub fn current(&self) -> Option<&PositionedGraph> {
        self.current.as_ref().map(|(_, positioned)| positioned)
    }

    pub fn payload(&self) -> Option<&RelationshipPayload> {
        self.current.as_ref().map(|(payload, _)| payload)
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn layout_cache(&self) -> &LayoutCache {
        &self.layout
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
